use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("input is required: use a positional FILE, `-` for stdin, or -e/--eval")]
    Missing,
    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),
    #[error("failed to read '{path}': {source}")]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Where the program text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input {
    pub path: Option<PathBuf>,
    pub text: Option<String>,
}

/// Loaded program text with the name diagnostics should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    pub name: Option<String>,
    pub text: String,
}

impl Input {
    pub fn new(path: Option<PathBuf>, text: Option<String>) -> Self {
        Self { path, text }
    }

    pub fn load(&self) -> Result<Source, LoadError> {
        if let Some(text) = &self.text {
            return Ok(Source {
                name: None,
                text: text.clone(),
            });
        }

        match &self.path {
            Some(path) if path.as_os_str() == "-" => load_stdin(),
            Some(path) => load_file(path),
            None => Err(LoadError::Missing),
        }
    }
}

fn load_stdin() -> Result<Source, LoadError> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .map_err(LoadError::Stdin)?;
    Ok(Source {
        name: Some("<stdin>".to_owned()),
        text: buf,
    })
}

fn load_file(path: &Path) -> Result<Source, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::File {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Source {
        name: Some(path.to_string_lossy().into_owned()),
        text,
    })
}

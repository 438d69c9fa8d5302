use std::io::Write;
use std::path::PathBuf;

use super::source_loader::{Input, LoadError, Source};

#[test]
fn inline_text_wins_over_path() {
    let input = Input::new(
        Some(PathBuf::from("missing.tlua")),
        Some("local x = 1".to_owned()),
    );

    let source = input.load().unwrap();

    assert_eq!(
        source,
        Source {
            name: None,
            text: "local x = 1".to_owned(),
        }
    );
}

#[test]
fn file_is_named_by_its_path() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"return 1").unwrap();
    let path = file.path().to_path_buf();

    let source = Input::new(Some(path.clone()), None).load().unwrap();

    assert_eq!(source.text, "return 1");
    assert_eq!(source.name, Some(path.to_string_lossy().into_owned()));
}

#[test]
fn missing_input() {
    let err = Input::new(None, None).load().unwrap_err();

    assert!(matches!(err, LoadError::Missing));
    insta::assert_snapshot!(err.to_string(), @"input is required: use a positional FILE, `-` for stdin, or -e/--eval");
}

#[test]
fn unreadable_file() {
    let err = Input::new(Some(PathBuf::from("does/not/exist.tlua")), None)
        .load()
        .unwrap_err();

    assert!(matches!(err, LoadError::File { .. }));
    assert!(
        err.to_string()
            .starts_with("failed to read 'does/not/exist.tlua': ")
    );
}

//! Emit plain Lua.

use std::fs;
use std::path::PathBuf;

use log::debug;
use tylua_compiler::EmitConfig;

use super::source_loader::Input;
use super::{builder, load_or_exit, report_and_exit};

pub struct EmitArgs {
    pub input: Input,
    pub indent: usize,
    pub no_check: bool,
    pub fuel: Option<u32>,
    pub output: Option<PathBuf>,
    pub color: bool,
}

pub fn run(args: EmitArgs) {
    let source = load_or_exit(&args.input);
    let config = EmitConfig::with_indent_width(args.indent);

    let parsed = match builder(&source, args.fuel).parse() {
        Ok(parsed) => parsed,
        Err(e) => report_and_exit(&e, &source, args.color),
    };

    let lua = if args.no_check {
        debug!("skipping type check");
        parsed.emit_lua(&config)
    } else {
        match parsed.check() {
            Ok(checked) => checked.emit_lua(&config),
            Err(e) => report_and_exit(&e, &source, args.color),
        }
    };

    match &args.output {
        Some(path) => {
            if let Err(e) = fs::write(path, format!("{}\n", lua)) {
                eprintln!("error: failed to write '{}': {}", path.display(), e);
                std::process::exit(1);
            }
            debug!("wrote {} bytes to {}", lua.len() + 1, path.display());
        }
        None => println!("{}", lua),
    }
}

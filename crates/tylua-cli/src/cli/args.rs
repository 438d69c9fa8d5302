//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Program file, or `-` for stdin (positional).
pub fn input_path_arg() -> Arg {
    Arg::new("input_path")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .conflicts_with("input_text")
        .help("Program file (use - for stdin)")
}

/// Inline program text (-e/--eval).
pub fn input_text_arg() -> Arg {
    Arg::new("input_text")
        .short('e')
        .long("eval")
        .value_name("TEXT")
        .help("Inline program text")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize diagnostics")
}

/// Log verbosity (-v, repeatable).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .long("verbose")
        .action(ArgAction::Count)
        .global(true)
        .help("Log pipeline progress to stderr (-vv for trace)")
}

/// Include whitespace and comments (--trivia).
pub fn trivia_arg() -> Arg {
    Arg::new("trivia")
        .long("trivia")
        .action(ArgAction::SetTrue)
        .help("Include whitespace and comment tokens")
}

/// Show source positions (--spans).
pub fn spans_arg() -> Arg {
    Arg::new("spans")
        .long("spans")
        .action(ArgAction::SetTrue)
        .help("Show source positions")
}

/// Print the typed AST (--types).
pub fn types_arg() -> Arg {
    Arg::new("types")
        .long("types")
        .action(ArgAction::SetTrue)
        .help("Print the AST annotated with inferred types")
}

/// Indentation width of emitted Lua (--indent).
pub fn indent_arg() -> Arg {
    Arg::new("indent")
        .long("indent")
        .value_name("WIDTH")
        .default_value("4")
        .value_parser(value_parser!(usize))
        .help("Spaces per indentation level")
}

/// Skip type checking before emitting (--no-check).
pub fn no_check_arg() -> Arg {
    Arg::new("no_check")
        .long("no-check")
        .action(ArgAction::SetTrue)
        .help("Emit without type checking")
}

/// Nesting limit (--fuel).
pub fn fuel_arg() -> Arg {
    Arg::new("fuel")
        .long("fuel")
        .value_name("N")
        .value_parser(value_parser!(u32))
        .help("Maximum nesting depth (default: 512)")
}

/// Write output to file (-o/--output).
pub fn output_file_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Write output to file")
}

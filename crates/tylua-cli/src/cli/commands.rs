//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.

use clap::Command;

use super::args::*;

/// Add the program input args every command reads from.
fn with_input_args(cmd: Command) -> Command {
    cmd.arg(input_path_arg()).arg(input_text_arg())
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("tylua")
        .about("Type checker and Lua emitter for a gradually typed Lua dialect")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(verbose_arg())
        .subcommand(tokens_command())
        .subcommand(ast_command())
        .subcommand(check_command())
        .subcommand(emit_command())
}

/// Show the token stream.
pub fn tokens_command() -> Command {
    let cmd = Command::new("tokens")
        .about("Show the token stream of a program")
        .override_usage(
            "\
  tylua tokens <FILE>
  tylua tokens -e <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  tylua tokens main.tlua              # significant tokens
  tylua tokens main.tlua --trivia     # also whitespace and comments
  tylua tokens -e 'local x = 1'       # inline program"#,
        )
        .arg(trivia_arg());

    with_input_args(cmd)
}

/// Show the parsed AST.
pub fn ast_command() -> Command {
    let cmd = Command::new("ast")
        .about("Show the AST of a program")
        .override_usage(
            "\
  tylua ast <FILE>
  tylua ast -e <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  tylua ast main.tlua                 # untyped AST
  tylua ast main.tlua --spans         # with byte ranges
  tylua ast -e 'return 1 + 2'         # inline program"#,
        )
        .arg(spans_arg())
        .arg(fuel_arg())
        .arg(color_arg());

    with_input_args(cmd)
}

/// Type check a program.
pub fn check_command() -> Command {
    let cmd = Command::new("check")
        .about("Type check a program")
        .override_usage(
            "\
  tylua check <FILE>
  tylua check -e <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  tylua check main.tlua               # print top-level bindings
  tylua check main.tlua --types       # print the typed AST
  cat main.tlua | tylua check -       # read from stdin"#,
        )
        .arg(types_arg())
        .arg(spans_arg())
        .arg(fuel_arg())
        .arg(color_arg());

    with_input_args(cmd)
}

/// Emit plain Lua.
pub fn emit_command() -> Command {
    let cmd = Command::new("emit")
        .about("Type check a program and emit plain Lua")
        .override_usage(
            "\
  tylua emit <FILE> [-o <OUT>]
  tylua emit -e <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  tylua emit main.tlua                # Lua to stdout
  tylua emit main.tlua -o main.lua    # Lua to file
  tylua emit main.tlua --indent 2     # two-space indentation
  tylua emit main.tlua --no-check     # skip the type checker"#,
        )
        .arg(indent_arg())
        .arg(no_check_arg())
        .arg(fuel_arg())
        .arg(output_file_arg())
        .arg(color_arg());

    with_input_args(cmd)
}

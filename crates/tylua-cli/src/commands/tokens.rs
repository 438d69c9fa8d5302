//! Show the token stream of a program.

use std::fmt::Write;

use tylua_compiler::parser::lexer::{lex, token_text};

use super::load_or_exit;
use super::source_loader::Input;

pub struct TokensArgs {
    pub input: Input,
    pub trivia: bool,
}

pub fn run(args: TokensArgs) {
    let source = load_or_exit(&args.input);
    print!("{}", format_tokens(&source.text, args.trivia));
}

/// One `Kind "text" @start..end` line per token.
pub fn format_tokens(source: &str, trivia: bool) -> String {
    let mut out = String::new();
    for token in lex(source) {
        if !trivia && token.kind.is_trivia() {
            continue;
        }
        writeln!(
            out,
            "{:?} {:?} @{}..{}",
            token.kind,
            token_text(source, &token),
            u32::from(token.span.start()),
            u32::from(token.span.end()),
        )
        .expect("String write never fails");
    }
    out
}

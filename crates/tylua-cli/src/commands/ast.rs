//! Show the AST of a program.

use tylua_compiler::parser::AstPrinter;

use super::source_loader::Input;
use super::{builder, load_or_exit, report_and_exit};

pub struct AstArgs {
    pub input: Input,
    pub spans: bool,
    pub fuel: Option<u32>,
    pub color: bool,
}

pub fn run(args: AstArgs) {
    let source = load_or_exit(&args.input);

    let parsed = match builder(&source, args.fuel).parse() {
        Ok(parsed) => parsed,
        Err(e) => report_and_exit(&e, &source, args.color),
    };

    let output = AstPrinter::new(parsed.chunk())
        .with_spans(args.spans)
        .dump();
    print!("{}", output);
}

use std::fmt::Write;

use tylua_compiler::CheckedProgram;
use tylua_compiler::parser::AstPrinter;

use super::source_loader::Input;
use super::{builder, load_or_exit, report_and_exit};

pub struct CheckArgs {
    pub input: Input,
    pub types: bool,
    pub spans: bool,
    pub fuel: Option<u32>,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
    let source = load_or_exit(&args.input);

    let checked = match builder(&source, args.fuel)
        .parse()
        .and_then(|parsed| parsed.check())
    {
        Ok(checked) => checked,
        Err(e) => report_and_exit(&e, &source, args.color),
    };

    if args.types {
        let output = AstPrinter::new(checked.chunk())
            .with_types(checked.arena())
            .with_spans(args.spans)
            .dump();
        print!("{}", output);
    } else {
        print!("{}", format_globals(&checked));
    }
}

/// One `name: type` line per top-level binding, in declaration order.
pub fn format_globals(program: &CheckedProgram<'_>) -> String {
    let mut out = String::new();
    for (name, ty) in program.globals() {
        writeln!(out, "{}: {}", name, program.type_name(ty)).expect("String write never fails");
    }
    out
}

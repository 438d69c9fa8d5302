pub mod ast;
pub mod check;
pub mod emit;
pub mod source_loader;
pub mod tokens;

#[cfg(test)]
mod check_tests;
#[cfg(test)]
mod source_loader_tests;

use tylua_compiler::{Error, ProgramBuilder};

use source_loader::{Input, Source};

/// Reads the program or exits with a message.
pub fn load_or_exit(input: &Input) -> Source {
    match input.load() {
        Ok(source) => source,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Builder over `source` honoring an explicit `--fuel`.
pub fn builder(source: &Source, fuel: Option<u32>) -> ProgramBuilder<'_> {
    let builder = ProgramBuilder::new(&source.text);
    match fuel {
        Some(limit) => builder.with_recursion_fuel(Some(limit)),
        None => builder,
    }
}

/// Prints the rendered diagnostic to stderr and exits with status 1.
pub fn report_and_exit(error: &Error, source: &Source, color: bool) -> ! {
    let mut printer = error.printer().source(&source.text).colored(color);
    if let Some(name) = &source.name {
        printer = printer.path(name);
    }
    eprintln!("{}", printer.render());
    std::process::exit(1);
}

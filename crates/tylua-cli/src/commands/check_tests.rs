use tylua_compiler::ProgramBuilder;

use super::check::format_globals;

fn globals(src: &str) -> String {
    let checked = ProgramBuilder::new(src)
        .parse()
        .and_then(|parsed| parsed.check())
        .unwrap();
    format_globals(&checked)
}

#[test]
fn globals_in_declaration_order() {
    let res = globals("local b = 1 local a = \"s\" local function f(x: number) -> number return x end");

    insta::assert_snapshot!(res, @r"
    b: number
    a: string
    f: (number) -> number
    ");
}

#[test]
fn nested_bindings_are_not_globals() {
    let res = globals("local x = 1 do local y = true end");

    insta::assert_snapshot!(res, @"x: number");
}

#[test]
fn empty_program_has_no_globals() {
    assert_eq!(globals(""), "");
}

use crate::parser::AstPrinter;
use crate::program::ParsedProgram;
use indoc::indoc;

#[test]
fn empty_chunk() {
    let res = ParsedProgram::expect_valid_ast("");
    insta::assert_snapshot!(res, @"");
}

#[test]
fn comments_and_whitespace_are_ignored() {
    let input = indoc! {r#"
    -- leading comment
    local x = 1 -- trailing comment

    --
    "#};

    let res = ParsedProgram::expect_valid_ast(input);

    insta::assert_snapshot!(res, @"(local x 1)");
}

#[test]
fn local_declarations() {
    let input = indoc! {r#"
    local x = 1
    local a, b = 1, 2
    local n: number, s: string = 1, "s"
    "#};

    let res = ParsedProgram::expect_valid_ast(input);

    insta::assert_snapshot!(res, @r#"
    (local x 1)
    (local (a 1) (b 2))
    (local (n:number 1) (s:string "s"))
    "#);
}

#[test]
fn function_declarations() {
    let input = indoc! {r#"
    function f() end
    local function add(a: number, b: number) -> number
        return a + b
    end
    function g(x, y: string)
        print(x)
        return
    end
    "#};

    let res = ParsedProgram::expect_valid_ast(input);

    insta::assert_snapshot!(res, @r"
    (function f (params))
    (local-function add (params a:number b:number) -> number (return (+ a b)))
    (function g (params x y:string) (call print x) (return))
    ");
}

#[test]
fn if_chain() {
    let input = indoc! {r#"
    if a then
        f()
    elseif b then
        g()
    elseif c then
    else
        h()
    end
    "#};

    let res = ParsedProgram::expect_valid_ast(input);

    insta::assert_snapshot!(res, @"(if a (then (call f)) (elseif b (then (call g)) (elseif c (then) (else (call h)))))");
}

#[test]
fn if_without_else() {
    let res = ParsedProgram::expect_valid_ast("if x then y() end");
    insta::assert_snapshot!(res, @"(if x (then (call y)))");
}

#[test]
fn do_block() {
    let res = ParsedProgram::expect_valid_ast("do local x = 1 do end end");
    insta::assert_snapshot!(res, @"(do (local x 1) (do))");
}

#[test]
fn assignments() {
    let input = indoc! {r#"
    x = 1
    t.x = 2
    t[1] = f()
    f().y = 3
    "#};

    let res = ParsedProgram::expect_valid_ast(input);

    insta::assert_snapshot!(res, @r"
    (= x 1)
    (= (. t x) 2)
    (= (index t 1) (call f))
    (= (. (call f) y) 3)
    ");
}

#[test]
fn returns() {
    let input = indoc! {r#"
    function f()
        return 1, 2
    end
    return
    "#};

    let res = ParsedProgram::expect_valid_ast(input);

    insta::assert_snapshot!(res, @r"
    (function f (params) (return 1 2))
    (return)
    ");
}

#[test]
fn return_before_else() {
    let res = ParsedProgram::expect_valid_ast("if c then return 1 else return 2 end");
    insta::assert_snapshot!(res, @"(if c (then (return 1)) (else (return 2)))");
}

#[test]
fn statements_without_separators() {
    let res = ParsedProgram::expect_valid_ast("local a = 1 local b = a f(b) b = 2");
    insta::assert_snapshot!(res, @r"
    (local a 1)
    (local b a)
    (call f b)
    (= b 2)
    ");
}

#[test]
fn statement_spans() {
    let input = indoc! {r#"
    local x = 1
    f(x)
    "#};
    let parsed = ParsedProgram::expect(input);

    let res = AstPrinter::new(parsed.chunk()).with_spans(true).dump();

    insta::assert_snapshot!(res, @r"
    (local x 1) @0..11
    (call f x) @12..16
    ");
}

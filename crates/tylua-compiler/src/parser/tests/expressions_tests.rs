use crate::program::ParsedProgram;
use indoc::indoc;

#[test]
fn multiplication_binds_tighter_than_addition() {
    let res = ParsedProgram::expect_valid_ast("local x = 1 + 2 * 3");
    insta::assert_snapshot!(res, @"(local x (+ 1 (* 2 3)))");
}

#[test]
fn parentheses_override_precedence() {
    let res = ParsedProgram::expect_valid_ast("local x = (1 + 2) * 3");
    insta::assert_snapshot!(res, @"(local x (* (+ 1 2) 3))");
}

#[test]
fn arithmetic_is_left_associative() {
    let res = ParsedProgram::expect_valid_ast("local x = 1 - 2 - 3");
    insta::assert_snapshot!(res, @"(local x (- (- 1 2) 3))");
}

#[test]
fn concatenation_is_right_associative() {
    let res = ParsedProgram::expect_valid_ast(r#"local s = "a" .. "b" .. "c""#);
    insta::assert_snapshot!(res, @r#"(local s (.. "a" (.. "b" "c")))"#);
}

#[test]
fn concatenation_binds_looser_than_addition() {
    let res = ParsedProgram::expect_valid_ast("local s = 1 + 2 .. 3");
    insta::assert_snapshot!(res, @"(local s (.. (+ 1 2) 3))");
}

#[test]
fn comparisons_are_left_associative() {
    let res = ParsedProgram::expect_valid_ast("local c = 1 < 2 == true");
    insta::assert_snapshot!(res, @"(local c (== (< 1 2) true))");
}

#[test]
fn logical_operators() {
    let res = ParsedProgram::expect_valid_ast("local b = a or b and not c");
    insta::assert_snapshot!(res, @"(local b (or a (and b (not c))))");
}

#[test]
fn unary_binds_tighter_than_binary() {
    let input = indoc! {r#"
    local a = not x == y
    local b = -x * y
    local c = #t + 1
    local d = - -x
    "#};

    let res = ParsedProgram::expect_valid_ast(input);

    insta::assert_snapshot!(res, @r"
    (local a (== (not x) y))
    (local b (* (- x) y))
    (local c (+ (# t) 1))
    (local d (- (- x)))
    ");
}

#[test]
fn postfix_binds_tighter_than_unary() {
    let res = ParsedProgram::expect_valid_ast("local n = -p.x");
    insta::assert_snapshot!(res, @"(local n (- (. p x)))");
}

#[test]
fn postfix_chain() {
    let res = ParsedProgram::expect_valid_ast("local v = f(1)(2, 3).x[4]");
    insta::assert_snapshot!(res, @"(local v (index (. (call (call f 1) 2 3) x) 4))");
}

#[test]
fn not_equal_spellings() {
    let res = ParsedProgram::expect_valid_ast("local a, b = x ~= y, x != y");
    insta::assert_snapshot!(res, @"(local (a (~= x y)) (b (~= x y)))");
}

#[test]
fn literals() {
    let input = indoc! {r#"
    local a, b, c, d = nil, true, false, 42
    local e, f = 1.5, 2e3
    local g, h = 'it\'s', "tab\there"
    "#};

    let res = ParsedProgram::expect_valid_ast(input);

    insta::assert_snapshot!(res, @r#"
    (local (a nil) (b true) (c false) (d 42))
    (local (e 1.5) (f 2000))
    (local (g "it's") (h "tab\there"))
    "#);
}

#[test]
fn table_constructors() {
    let input = indoc! {r#"
    local a = {}
    local b = {1, 2, 3,}
    local c = {x = 1, y = "s"}
    local d = {{1}, {k = v}}
    "#};

    let res = ParsedProgram::expect_valid_ast(input);

    insta::assert_snapshot!(res, @r#"
    (local a (table))
    (local b (table 1 2 3))
    (local c (table (x 1) (y "s")))
    (local d (table (table 1) (table (k v))))
    "#);
}

#[test]
fn mixed_table_constructor_parses() {
    let res = ParsedProgram::expect_valid_ast("local t = {1, x = 2}");
    insta::assert_snapshot!(res, @"(local t (table 1 (x 2)))");
}

#[test]
fn keyed_entry_value_may_reference_key_name() {
    let res = ParsedProgram::expect_valid_ast("local t = {x = x == 1}");
    insta::assert_snapshot!(res, @"(local t (table (x (== x 1))))");
}

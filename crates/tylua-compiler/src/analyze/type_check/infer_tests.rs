use crate::parser::parse;

use super::checker::TypeChecker;
use super::error::TypeErrorKind;

/// Type of `expr` evaluated after `prelude`.
#[track_caller]
fn infer(prelude: &str, expr: &str) -> String {
    let src = format!("{prelude}\nlocal __v = {expr}");
    let mut chunk = parse(&src).unwrap();
    let mut checker = TypeChecker::new();
    if let Err(e) = checker.check_chunk(&mut chunk) {
        panic!("unexpected type error: {e}");
    }
    let ty = checker.env().lookup("__v").unwrap();
    checker.arena().type_name(ty)
}

/// `title: message` of the error raised while checking `expr` after `prelude`.
#[track_caller]
fn infer_error(prelude: &str, expr: &str) -> (TypeErrorKind, String) {
    let src = format!("{prelude}\nlocal __v = {expr}");
    let mut chunk = parse(&src).unwrap();
    let mut checker = TypeChecker::new();
    match checker.check_chunk(&mut chunk) {
        Ok(()) => panic!("expected a type error for `{expr}`"),
        Err(e) => (e.kind, format!("{}: {}", e.kind.title(), e.message)),
    }
}

#[test]
fn literals() {
    assert_eq!(infer("", "nil"), "nil");
    assert_eq!(infer("", "true"), "boolean");
    assert_eq!(infer("", "1.5e3"), "number");
    assert_eq!(infer("", "'s'"), "string");
}

#[test]
fn unbound_variable_is_any() {
    assert_eq!(infer("", "undefined_name"), "any");
    assert_eq!(infer("", "undefined_name + 2"), "number");
    assert_eq!(infer("", "-undefined_name"), "any");
}

#[test]
fn unary_operators() {
    assert_eq!(infer("", "-1"), "number");
    assert_eq!(infer("", "not 1"), "boolean");
    assert_eq!(infer("local t = {1, 2}", "#t"), "number");
    assert_eq!(infer("", "#dyn"), "number");
}

#[test]
fn unary_minus_on_string() {
    let (kind, msg) = infer_error("", "-'s'");
    assert_eq!(kind, TypeErrorKind::OperandMismatch);
    insta::assert_snapshot!(msg, @"invalid operand: unary `-` expects a number, found `string`");
}

#[test]
fn length_of_non_array() {
    let (_, msg) = infer_error("local p = {x = 1}", "#p");
    insta::assert_snapshot!(msg, @"invalid operand: `#` expects an array, found `{ x: number }`");
}

#[test]
fn arithmetic() {
    assert_eq!(infer("", "1 + 2 * 3 - 4 / 5"), "number");

    let (_, msg) = infer_error("", "1 + 'a'");
    insta::assert_snapshot!(msg, @"invalid operand: arithmetic operator `+` expects numbers, found `number` and `string`");

    let (_, msg) = infer_error("", "true * 2");
    insta::assert_snapshot!(msg, @"invalid operand: arithmetic operator `*` expects numbers, found `boolean` and `number`");
}

#[test]
fn equality_accepts_anything() {
    assert_eq!(infer("", "1 == 'a'"), "boolean");
    assert_eq!(infer("", "{} ~= nil"), "boolean");
}

#[test]
fn ordering() {
    assert_eq!(infer("", "1 < 2"), "boolean");
    assert_eq!(infer("", "'a' >= 'b'"), "boolean");
    assert_eq!(infer("", "dyn <= 'b'"), "boolean");

    let (_, msg) = infer_error("", "1 < 'a'");
    insta::assert_snapshot!(msg, @"invalid operand: comparison `<` expects two numbers or two strings, found `number` and `string`");
}

#[test]
fn logical_operators_unify_operands() {
    assert_eq!(infer("", "1 and 2"), "number");
    assert_eq!(infer("", "1 or 'a'"), "number | string");
    assert_eq!(infer("", "nil or dyn"), "any");
}

#[test]
fn concatenation() {
    assert_eq!(infer("", "'a' .. 'b' .. dyn"), "string");

    let (_, msg) = infer_error("", "'a' .. 1");
    insta::assert_snapshot!(msg, @"invalid operand: `..` expects strings, found `string` and `number`");
}

#[test]
fn member_access() {
    assert_eq!(infer("local p = {x = 1, y = 'a'}", "p.y"), "string");
    assert_eq!(infer("", "dyn.anything.deeper"), "any");
}

#[test]
fn member_access_errors() {
    let (kind, msg) = infer_error("local p = {x = 1}", "p.y");
    assert_eq!(kind, TypeErrorKind::MissingField);
    insta::assert_snapshot!(msg, @"no such field: type `{ x: number }` has no field `y`");

    let (kind, msg) = infer_error("local n = 1", "n.x");
    assert_eq!(kind, TypeErrorKind::NotIndexable);
    insta::assert_snapshot!(msg, @"not indexable: cannot access field `x` on a value of type `number`");

    let (kind, _) = infer_error("local t = {1}", "t.x");
    assert_eq!(kind, TypeErrorKind::NotIndexable);
}

#[test]
fn indexing() {
    assert_eq!(infer("local t = {'a', 'b'}", "t[1]"), "string");
    assert_eq!(infer("local t = {'a', 'b'}", "t[dyn]"), "string");
    assert_eq!(infer("local p = {x = 1}", "p['x']"), "any");
    assert_eq!(infer("", "dyn[1]"), "any");
}

#[test]
fn indexing_errors() {
    let (_, msg) = infer_error("local t = {1}", "t['k']");
    insta::assert_snapshot!(msg, @"invalid operand: array index must be a number, found `string`");

    let (kind, msg) = infer_error("", "'str'[1]");
    assert_eq!(kind, TypeErrorKind::NotIndexable);
    insta::assert_snapshot!(msg, @"not indexable: cannot index a value of type `string`");
}

#[test]
fn index_expression_is_always_checked() {
    let (_, msg) = infer_error("", "dyn[1 + 'a']");
    insta::assert_snapshot!(msg, @"invalid operand: arithmetic operator `+` expects numbers, found `number` and `string`");
}

#[test]
fn calls() {
    let prelude = "local function f(a: number, b: string) -> boolean return true end";
    assert_eq!(infer(prelude, "f(1, 's')"), "boolean");
    assert_eq!(infer(prelude, "f(1, 's') and 1"), "boolean | number");
    assert_eq!(infer("", "dyn(1, 2, 3)"), "any");
}

#[test]
fn dynamic_callee_still_checks_arguments() {
    let (_, msg) = infer_error("", "dyn(-'x')");
    insta::assert_snapshot!(msg, @"invalid operand: unary `-` expects a number, found `string`");
}

#[test]
fn call_errors() {
    let prelude = "local function f(a: number) -> nil return nil end";

    let (kind, msg) = infer_error(prelude, "f()");
    assert_eq!(kind, TypeErrorKind::ArityMismatch);
    insta::assert_snapshot!(msg, @"arity mismatch: function of type `(number) -> nil` takes 1 argument but 0 were supplied");

    let (_, msg) = infer_error("local function g() end", "g(1)");
    insta::assert_snapshot!(msg, @"arity mismatch: function of type `() -> any` takes 0 arguments but 1 was supplied");

    let (kind, msg) = infer_error(prelude, "f('x')");
    assert_eq!(kind, TypeErrorKind::ArgumentMismatch);
    insta::assert_snapshot!(msg, @"argument type mismatch: argument 1 expects `number`, found `string`");

    let (kind, msg) = infer_error("local s = 's'", "s()");
    assert_eq!(kind, TypeErrorKind::NotCallable);
    insta::assert_snapshot!(msg, @"not callable: cannot call a value of type `string`");
}

#[test]
fn table_literals() {
    assert_eq!(infer("", "{}"), "{}");
    assert_eq!(infer("", "{1, 2, 3}"), "number[]");
    assert_eq!(infer("", "{{1}, {2}}"), "number[][]");
    assert_eq!(infer("", "{1, 'a', true}"), "(number | string | boolean)[]");
    assert_eq!(infer("", "{1, dyn}"), "any[]");
    assert_eq!(infer("", "{b = 1, a = {c = 's'}}"), "{ a: { c: string }, b: number }");
}

#[test]
fn duplicate_key_keeps_last_value() {
    assert_eq!(infer("", "{x = 1, x = 's'}"), "{ x: string }");
}

#[test]
fn mixed_table_literal() {
    let (kind, msg) = infer_error("", "{x = 1, 2}");
    assert_eq!(kind, TypeErrorKind::MixedTable);
    insta::assert_snapshot!(msg, @"mixed table literal: mixed table literals are not allowed");
}

#[test]
fn every_expression_gets_a_type() {
    use crate::parser::ast::{ExprKind, Stmt};

    let mut chunk = parse("local v = f(1 + 2).x").unwrap();
    TypeChecker::new().check_chunk(&mut chunk).unwrap();

    let Stmt::Local(local) = &chunk.stmts[0] else {
        panic!("expected local");
    };
    let member = &local.decls[0].init;
    assert!(member.ty.is_some());
    let ExprKind::Member { object, .. } = &member.kind else {
        panic!("expected member access");
    };
    let ExprKind::Call { callee, args } = &object.kind else {
        panic!("expected call");
    };
    assert!(object.ty.is_some());
    assert!(callee.ty.is_some());
    assert!(args[0].ty.is_some());
}

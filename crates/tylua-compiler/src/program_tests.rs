use indoc::indoc;

use crate::Error;
use crate::analyze::type_check::TypeErrorKind;
use crate::emit::EmitConfig;
use crate::parser::ParseErrorKind;
use crate::program::{CheckedProgram, ParsedProgram, ProgramBuilder};

impl<'p> ParsedProgram<'p> {
    #[track_caller]
    pub fn expect(src: &'p str) -> Self {
        match ProgramBuilder::new(src).parse() {
            Ok(parsed) => parsed,
            Err(e) => panic!(
                "Expected valid syntax, got error:\n{}",
                e.printer().source(src).render()
            ),
        }
    }

    #[track_caller]
    pub fn expect_valid_ast(src: &'p str) -> String {
        Self::expect(src).dump_ast()
    }

    /// Plain rendering of the parse error, without source snippet.
    #[track_caller]
    pub fn expect_parse_error(src: &'p str) -> String {
        match ProgramBuilder::new(src).parse() {
            Ok(parsed) => panic!("Expected parse error, got:\n{}", parsed.dump_ast()),
            Err(e @ Error::Parse(_)) => e.printer().render(),
            Err(e) => panic!("Expected parse error, got {e:?}"),
        }
    }
}

impl<'p> CheckedProgram<'p> {
    #[track_caller]
    pub fn expect_valid(src: &'p str) -> Self {
        match ProgramBuilder::new(src).parse().and_then(ParsedProgram::check) {
            Ok(checked) => checked,
            Err(e) => panic!(
                "Expected valid program, got error:\n{}",
                e.printer().source(src).render()
            ),
        }
    }

    #[track_caller]
    pub fn expect_valid_typed(src: &'p str) -> String {
        Self::expect_valid(src).dump_typed()
    }

    /// `name: type` for every top-level binding.
    #[track_caller]
    pub fn expect_valid_globals(src: &'p str) -> String {
        let program = Self::expect_valid(src);
        let mut out = String::new();
        for (name, ty) in program.globals() {
            out.push_str(&format!("{name}: {}\n", program.type_name(ty)));
        }
        out
    }

    #[track_caller]
    pub fn expect_global_type(src: &'p str, name: &str) -> String {
        let program = Self::expect_valid(src);
        let Some(ty) = program.global(name) else {
            panic!("`{name}` is not bound at the top level");
        };
        program.type_name(ty)
    }

    #[track_caller]
    pub fn expect_error(src: &'p str) -> Error {
        let parsed = ParsedProgram::expect(src);
        match parsed.check() {
            Ok(checked) => panic!(
                "Expected type error, got valid program:\n{}",
                checked.dump_typed()
            ),
            Err(e) => e,
        }
    }

    #[track_caller]
    pub fn expect_invalid(src: &'p str) -> String {
        Self::expect_error(src).printer().source(src).render()
    }

    #[track_caller]
    pub fn expect_error_kind(src: &'p str) -> TypeErrorKind {
        match Self::expect_error(src) {
            Error::TypeCheck(e) => e.kind,
            Error::Parse(e) => panic!("Expected type error, got parse error: {e}"),
        }
    }
}

#[test]
fn homogeneous_array_literal() {
    let res = CheckedProgram::expect_global_type("local t = {1, 2, 3}", "t");
    insta::assert_snapshot!(res, @"number[]");
}

#[test]
fn heterogeneous_array_literal() {
    let res = CheckedProgram::expect_global_type(r#"local t = {1, "a", true}"#, "t");
    insta::assert_snapshot!(res, @"(number | string | boolean)[]");
}

#[test]
fn repeated_element_types_collapse() {
    let res = CheckedProgram::expect_global_type(r#"local t = {1, "a", 2, "b"}"#, "t");
    insta::assert_snapshot!(res, @"(number | string)[]");
}

#[test]
fn empty_table_literal() {
    let res = CheckedProgram::expect_global_type("local t = {}", "t");
    insta::assert_snapshot!(res, @"{}");
}

#[test]
fn keyed_table_literal() {
    let res = CheckedProgram::expect_global_type(r#"local p = {y = "s", x = 1}"#, "p");
    insta::assert_snapshot!(res, @"{ x: number, y: string }");
}

#[test]
fn mixed_table_literal() {
    let res = CheckedProgram::expect_invalid("local t = {1, a = 2}");

    insta::assert_snapshot!(res, @r"
    error: mixed table literals are not allowed
      |
    1 | local t = {1, a = 2}
      |           ^^^^^^^^^^
    ");
}

#[test]
fn annotated_function_call() {
    let input = indoc! {r#"
    local function add(a: number, b: number) -> number
        return a + b
    end
    local r = add(2, 3)
    "#};

    let res = CheckedProgram::expect_valid_globals(input);

    insta::assert_snapshot!(res, @r"
    add: (number, number) -> number
    r: number
    ");
}

#[test]
fn argument_type_mismatch() {
    let input = indoc! {r#"
    local function add(a: number, b: number) -> number
        return a + b
    end
    "#};
    let src = format!("{input}add(\"x\", 5)");

    let err = CheckedProgram::expect_error(&src);

    assert_eq!(err.title(), "argument type mismatch");
    insta::assert_snapshot!(err.printer().render(), @"error at 76..79: argument 1 expects `number`, found `string`");
}

#[test]
fn dynamic_argument_to_typed_parameter() {
    let input = indoc! {r#"
    local function inc(n: number) -> number
        return n + 1
    end
    local r = inc(y)
    "#};

    let err = CheckedProgram::expect_error(input);

    insta::assert_snapshot!(err.to_string(), @"argument 1 expects `number`, found `any`");
}

#[test]
fn field_access() {
    let input = indoc! {r#"
    local obj = {x = 1, y = "s"}
    local a = obj.x
    "#};

    let res = CheckedProgram::expect_global_type(input, "a");

    insta::assert_snapshot!(res, @"number");
}

#[test]
fn missing_field() {
    let res = CheckedProgram::expect_invalid(r#"local obj = {x = 1, y = "s"} local a = obj.z"#);

    insta::assert_snapshot!(res, @r#"
    error: type `{ x: number, y: string }` has no field `z`
      |
    1 | local obj = {x = 1, y = "s"} local a = obj.z
      |                                            ^
    "#);
}

#[test]
fn unbound_name_is_dynamic() {
    let input = indoc! {r#"
    local y = x
    local z = x + 2
    "#};

    let res = CheckedProgram::expect_valid_globals(input);

    insta::assert_snapshot!(res, @r"
    y: any
    z: number
    ");
}

#[test]
fn inner_scope_shadows_outer() {
    let input = indoc! {r#"
    local x = 1
    do
        local x = "s"
        local y = x .. "!"
    end
    local z = x + 1
    "#};

    let res = CheckedProgram::expect_valid_globals(input);

    insta::assert_snapshot!(res, @r"
    x: number
    z: number
    ");
}

#[test]
fn redeclaration_rebinds_in_same_scope() {
    let input = indoc! {r#"
    local x = 1
    local x = "s"
    "#};

    let res = CheckedProgram::expect_global_type(input, "x");

    insta::assert_snapshot!(res, @"string");
}

#[test]
fn locals_see_outer_bindings_only() {
    let input = indoc! {r#"
    local a = "s"
    local a, b = 1, a
    "#};

    let res = CheckedProgram::expect_valid_globals(input);

    insta::assert_snapshot!(res, @r"
    a: number
    b: string
    ");
}

#[test]
fn assignment_is_not_checked() {
    let input = indoc! {r#"
    local x = 1
    x = "now a string"
    "#};

    let res = CheckedProgram::expect_global_type(input, "x");

    insta::assert_snapshot!(res, @"number");
}

#[test]
fn annotation_accepts_subtype() {
    let res = CheckedProgram::expect_global_type("local n: nil = nil", "n");
    insta::assert_snapshot!(res, @"nil");
}

#[test]
fn annotation_mismatch() {
    let res = CheckedProgram::expect_invalid(r#"local x: number = "s""#);

    insta::assert_snapshot!(res, @r#"
    error: `x` is declared as `number` but initialized with `string`
      |
    1 | local x: number = "s"
      |                   ^^^
    "#);
}

#[test]
fn unsupported_annotation() {
    let res = CheckedProgram::expect_invalid("local t: number[] = {1}");

    insta::assert_snapshot!(res, @r"
    error: array type annotations are not supported yet: `number[]`
      |
    1 | local t: number[] = {1}
      |          ^^^^^^^^
    ");
}

#[test]
fn unsupported_parameter_annotation() {
    let kind = CheckedProgram::expect_error_kind("function f(g: (number) -> number) end");
    assert_eq!(kind, TypeErrorKind::UnsupportedAnnotation);
}

#[test]
fn return_type_mismatch() {
    let res = CheckedProgram::expect_invalid(r#"function f() -> number return "s" end"#);

    insta::assert_snapshot!(res, @r#"
    error: function returns `number` but `string` is returned here
      |
    1 | function f() -> number return "s" end
      |                               ^^^
    "#);
}

#[test]
fn multiple_return_values_are_not_checked() {
    let res = CheckedProgram::expect_global_type(r#"function f() -> number return "a", "b" end"#, "f");
    insta::assert_snapshot!(res, @"() -> number");
}

#[test]
fn recursive_function() {
    let input = indoc! {r#"
    local function fact(n: number) -> number
        if n < 2 then
            return 1
        end
        return n * fact(n - 1)
    end
    "#};

    let res = CheckedProgram::expect_global_type(input, "fact");

    insta::assert_snapshot!(res, @"(number) -> number");
}

#[test]
fn nested_function_restores_return_type() {
    let input = indoc! {r#"
    function outer() -> string
        function inner() -> number
            return 1
        end
        return "s"
    end
    "#};

    let res = CheckedProgram::expect_valid_globals(input);

    insta::assert_snapshot!(res, @"outer: () -> string");
}

#[test]
fn parameters_are_scoped_to_body() {
    let input = indoc! {r#"
    local function id(v: string) -> string
        return v
    end
    local r = v
    "#};

    let res = CheckedProgram::expect_global_type(input, "r");

    insta::assert_snapshot!(res, @"any");
}

#[test]
fn unannotated_function_is_dynamic() {
    let input = indoc! {r#"
    function f(a, b)
        return a
    end
    local r = f(1, "x")
    "#};

    let res = CheckedProgram::expect_valid_globals(input);

    insta::assert_snapshot!(res, @r"
    f: (any, any) -> any
    r: any
    ");
}

#[test]
fn typed_dump() {
    let input = indoc! {r#"
    local a = 1 + 2
    function add(x: number, y: number) -> number
        return x + y
    end
    "#};

    let res = CheckedProgram::expect_valid_typed(input);

    insta::assert_snapshot!(res, @r"
    (local a <number> (+ <number> 1 <number> 2 <number>))
    (function add <(number, number) -> number> (params x:number y:number) -> number (return (+ <number> x <number> y <number>)))
    ");
}

#[test]
fn parse_error_surfaces_through_builder() {
    let err = ProgramBuilder::new("local = 1").parse().unwrap_err();

    assert_eq!(err.title(), "unexpected token");
    insta::assert_snapshot!(err.to_string(), @"expected variable name, found `=`");
}

#[test]
fn recursion_fuel_is_configurable() {
    let src = "local x = ((((((((((1))))))))))";

    let err = ProgramBuilder::new(src)
        .with_recursion_fuel(Some(8))
        .parse()
        .unwrap_err();
    let Error::Parse(err) = err else {
        panic!("expected parse error");
    };
    assert_eq!(err.kind, ParseErrorKind::RecursionLimitExceeded);
    insta::assert_snapshot!(err.to_string(), @"input is nested more than 8 levels deep");

    let parsed = ProgramBuilder::new(src)
        .with_recursion_fuel(None)
        .parse()
        .unwrap();
    insta::assert_snapshot!(parsed.dump_ast(), @"(local x 1)");
}

#[test]
fn long_operator_chain_exceeds_recursion_fuel() {
    let src = format!("local x = 1{}", " + 1".repeat(10_000));

    let err = ProgramBuilder::new(&src).parse().unwrap_err();

    let Error::Parse(err) = err else {
        panic!("expected parse error");
    };
    assert_eq!(err.kind, ParseErrorKind::RecursionLimitExceeded);
    insta::assert_snapshot!(err.to_string(), @"input is nested more than 512 levels deep");
}

#[test]
fn long_suffix_chain_exceeds_recursion_fuel() {
    let src = format!("local x = t{}", ".f".repeat(10_000));

    let err = ProgramBuilder::new(&src).parse().unwrap_err();

    let Error::Parse(err) = err else {
        panic!("expected parse error");
    };
    assert_eq!(err.kind, ParseErrorKind::RecursionLimitExceeded);
}

#[test]
fn operator_chain_within_fuel_checks() {
    let src = format!("local x = 1{}", " + 1".repeat(100));

    let res = CheckedProgram::expect_global_type(&src, "x");

    insta::assert_snapshot!(res, @"number");
}

#[test]
fn checked_program_emits_lua() {
    let input = indoc! {r#"
    local function greet(name: string) -> string
        return "hello " .. name
    end
    local msg: string = greet("lua")
    "#};

    let program = CheckedProgram::expect_valid(input);

    insta::assert_snapshot!(program.emit_lua(&EmitConfig::default()), @r#"
    local function greet(name)
        return "hello " .. name
    end
    local msg = greet("lua")
    "#);
}

#[test]
fn checking_does_not_change_emitted_lua() {
    let input = "local t = {x = 1} t.x = t.x + 1";

    let parsed = ParsedProgram::expect(input);
    let before = parsed.emit_lua(&EmitConfig::default());
    let checked = parsed.check().unwrap();

    assert_eq!(before, checked.emit_lua(&EmitConfig::default()));
    insta::assert_snapshot!(before, @r"
    local t = {x = 1}
    t.x = t.x + 1
    ");
}

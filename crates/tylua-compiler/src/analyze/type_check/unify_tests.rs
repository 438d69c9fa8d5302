use super::arena::TypeArena;
use super::types::{
    TYPE_ANY, TYPE_BOOLEAN, TYPE_NIL, TYPE_NUMBER, TYPE_STRING, TYPE_UNKNOWN, TypeId,
};
use super::unify::unify_types;

#[test]
fn empty_input_is_unknown() {
    let mut arena = TypeArena::new();
    assert_eq!(unify_types(&mut arena, &[]), TYPE_UNKNOWN);
    assert_eq!(arena.union(Vec::<TypeId>::new()), TYPE_UNKNOWN);
}

#[test]
fn identical_types_unify_to_themselves() {
    let mut arena = TypeArena::new();
    assert_eq!(
        unify_types(&mut arena, &[TYPE_NUMBER, TYPE_NUMBER, TYPE_NUMBER]),
        TYPE_NUMBER
    );

    let a = arena.table_from([("x", TYPE_NUMBER)]);
    assert_eq!(unify_types(&mut arena, &[a, a]), a);
}

#[test]
fn structurally_equal_unions_unify_to_the_first() {
    let mut arena = TypeArena::new();
    let ns = arena.union([TYPE_NUMBER, TYPE_STRING]);
    let sn = arena.union([TYPE_STRING, TYPE_NUMBER]);

    assert_eq!(unify_types(&mut arena, &[ns, sn]), ns);
}

#[test]
fn distinct_types_form_a_union_in_first_seen_order() {
    let mut arena = TypeArena::new();
    let u = unify_types(
        &mut arena,
        &[TYPE_STRING, TYPE_NUMBER, TYPE_STRING, TYPE_BOOLEAN],
    );

    insta::assert_snapshot!(arena.type_name(u), @"string | number | boolean");
}

#[test]
fn any_absorbs_the_union() {
    let mut arena = TypeArena::new();
    assert_eq!(
        unify_types(&mut arena, &[TYPE_NUMBER, TYPE_ANY, TYPE_STRING]),
        TYPE_ANY
    );

    let ns = arena.union([TYPE_NUMBER, TYPE_STRING]);
    assert_eq!(arena.union([ns, TYPE_ANY]), TYPE_ANY);
}

#[test]
fn nested_unions_flatten() {
    let mut arena = TypeArena::new();
    let ns = arena.union([TYPE_NUMBER, TYPE_STRING]);
    let u = unify_types(&mut arena, &[ns, TYPE_NIL, TYPE_NUMBER]);

    insta::assert_snapshot!(arena.type_name(u), @"number | string | nil");
}

#[test]
fn single_distinct_member_is_not_wrapped() {
    let mut arena = TypeArena::new();
    let arr = arena.array(TYPE_NUMBER);
    let same = arena.array(TYPE_NUMBER);

    assert_eq!(arena.union([arr, same]), arr);
}

#[test]
fn structurally_equal_composites_dedup() {
    let mut arena = TypeArena::new();
    let ns = arena.union([TYPE_NUMBER, TYPE_STRING]);
    let sn = arena.union([TYPE_STRING, TYPE_NUMBER]);
    let a = arena.array(ns);
    let b = arena.array(sn);

    let u = unify_types(&mut arena, &[a, b, TYPE_NIL]);

    insta::assert_snapshot!(arena.type_name(u), @"(number | string)[] | nil");
}

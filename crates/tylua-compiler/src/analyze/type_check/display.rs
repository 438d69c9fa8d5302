//! Deterministic rendering of types, shared by diagnostics and dumps.
//!
//! ```text
//! number   number[]   (number | string)[]   (number, string) -> boolean
//! number | nil   { x: number, y: string }   { [string]: number }   {}
//! ```
//!
//! Function and union types are parenthesized where they would otherwise be
//! ambiguous: as array elements, and functions as union members.

use std::fmt;

use super::arena::TypeArena;
use super::types::{TypeId, TypeShape};

pub struct TypeDisplay<'a> {
    arena: &'a TypeArena,
    id: TypeId,
}

impl TypeArena {
    pub fn display(&self, id: TypeId) -> TypeDisplay<'_> {
        TypeDisplay { arena: self, id }
    }

    /// Same as `display(id).to_string()`.
    pub fn type_name(&self, id: TypeId) -> String {
        self.display(id).to_string()
    }
}

impl fmt::Display for TypeDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_type(self.arena, self.id, f)
    }
}

fn write_type(arena: &TypeArena, id: TypeId, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match arena.shape(id) {
        TypeShape::Number => f.write_str("number"),
        TypeShape::String => f.write_str("string"),
        TypeShape::Boolean => f.write_str("boolean"),
        TypeShape::Nil => f.write_str("nil"),
        TypeShape::Unknown => f.write_str("unknown"),
        TypeShape::Any => f.write_str("any"),
        TypeShape::Array(element) => {
            if needs_parens(arena, *element, true) {
                f.write_str("(")?;
                write_type(arena, *element, f)?;
                f.write_str(")[]")
            } else {
                write_type(arena, *element, f)?;
                f.write_str("[]")
            }
        }
        TypeShape::Table(fields) => {
            if fields.is_empty() {
                return f.write_str("{}");
            }
            f.write_str("{ ")?;
            for (i, (name, ty)) in fields.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{name}: ")?;
                write_type(arena, *ty, f)?;
            }
            f.write_str(" }")
        }
        TypeShape::Record { key, value } => {
            f.write_str("{ [")?;
            write_type(arena, *key, f)?;
            f.write_str("]: ")?;
            write_type(arena, *value, f)?;
            f.write_str(" }")
        }
        TypeShape::Function { params, ret } => {
            f.write_str("(")?;
            for (i, param) in params.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write_type(arena, *param, f)?;
            }
            f.write_str(") -> ")?;
            write_type(arena, *ret, f)
        }
        TypeShape::Union(members) => {
            for (i, member) in members.iter().enumerate() {
                if i > 0 {
                    f.write_str(" | ")?;
                }
                if needs_parens(arena, *member, false) {
                    f.write_str("(")?;
                    write_type(arena, *member, f)?;
                    f.write_str(")")?;
                } else {
                    write_type(arena, *member, f)?;
                }
            }
            Ok(())
        }
    }
}

fn needs_parens(arena: &TypeArena, id: TypeId, as_element: bool) -> bool {
    match arena.shape(id) {
        TypeShape::Function { .. } => true,
        TypeShape::Union(_) => as_element,
        _ => false,
    }
}

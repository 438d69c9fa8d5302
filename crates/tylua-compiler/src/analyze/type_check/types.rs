//! Core type definitions for the type checking pass.
//!
//! Types are interned in a [`TypeArena`](super::TypeArena) and referred to by
//! [`TypeId`]. The primitive and gradual kinds occupy fixed IDs, so they are
//! singletons for the lifetime of an arena.

use std::collections::BTreeMap;

/// Interned type identifier.
///
/// Index into the type arena. Values 0-5 are reserved for builtins
/// (number, string, boolean, nil, unknown, any); composite types start at index 6.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct TypeId(pub u32);

pub const TYPE_NUMBER: TypeId = TypeId(0);
pub const TYPE_STRING: TypeId = TypeId(1);
pub const TYPE_BOOLEAN: TypeId = TypeId(2);
pub const TYPE_NIL: TypeId = TypeId(3);
/// Gradual bottom: subtype of every type.
pub const TYPE_UNKNOWN: TypeId = TypeId(4);
/// Gradual top: supertype of every type.
pub const TYPE_ANY: TypeId = TypeId(5);

impl TypeId {
    pub fn is_builtin(self) -> bool {
        self.0 <= TYPE_ANY.0
    }

    pub fn is_any(self) -> bool {
        self == TYPE_ANY
    }

    pub fn is_number_or_any(self) -> bool {
        self == TYPE_NUMBER || self == TYPE_ANY
    }

    pub fn is_string_or_any(self) -> bool {
        self == TYPE_STRING || self == TYPE_ANY
    }
}

/// The structure of a type.
///
/// Field maps are `BTreeMap`s, so field order never affects hashing,
/// interning or rendering.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum TypeShape {
    Number,
    String,
    Boolean,
    Nil,
    Unknown,
    Any,
    /// Homogeneous sequence.
    Array(TypeId),
    /// Closed record with exactly these fields.
    Table(BTreeMap<String, TypeId>),
    /// Open mapping from keys to values.
    Record { key: TypeId, value: TypeId },
    Function { params: Vec<TypeId>, ret: TypeId },
    /// Flattened, deduplicated, at least two members, never contains `any`.
    Union(Vec<TypeId>),
}

impl TypeShape {
    pub fn kind(&self) -> TypeKind {
        match self {
            Self::Number => TypeKind::Number,
            Self::String => TypeKind::String,
            Self::Boolean => TypeKind::Boolean,
            Self::Nil => TypeKind::Nil,
            Self::Unknown => TypeKind::Unknown,
            Self::Any => TypeKind::Any,
            Self::Array(_) => TypeKind::Array,
            Self::Table(_) => TypeKind::Table,
            Self::Record { .. } => TypeKind::Record,
            Self::Function { .. } => TypeKind::Function,
            Self::Union(_) => TypeKind::Union,
        }
    }
}

/// Discriminant of [`TypeShape`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum TypeKind {
    Number,
    String,
    Boolean,
    Nil,
    Unknown,
    Any,
    Array,
    Table,
    Record,
    Function,
    Union,
}

impl TypeKind {
    pub fn is_primitive(self) -> bool {
        matches!(
            self,
            Self::Number | Self::String | Self::Boolean | Self::Nil
        )
    }

    pub fn is_gradual(self) -> bool {
        matches!(self, Self::Unknown | Self::Any)
    }

    pub fn is_composite(self) -> bool {
        !self.is_primitive() && !self.is_gradual()
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::String => "string",
            Self::Boolean => "boolean",
            Self::Nil => "nil",
            Self::Unknown => "unknown",
            Self::Any => "any",
            Self::Array => "array",
            Self::Table => "table",
            Self::Record => "record",
            Self::Function => "function",
            Self::Union => "union",
        }
    }
}

//! Type checking for the tylua dialect.
//!
//! A single depth-first pass over a parsed [`Chunk`](crate::parser::Chunk).
//! Every expression gets its inferred type written into the tree; the first
//! rule violation aborts the pass with a [`TypeCheckError`].
//!
//! Gradual typing: `any` is accepted everywhere and accepts everything,
//! `unknown` is a subtype of everything. Unbound names infer to `any`.

mod annotation;
mod arena;
mod checker;
mod display;
mod env;
mod error;
mod infer;
mod relations;
mod types;
mod unify;

#[cfg(test)]
mod infer_tests;
#[cfg(test)]
mod unify_tests;

pub use annotation::{primitive_type, resolve_annotation};
pub use arena::TypeArena;
pub use checker::{TypeChecker, check_chunk};
pub use display::TypeDisplay;
pub use env::Environment;
pub use error::{CheckResult, TypeCheckError, TypeErrorKind};
pub use types::{
    TYPE_ANY, TYPE_BOOLEAN, TYPE_NIL, TYPE_NUMBER, TYPE_STRING, TYPE_UNKNOWN, TypeId, TypeKind,
    TypeShape,
};
pub use unify::unify_types;

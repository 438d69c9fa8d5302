//! Semantic analysis.
//!
//! - `type_check` - type model, relations, scoped bindings and the inference pass

pub mod type_check;

pub use type_check::{TypeArena, TypeCheckError, TypeChecker, TypeErrorKind, TypeId};

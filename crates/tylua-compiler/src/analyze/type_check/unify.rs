//! Union construction and type unification.
//!
//! Used for array literal elements and for `and`/`or`, where the result may
//! be either operand.

use super::arena::TypeArena;
use super::types::{TYPE_ANY, TYPE_UNKNOWN, TypeId, TypeShape};

impl TypeArena {
    /// Builds a union from `members`.
    ///
    /// Nested unions are flattened, structurally equal members collapse into
    /// the first occurrence, and any `any` member turns the whole union into
    /// `any`. A single surviving member is returned as is; no members at all
    /// yields `unknown`.
    pub fn union(&mut self, members: impl IntoIterator<Item = TypeId>) -> TypeId {
        let mut flat: Vec<TypeId> = Vec::new();
        for member in members {
            match self.shape(member) {
                TypeShape::Any => return TYPE_ANY,
                TypeShape::Union(inner) => {
                    let inner = inner.clone();
                    for m in inner {
                        self.push_distinct(&mut flat, m);
                    }
                }
                _ => self.push_distinct(&mut flat, member),
            }
        }

        match flat.len() {
            0 => TYPE_UNKNOWN,
            1 => flat[0],
            _ => self.intern(TypeShape::Union(flat)),
        }
    }

    fn push_distinct(&self, members: &mut Vec<TypeId>, candidate: TypeId) {
        if !members.iter().any(|m| self.is_same_type(*m, candidate)) {
            members.push(candidate);
        }
    }
}

/// Common type of `types`: the shared type when all are structurally equal,
/// otherwise the union of the distinct ones.
///
/// An empty input yields `unknown`.
pub fn unify_types(arena: &mut TypeArena, types: &[TypeId]) -> TypeId {
    let Some((&first, rest)) = types.split_first() else {
        return TYPE_UNKNOWN;
    };

    if rest.iter().all(|t| arena.is_same_type(first, *t)) {
        return first;
    }

    arena.union(types.iter().copied())
}

//! Structural equality and subtyping.
//!
//! Composite types have no variance: arrays, functions, tables and records are
//! compatible only when structurally equal. Gradual kinds and unions are the
//! only source of non-trivial subtyping.

use super::arena::TypeArena;
use super::types::{TYPE_ANY, TYPE_UNKNOWN, TypeId, TypeShape};

impl TypeArena {
    /// Structural equality. Union members and table fields compare as sets.
    pub fn is_same_type(&self, a: TypeId, b: TypeId) -> bool {
        if a == b {
            return true;
        }

        match (self.shape(a), self.shape(b)) {
            (TypeShape::Array(x), TypeShape::Array(y)) => self.is_same_type(*x, *y),

            (
                TypeShape::Function {
                    params: pa,
                    ret: ra,
                },
                TypeShape::Function {
                    params: pb,
                    ret: rb,
                },
            ) => {
                pa.len() == pb.len()
                    && pa.iter().zip(pb).all(|(x, y)| self.is_same_type(*x, *y))
                    && self.is_same_type(*ra, *rb)
            }

            (TypeShape::Union(ma), TypeShape::Union(mb)) => {
                ma.len() == mb.len()
                    && ma
                        .iter()
                        .all(|x| mb.iter().any(|y| self.is_same_type(*x, *y)))
            }

            (TypeShape::Table(fa), TypeShape::Table(fb)) => {
                fa.len() == fb.len()
                    && fa.iter().all(|(name, ty)| {
                        fb.get(name)
                            .is_some_and(|other| self.is_same_type(*ty, *other))
                    })
            }

            (
                TypeShape::Record {
                    key: ka,
                    value: va,
                },
                TypeShape::Record {
                    key: kb,
                    value: vb,
                },
            ) => self.is_same_type(*ka, *kb) && self.is_same_type(*va, *vb),

            // Builtins are interned once, so distinct IDs mean distinct kinds.
            _ => false,
        }
    }

    /// Whether a value of type `sub` may be used where `sup` is expected.
    pub fn is_subtype(&self, sub: TypeId, sup: TypeId) -> bool {
        if self.is_same_type(sub, sup) {
            return true;
        }
        if sup == TYPE_ANY || sub == TYPE_UNKNOWN {
            return true;
        }

        if let TypeShape::Union(members) = self.shape(sup) {
            return members.iter().any(|m| self.is_subtype(sub, *m));
        }
        if let TypeShape::Union(members) = self.shape(sub) {
            return members.iter().all(|m| self.is_subtype(*m, sup));
        }

        false
    }
}

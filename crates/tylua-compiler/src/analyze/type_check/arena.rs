//! TypeArena: owns every type created during one checking run.
//!
//! Types are interned, so structurally identical shapes share an ID and
//! nothing is ever freed individually. Unions are the exception: members keep
//! their construction order, so two unions with the same members in a
//! different order get different IDs and are equal only through
//! [`is_same_type`](TypeArena::is_same_type).

use std::collections::{BTreeMap, HashMap};

use super::types::{
    TYPE_ANY, TYPE_BOOLEAN, TYPE_NIL, TYPE_NUMBER, TYPE_STRING, TYPE_UNKNOWN, TypeId, TypeKind,
    TypeShape,
};

#[derive(Clone, Debug)]
pub struct TypeArena {
    types: Vec<TypeShape>,
    type_map: HashMap<TypeShape, TypeId>,
}

impl Default for TypeArena {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeArena {
    pub fn new() -> Self {
        let mut arena = Self {
            types: Vec::new(),
            type_map: HashMap::new(),
        };

        // Pre-register builtin types at their expected IDs
        let number_id = arena.intern(TypeShape::Number);
        debug_assert_eq!(number_id, TYPE_NUMBER);

        let string_id = arena.intern(TypeShape::String);
        debug_assert_eq!(string_id, TYPE_STRING);

        let boolean_id = arena.intern(TypeShape::Boolean);
        debug_assert_eq!(boolean_id, TYPE_BOOLEAN);

        let nil_id = arena.intern(TypeShape::Nil);
        debug_assert_eq!(nil_id, TYPE_NIL);

        let unknown_id = arena.intern(TypeShape::Unknown);
        debug_assert_eq!(unknown_id, TYPE_UNKNOWN);

        let any_id = arena.intern(TypeShape::Any);
        debug_assert_eq!(any_id, TYPE_ANY);

        arena
    }

    /// Intern a type, returning its ID. Deduplicates identical shapes.
    ///
    /// Unions must go through [`union`](Self::union) so their invariants hold.
    pub(crate) fn intern(&mut self, shape: TypeShape) -> TypeId {
        if let Some(&id) = self.type_map.get(&shape) {
            return id;
        }

        let id = TypeId(self.types.len() as u32);
        self.types.push(shape.clone());
        self.type_map.insert(shape, id);
        id
    }

    /// The shape behind `id`.
    ///
    /// # Panics
    /// If `id` was not produced by this arena.
    pub fn shape(&self, id: TypeId) -> &TypeShape {
        &self.types[id.0 as usize]
    }

    pub fn get(&self, id: TypeId) -> Option<&TypeShape> {
        self.types.get(id.0 as usize)
    }

    pub fn kind(&self, id: TypeId) -> TypeKind {
        self.shape(id).kind()
    }

    /// Number of distinct types, builtins included.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn array(&mut self, element: TypeId) -> TypeId {
        self.intern(TypeShape::Array(element))
    }

    pub fn table(&mut self, fields: BTreeMap<String, TypeId>) -> TypeId {
        self.intern(TypeShape::Table(fields))
    }

    pub fn table_from<K: Into<String>>(
        &mut self,
        fields: impl IntoIterator<Item = (K, TypeId)>,
    ) -> TypeId {
        let fields = fields.into_iter().map(|(k, v)| (k.into(), v)).collect();
        self.table(fields)
    }

    pub fn empty_table(&mut self) -> TypeId {
        self.table(BTreeMap::new())
    }

    pub fn record(&mut self, key: TypeId, value: TypeId) -> TypeId {
        self.intern(TypeShape::Record { key, value })
    }

    pub fn function(&mut self, params: Vec<TypeId>, ret: TypeId) -> TypeId {
        self.intern(TypeShape::Function { params, ret })
    }

    /// Field type of a table, if `id` is a table with that field.
    pub fn field(&self, id: TypeId, name: &str) -> Option<TypeId> {
        match self.shape(id) {
            TypeShape::Table(fields) => fields.get(name).copied(),
            _ => None,
        }
    }

    /// Element type of an array.
    pub fn element(&self, id: TypeId) -> Option<TypeId> {
        match self.shape(id) {
            TypeShape::Array(element) => Some(*element),
            _ => None,
        }
    }

    /// Members of a union, or `None` for every other kind.
    pub fn union_members(&self, id: TypeId) -> Option<&[TypeId]> {
        match self.shape(id) {
            TypeShape::Union(members) => Some(members),
            _ => None,
        }
    }
}

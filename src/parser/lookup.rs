//! Name-keyed lookup tables filled in chunk order

use crate::error::{EntityKind, Error, Result};
use crate::model::AttributeSemantic;
use std::collections::HashMap;

/// Accessors produced by one geometry chunk
///
/// A geometry declared with its skip flag set has no accessors at all.
#[derive(Debug, Clone, PartialEq, Default)]
pub(crate) struct GeometryEntry {
    pub indices: Option<usize>,
    pub attributes: Vec<(AttributeSemantic, usize)>,
}

/// Map from entity name to a value, scoped to one entity kind
#[derive(Debug)]
pub(crate) struct NameTable<T> {
    kind: EntityKind,
    entries: HashMap<String, T>,
}

impl<T> NameTable<T> {
    pub fn new(kind: EntityKind) -> Self {
        Self {
            kind,
            entries: HashMap::new(),
        }
    }

    /// Register `name` unless already present; the first registration wins
    ///
    /// Returns false if the name was already taken.
    pub fn register(&mut self, name: &str, value: T) -> bool {
        if self.entries.contains_key(name) {
            return false;
        }
        self.entries.insert(name.to_string(), value);
        true
    }

    /// Register `name`, replacing any earlier value; the last registration wins
    pub fn replace(&mut self, name: &str, value: T) -> Option<T> {
        self.entries.insert(name.to_string(), value)
    }

    pub fn get(&self, name: &str) -> Option<&T> {
        self.entries.get(name)
    }

    /// Look up `name`, failing with an unresolved reference
    pub fn resolve(&self, name: &str) -> Result<&T> {
        self.entries
            .get(name)
            .ok_or_else(|| Error::unresolved(self.kind, name))
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// One table per entity kind
#[derive(Debug)]
pub(crate) struct LookupTables {
    pub geometries: NameTable<GeometryEntry>,
    pub materials: NameTable<usize>,
    pub textures: NameTable<usize>,
    pub transforms: NameTable<usize>,
    pub meshes: NameTable<usize>,
}

impl Default for LookupTables {
    fn default() -> Self {
        Self {
            geometries: NameTable::new(EntityKind::Geometry),
            materials: NameTable::new(EntityKind::Material),
            textures: NameTable::new(EntityKind::Texture),
            transforms: NameTable::new(EntityKind::Transform),
            meshes: NameTable::new(EntityKind::Mesh),
        }
    }
}

//! The shared parameter table.

use std::collections::HashMap;
use wr_core::ParameterId;

use crate::definition::ParameterDef;
use crate::error::{ParameterError, ParameterResult};

#[derive(Debug, Clone, PartialEq)]
pub struct ParameterEntry {
    pub id: ParameterId,
    pub name: String,
    pub definition: ParameterDef,
}

/// Insertion-ordered, append-only map from parameter name to definition.
///
/// Entries are never removed or replaced: inserting a name that is already
/// present fails with [`ParameterError::NameCollision`].
#[derive(Debug, Clone, Default)]
pub struct ParameterTable {
    entries: Vec<ParameterEntry>,
    by_name: HashMap<String, ParameterId>,
}

impl ParameterTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a definition under a name that is not yet taken.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        definition: ParameterDef,
    ) -> ParameterResult<ParameterId> {
        let name = name.into();
        if self.by_name.contains_key(&name) {
            return Err(ParameterError::NameCollision { name });
        }

        let id = match ParameterId::from_index(self.entries.len()) {
            Ok(id) => id,
            Err(source) => return Err(ParameterError::Invalid { name, source }),
        };
        self.by_name.insert(name.clone(), id);
        self.entries.push(ParameterEntry {
            id,
            name,
            definition,
        });
        Ok(id)
    }

    pub fn get(&self, name: &str) -> Option<&ParameterDef> {
        self.entry(name).map(|e| &e.definition)
    }

    pub fn entry(&self, name: &str) -> Option<&ParameterEntry> {
        self.by_name
            .get(name)
            .and_then(|id| self.entries.get(id.index() as usize))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Fail with the first referenced name that is not in the table.
    pub fn require(&self, name: &str) -> ParameterResult<ParameterId> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| ParameterError::UnknownParameter {
                name: name.to_string(),
            })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ParameterEntry> {
        self.entries.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    /// Check that every definition only refers to parameters in the table.
    pub fn check_references(&self) -> ParameterResult<()> {
        for entry in &self.entries {
            for reference in entry.definition.references() {
                self.require(reference)?;
            }
        }
        Ok(())
    }
}

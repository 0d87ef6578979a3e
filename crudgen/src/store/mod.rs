//! In-memory reference store
//!
//! [`MemoryStore`] behaves like the generated store type: records live in an
//! insertion-ordered list, lookups are linear scans on the identifier, and
//! `next_id` only advances when [`StoreSettings::advance_next_id`] is set.
//! Unlike the generated text, `update` on a missing record is an explicit
//! [`CrudgenError::RecordNotFound`].

use crate::config::StoreSettings;
use crate::error::{CrudgenError, Result};
use crate::scaffold::ModelSpec;
use serde::Serialize;
use serde_json::Value;

/// One stored instance of the data-holder type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    id: u64,
    attributes: Vec<(String, Value)>,
}

impl Record {
    /// Identifier field value
    #[must_use]
    pub const fn id(&self) -> u64 {
        self.id
    }

    /// Value of the first attribute with this name
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.attributes
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, value)| value)
    }

    /// Attribute names and values in field order
    #[must_use]
    pub fn attributes(&self) -> &[(String, Value)] {
        &self.attributes
    }
}

/// Insertion-ordered in-memory store over one model
#[derive(Debug, Clone)]
pub struct MemoryStore {
    spec: ModelSpec,
    data: Vec<Record>,
    next_id: u64,
    advance_next_id: bool,
}

impl MemoryStore {
    /// Create an empty store with `next_id` at 1
    #[must_use]
    pub const fn new(spec: ModelSpec, settings: &StoreSettings) -> Self {
        Self {
            spec,
            data: Vec::new(),
            next_id: 1,
            advance_next_id: settings.advance_next_id,
        }
    }

    /// Append a record built from `next_id` and the attribute values
    ///
    /// # Errors
    ///
    /// Returns [`CrudgenError::ArityMismatch`] if `values` does not have one
    /// entry per attribute.
    pub fn create(&mut self, values: Vec<Value>) -> Result<&Record> {
        let attributes = self.bind(values)?;
        let record = Record {
            id: self.next_id,
            attributes,
        };
        if self.advance_next_id {
            self.next_id += 1;
        }

        tracing::debug!(model = self.spec.name(), id = record.id, "record created");
        self.data.push(record);
        Ok(&self.data[self.data.len() - 1])
    }

    /// Copy of all records in insertion order
    #[must_use]
    pub fn read_all(&self) -> Vec<Record> {
        self.data.clone()
    }

    /// First record whose identifier equals `id`
    #[must_use]
    pub fn read(&self, id: u64) -> Option<&Record> {
        self.data.iter().find(|record| record.id == id)
    }

    /// Overwrite the attributes of the first record with identifier `id`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No record has identifier `id` ([`CrudgenError::RecordNotFound`])
    /// - `values` does not have one entry per attribute ([`CrudgenError::ArityMismatch`])
    pub fn update(&mut self, id: u64, values: Vec<Value>) -> Result<&Record> {
        let index = self
            .position(id)
            .ok_or(CrudgenError::RecordNotFound { id })?;
        let attributes = self.bind(values)?;

        self.data[index].attributes = attributes;
        Ok(&self.data[index])
    }

    /// Remove the first record with identifier `id`
    ///
    /// Returns `false` and leaves the store untouched when nothing matches.
    pub fn delete(&mut self, id: u64) -> bool {
        self.position(id).is_some_and(|index| {
            self.data.remove(index);
            true
        })
    }

    /// Identifier the next `create` will use
    #[must_use]
    pub const fn next_id(&self) -> u64 {
        self.next_id
    }

    /// Number of stored records
    #[must_use]
    pub const fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the store holds no records
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn position(&self, id: u64) -> Option<usize> {
        self.data.iter().position(|record| record.id == id)
    }

    fn bind(&self, values: Vec<Value>) -> Result<Vec<(String, Value)>> {
        let expected = self.spec.attributes().len();
        if values.len() != expected {
            return Err(CrudgenError::ArityMismatch {
                expected,
                actual: values.len(),
            });
        }

        Ok(self
            .spec
            .attributes()
            .iter()
            .cloned()
            .zip(values)
            .collect())
    }
}

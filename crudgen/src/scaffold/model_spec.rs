//! Validated model definition for CRUD generation
//!
//! A model is a name plus an ordered field list. The first field is the
//! identifier field; the rest are attributes. Names are used verbatim and
//! are not checked for identifier legality. Duplicate field names pass
//! through unchanged.

use crate::error::{CrudgenError, Result};
use serde::Serialize;

/// Model name and ordered field list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelSpec {
    name: String,
    fields: Vec<String>,
}

impl ModelSpec {
    /// Create a model definition
    ///
    /// # Examples
    ///
    /// ```
    /// # use crudgen::ModelSpec;
    /// let spec = ModelSpec::new("User", &["id", "name", "email"]).unwrap();
    /// assert_eq!(spec.id_field(), "id");
    /// assert_eq!(spec.attributes(), ["name", "email"]);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `name` is empty ([`CrudgenError::EmptyModelName`])
    /// - `fields` is empty ([`CrudgenError::EmptyFieldList`])
    pub fn new<S: AsRef<str>>(name: &str, fields: &[S]) -> Result<Self> {
        if name.is_empty() {
            return Err(CrudgenError::EmptyModelName);
        }

        if fields.is_empty() {
            return Err(CrudgenError::EmptyFieldList {
                model: name.to_string(),
            });
        }

        let fields: Vec<String> = fields.iter().map(|f| f.as_ref().to_string()).collect();

        let duplicates = Self::duplicate_fields(&fields);
        if !duplicates.is_empty() {
            tracing::warn!(model = name, ?duplicates, "duplicate field names passed through");
        }

        Ok(Self {
            name: name.to_string(),
            fields,
        })
    }

    /// Model (data-holder type) name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All fields in declaration order
    #[must_use]
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// The identifier field (first field)
    #[must_use]
    pub fn id_field(&self) -> &str {
        &self.fields[0]
    }

    /// Attribute fields (every field after the identifier)
    #[must_use]
    pub fn attributes(&self) -> &[String] {
        &self.fields[1..]
    }

    fn duplicate_fields(fields: &[String]) -> Vec<&str> {
        let mut seen = Vec::with_capacity(fields.len());
        let mut duplicates = Vec::new();
        for field in fields {
            if seen.contains(&field.as_str()) {
                if !duplicates.contains(&field.as_str()) {
                    duplicates.push(field.as_str());
                }
            } else {
                seen.push(field.as_str());
            }
        }
        duplicates
    }
}

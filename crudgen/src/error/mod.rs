//! Error types and error handling

use thiserror::Error;

/// Result alias for crudgen operations
pub type Result<T> = std::result::Result<T, CrudgenError>;

/// Generator and reference store error type
#[derive(Debug, Error)]
pub enum CrudgenError {
    /// Model name was empty
    #[error("Model name cannot be empty")]
    EmptyModelName,

    /// No fields were given, so there is no identifier field
    #[error("Model '{model}' needs at least one field (the identifier field)")]
    EmptyFieldList {
        /// Model the field list belonged to
        model: String,
    },

    /// No record with the requested identifier
    #[error("Record not found: {id}")]
    RecordNotFound {
        /// Identifier that was looked up
        id: u64,
    },

    /// Wrong number of attribute values passed to create/update
    #[error("Expected {expected} attribute values, got {actual}")]
    ArityMismatch {
        /// Number of attributes on the model
        expected: usize,
        /// Number of values supplied
        actual: usize,
    },

    /// Template rendering error
    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),
}

//! crudgen code generator library
//!
//! Turns a model name and an ordered field list into source text for a
//! data-holder type followed by an in-memory CRUD store type.
//!
//! # Example
//!
//! ```
//! let code = crudgen::generate_crud("User", &["id", "name", "email"]).unwrap();
//! assert!(code.starts_with("class User:\n"));
//! assert!(code.contains("class UserCRUD:\n"));
//! ```

#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod observability;
pub mod scaffold;
pub mod store;

pub use config::{GeneratorConfig, MissingRecordPolicy, StoreSettings};
pub use error::{CrudgenError, Result};
pub use scaffold::{
    assemble, generate_crud, CrudGenerator, GeneratedSection, ModelSpec, TemplateHelpers,
};
pub use store::{MemoryStore, Record};

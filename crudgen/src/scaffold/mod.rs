//! CRUD source generator
//!
//! Transforms a model name and field list into source text for a
//! data-holder type and its in-memory store type.

pub mod generator;
pub mod helpers;
pub mod model_spec;
pub mod templates;

pub use generator::{assemble, generate_crud, CrudGenerator, GeneratedSection};
pub use helpers::TemplateHelpers;
pub use model_spec::ModelSpec;

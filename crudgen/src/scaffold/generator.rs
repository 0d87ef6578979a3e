//! CRUD generator orchestrator
//!
//! Builds the template context for a model and renders, in order:
//! - the data-holder type
//! - the in-memory store type

use super::helpers::TemplateHelpers;
use super::model_spec::ModelSpec;
use super::templates::{self, TemplateRegistry};
use crate::config::{MissingRecordPolicy, StoreSettings};
use crate::error::Result;

/// CRUD code generator
pub struct CrudGenerator {
    /// Validated model definition
    spec: ModelSpec,
    /// Store type settings
    settings: StoreSettings,
    /// Template registry
    templates: TemplateRegistry,
}

impl CrudGenerator {
    /// Create a new generator
    ///
    /// # Errors
    ///
    /// Returns an error if the templates fail to compile.
    pub fn new(spec: ModelSpec, settings: StoreSettings) -> Result<Self> {
        let templates = TemplateRegistry::new()?;

        Ok(Self {
            spec,
            settings,
            templates,
        })
    }

    /// Model definition this generator renders
    #[must_use]
    pub const fn spec(&self) -> &ModelSpec {
        &self.spec
    }

    /// Generate the full source text
    ///
    /// The data-holder type comes first, then a blank line, then the store
    /// type.
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn generate(&self) -> Result<String> {
        let sections = self.generate_sections()?;
        let code = assemble(&sections);

        tracing::debug!(
            model = self.spec.name(),
            fields = self.spec.fields().len(),
            bytes = code.len(),
            "generated CRUD source"
        );

        Ok(code)
    }

    /// Generate each type definition separately
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn generate_sections(&self) -> Result<Vec<GeneratedSection>> {
        let metadata = self.model_metadata();
        Ok(vec![
            self.generate_model(&metadata)?,
            self.generate_store(&metadata)?,
        ])
    }

    /// Template variables for both sections
    fn model_metadata(&self) -> serde_json::Value {
        let model_name = self.spec.name();
        let attributes = self.spec.attributes();

        let mut constructor_args = vec!["self.next_id".to_string()];
        constructor_args.extend(attributes.iter().cloned());

        serde_json::json!({
            "model_name": model_name,
            "store_name": TemplateHelpers::store_name(model_name),
            "id_field": self.spec.id_field(),
            "fields": self.spec.fields(),
            "attributes": attributes,
            "init_params": TemplateHelpers::parameter_list(&["self"], self.spec.fields()),
            "create_params": TemplateHelpers::parameter_list(&["self"], attributes),
            "update_params": TemplateHelpers::parameter_list(&["self", "id"], attributes),
            "constructor_args": constructor_args.join(", "),
            "advance_next_id": self.settings.advance_next_id,
            "guard_missing_update": self.settings.missing_record == MissingRecordPolicy::ReturnNone,
        })
    }

    fn generate_model(&self, metadata: &serde_json::Value) -> Result<GeneratedSection> {
        let content = self.templates.render(templates::MODEL, metadata)?;

        Ok(GeneratedSection {
            type_name: self.spec.name().to_string(),
            content,
            description: format!("Data holder for {}", self.spec.name()),
        })
    }

    fn generate_store(&self, metadata: &serde_json::Value) -> Result<GeneratedSection> {
        let content = self.templates.render(templates::STORE, metadata)?;

        Ok(GeneratedSection {
            type_name: TemplateHelpers::store_name(self.spec.name()),
            content,
            description: format!("In-memory CRUD store for {}", self.spec.name()),
        })
    }
}

/// One generated type definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSection {
    /// Name of the generated type
    pub type_name: String,
    /// Source text
    pub content: String,
    /// Section description for user feedback
    pub description: String,
}

/// Join rendered sections into one source text, separated by blank lines
#[must_use]
pub fn assemble(sections: &[GeneratedSection]) -> String {
    sections
        .iter()
        .map(|section| section.content.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Generate the data-holder and store source for a model with default settings
///
/// # Examples
///
/// ```
/// let code = crudgen::generate_crud("User", &["id", "name", "email"]).unwrap();
/// assert!(code.contains("    def create(self, name, email):\n"));
/// ```
///
/// # Errors
///
/// Returns an error if:
/// - `model_name` is empty
/// - `fields` is empty
/// - Template rendering fails
pub fn generate_crud<S: AsRef<str>>(model_name: &str, fields: &[S]) -> Result<String> {
    let spec = ModelSpec::new(model_name, fields)?;
    CrudGenerator::new(spec, StoreSettings::default())?.generate()
}

//! Generate command
//!
//! Prints the generated source to stdout. Status lines go to stderr so the
//! output can be redirected as-is.
//!
//! # Example
//!
//! ```bash
//! crudgen User id name email > user.py
//! ```

use anyhow::{Context, Result};
use clap::Args;
use console::style;
use crudgen::{CrudGenerator, GeneratorConfig, MissingRecordPolicy, ModelSpec, StoreSettings};
use std::path::PathBuf;

/// Model used when no model is given
const DEMO_MODEL: &str = "User";

/// Fields used when no model is given
const DEMO_FIELDS: [&str; 3] = ["id", "name", "email"];

/// Generate a data-holder type and its CRUD store
#[derive(Debug, Args)]
pub struct GenerateCommand {
    /// Model name, used verbatim as the data-holder type name
    /// (omit both model and fields for the `User id name email` demo)
    pub model: Option<String>,

    /// Field names; the first is the identifier field
    pub fields: Vec<String>,

    /// Config file (defaults to the standard lookup locations)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Make `create` advance `next_id`
    #[arg(long)]
    pub advance_next_id: bool,

    /// Make `update` return `None` for a missing record
    #[arg(long)]
    pub guard_missing_update: bool,
}

impl GenerateCommand {
    /// Execute the generate command
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration cannot be loaded
    /// - The model name or field list is empty
    /// - Template rendering fails
    pub fn execute(&self) -> Result<()> {
        let config = match &self.config {
            Some(path) => GeneratorConfig::load_from(path)
                .with_context(|| format!("Failed to load config: {}", path.display()))?,
            None => GeneratorConfig::load().context("Failed to load configuration")?,
        };
        let settings = self.apply_overrides(config.store);
        tracing::debug!(?settings, "store settings");

        let spec = self.model_spec().context("Invalid model definition")?;
        let generator =
            CrudGenerator::new(spec, settings).context("Failed to create CRUD generator")?;

        let sections = generator
            .generate_sections()
            .context("Failed to generate CRUD source")?;
        let code = crudgen::assemble(&sections);

        println!("{code}");

        eprintln!(
            "{} {} types:",
            style("Generated").green().bold(),
            sections.len()
        );
        for section in &sections {
            eprintln!(
                "  {} {} ({})",
                style("✓").green(),
                style(&section.type_name).bold(),
                style(&section.description).dim()
            );
        }

        Ok(())
    }

    /// Model from the positionals, or the demo model when none is given
    ///
    /// Fields are never borrowed from the demo for an explicit model.
    fn model_spec(&self) -> crudgen::Result<ModelSpec> {
        match &self.model {
            Some(model) => ModelSpec::new(model, &self.fields),
            None => ModelSpec::new(DEMO_MODEL, &DEMO_FIELDS),
        }
    }

    /// Command-line flags only ever switch behavior on
    const fn apply_overrides(&self, mut settings: StoreSettings) -> StoreSettings {
        if self.advance_next_id {
            settings.advance_next_id = true;
        }
        if self.guard_missing_update {
            settings.missing_record = MissingRecordPolicy::ReturnNone;
        }
        settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(advance_next_id: bool, guard_missing_update: bool) -> GenerateCommand {
        GenerateCommand {
            model: Some("User".to_string()),
            fields: vec!["id".to_string(), "name".to_string()],
            config: None,
            advance_next_id,
            guard_missing_update,
        }
    }

    #[test]
    fn test_no_flags_keep_config() {
        let configured = StoreSettings {
            advance_next_id: true,
            missing_record: MissingRecordPolicy::ReturnNone,
        };
        assert_eq!(command(false, false).apply_overrides(configured.clone()), configured);
    }

    #[test]
    fn test_flags_override_defaults() {
        let settings = command(true, true).apply_overrides(StoreSettings::default());
        assert!(settings.advance_next_id);
        assert_eq!(settings.missing_record, MissingRecordPolicy::ReturnNone);
    }

    #[test]
    fn test_execute_with_missing_config_file() {
        let mut cmd = command(false, false);
        cmd.config = Some(PathBuf::from("/nonexistent/crudgen.toml"));
        assert!(cmd.execute().is_ok());
    }

    #[test]
    fn test_execute_rejects_empty_model() {
        let mut cmd = command(false, false);
        cmd.model = Some(String::new());
        assert!(cmd.execute().is_err());
    }

    #[test]
    fn test_no_model_uses_demo() {
        let mut cmd = command(false, false);
        cmd.model = None;
        cmd.fields = Vec::new();

        let spec = cmd.model_spec().unwrap();
        assert_eq!(spec.name(), "User");
        assert_eq!(spec.fields(), ["id", "name", "email"]);
    }

    #[test]
    fn test_explicit_model_does_not_borrow_demo_fields() {
        let mut cmd = command(false, false);
        cmd.model = Some("Post".to_string());
        cmd.fields = Vec::new();

        assert!(matches!(
            cmd.model_spec(),
            Err(crudgen::CrudgenError::EmptyFieldList { model }) if model == "Post"
        ));
        assert!(cmd.execute().is_err());
    }

    #[test]
    fn test_explicit_model_keeps_its_fields() {
        let mut cmd = command(false, false);
        cmd.model = Some("Post".to_string());
        cmd.fields = vec!["post_id".to_string(), "title".to_string()];

        let spec = cmd.model_spec().unwrap();
        assert_eq!(spec.name(), "Post");
        assert_eq!(spec.fields(), ["post_id", "title"]);
    }
}

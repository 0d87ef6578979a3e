//! crudgen CLI tool
//!
//! # Usage
//!
//! ```bash
//! # Demonstration: User(id, name, email)
//! crudgen
//!
//! # Any model
//! crudgen Post post_id title body --advance-next-id
//! ```

#![forbid(unsafe_code)]

mod commands;

use anyhow::Result;
use clap::Parser;
use commands::GenerateCommand;

#[derive(Parser)]
#[command(name = "crudgen")]
#[command(version)]
#[command(about = "Generate a data-holder type and an in-memory CRUD store", long_about = None)]
struct Cli {
    #[command(flatten)]
    generate: GenerateCommand,
}

fn main() -> Result<()> {
    crudgen::observability::init()?;

    let cli = Cli::parse();
    cli.generate.execute()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults_to_demonstration_call() {
        let cli = Cli::try_parse_from(["crudgen"]).unwrap();
        assert!(cli.generate.model.is_none());
        assert!(cli.generate.fields.is_empty());
        assert!(!cli.generate.advance_next_id);
        assert!(!cli.generate.guard_missing_update);
        assert!(cli.generate.config.is_none());
    }

    #[test]
    fn test_model_without_fields_parses_empty_field_list() {
        let cli = Cli::try_parse_from(["crudgen", "Post"]).unwrap();
        assert_eq!(cli.generate.model.as_deref(), Some("Post"));
        assert!(cli.generate.fields.is_empty());
    }

    #[test]
    fn test_explicit_model_and_flags() {
        let cli = Cli::try_parse_from([
            "crudgen",
            "Post",
            "post_id",
            "title",
            "--advance-next-id",
            "--guard-missing-update",
            "--config",
            "custom.toml",
        ])
        .unwrap();

        assert_eq!(cli.generate.model.as_deref(), Some("Post"));
        assert_eq!(cli.generate.fields, ["post_id", "title"]);
        assert!(cli.generate.advance_next_id);
        assert!(cli.generate.guard_missing_update);
        assert_eq!(
            cli.generate.config.as_deref(),
            Some(std::path::Path::new("custom.toml"))
        );
    }
}

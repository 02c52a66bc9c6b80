//! Validate command implementation.

use std::path::PathBuf;

use clap::Args;

use crate::discovery::discover;
use crate::error::{PortfolioError, Result};
use crate::output::{display_path, plural, Printer};
use crate::parser::ParseOptions;
use crate::validation::{print_diagnostics, validate_projects};

/// Check a database without writing anything
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Database directory
    pub database: PathBuf,

    /// Language for descriptions without language markers
    #[arg(long)]
    pub default_language: Option<String>,
}

pub fn run(args: ValidateArgs, printer: &Printer) -> Result<()> {
    printer.status("Checking", &display_path(&args.database));
    let database = discover(&args.database)?;
    let count = database.projects.len();

    let options = ParseOptions {
        default_language: args.default_language,
        ..ParseOptions::default()
    };
    let (config, parsed) = database.parse(&options);
    let result = validate_projects(&parsed, &config);
    print_diagnostics(&result, printer);

    if result.has_errors() {
        return Err(PortfolioError::Validation {
            message: format!(
                "{} in {}",
                plural(result.error_count(), "error", "errors"),
                plural(count, "project", "projects")
            ),
            help: None,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_validate_passes() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("shop")).unwrap();
        fs::write(
            dir.path().join("shop/description.md"),
            "---\ntags: [web]\n---\n:: en\n# Shop\n",
        )
        .unwrap();

        let args = ValidateArgs {
            database: dir.path().to_path_buf(),
            default_language: None,
        };

        assert!(run(args, &Printer::plain()).is_ok());
    }

    #[test]
    fn test_validate_fails_on_errors() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("shop")).unwrap();
        fs::write(dir.path().join("shop/description.md"), "Untitled.\n").unwrap();

        let args = ValidateArgs {
            database: dir.path().to_path_buf(),
            default_language: Some("en".to_string()),
        };

        assert!(matches!(
            run(args, &Printer::plain()),
            Err(PortfolioError::Validation { .. })
        ));
    }
}

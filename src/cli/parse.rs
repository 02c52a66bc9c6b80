//! Parse command implementation.
//!
//! Parses one description file and prints its JSON, with recoverable
//! problems reported on stderr.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::error::{PortfolioError, Result};
use crate::output::{display_path, Printer};
use crate::parser::{parse_description_with, ParseOptions};

/// Parse a single description file and print its JSON
#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Description file to parse
    pub file: PathBuf,

    /// Language for a description without language markers
    #[arg(long)]
    pub default_language: Option<String>,

    /// Parse the languages of the description in parallel
    #[arg(long)]
    pub parallel_languages: bool,
}

pub fn run(args: ParseArgs, printer: &Printer) -> Result<()> {
    let source = fs::read_to_string(&args.file).map_err(|e| PortfolioError::Io {
        path: args.file.clone(),
        message: format!("Failed to read file: {}", e),
    })?;

    let options = ParseOptions {
        default_language: args.default_language,
        parallel: args.parallel_languages,
    };
    let result = parse_description_with(&source, &options);

    for diagnostic in &result.diagnostics {
        printer.warning("Warning", &format!("{}: {}", display_path(&args.file), diagnostic));
    }

    let json = serde_json::to_string_pretty(&result.description).map_err(|e| {
        PortfolioError::Build {
            message: format!("Failed to serialize description: {}", e),
            help: None,
        }
    })?;
    println!("{}", json);

    Ok(())
}

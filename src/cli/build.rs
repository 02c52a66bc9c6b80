//! Build command implementation.
//!
//! Parses every project of a database and writes one JSON document keyed by
//! project id.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::discovery::{discover, ParsedProject};
use crate::error::{PortfolioError, Result};
use crate::output::{display_path, plural, Printer};
use crate::parser::ParseOptions;
use crate::types::ParsedDescription;
use crate::validation::{print_diagnostics, validate_projects};

/// Parse every project of a database and write JSON
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Database directory
    pub database: PathBuf,

    /// Output file (default: stdout)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Language for descriptions without language markers
    #[arg(long)]
    pub default_language: Option<String>,

    /// Write compact JSON instead of pretty-printed
    #[arg(long)]
    pub compact: bool,

    /// Also parse the languages of each description in parallel
    #[arg(long)]
    pub parallel_languages: bool,
}

pub fn run(args: BuildArgs, printer: &Printer) -> Result<()> {
    printer.status("Scanning", &display_path(&args.database));
    let database = discover(&args.database)?;

    printer.status(
        "Parsing",
        &plural(database.projects.len(), "project", "projects"),
    );
    let options = ParseOptions {
        default_language: args.default_language.clone(),
        parallel: args.parallel_languages,
    };
    let (config, parsed) = database.parse(&options);
    for project in &parsed {
        printer.project(project);
    }

    let validation = validate_projects(&parsed, &config);
    if !validation.is_ok() {
        print_diagnostics(&validation, printer);
    }
    if validation.has_fatal() {
        return Err(PortfolioError::Build {
            message: "Fatal validation errors, nothing was written".to_string(),
            help: Some("Fix the fatal diagnostics above, or lower their level in .portfoliodb.yml".to_string()),
        });
    }

    let json = render_json(&parsed, args.compact)?;

    match &args.output {
        Some(path) => {
            fs::write(path, json + "\n").map_err(|e| PortfolioError::Io {
                path: path.clone(),
                message: format!("Failed to write output: {}", e),
            })?;
            printer.status(
                "Finished",
                &format!(
                    "{} -> {}",
                    plural(parsed.len(), "project", "projects"),
                    display_path(path)
                ),
            );
        }
        None => println!("{}", json),
    }

    Ok(())
}

/// Serialize parsed projects as a JSON object keyed by project id.
pub fn render_json(parsed: &[ParsedProject], compact: bool) -> Result<String> {
    let descriptions: BTreeMap<&str, &ParsedDescription> = parsed
        .iter()
        .map(|p| (p.project.id.as_str(), &p.result.description))
        .collect();

    let rendered = if compact {
        serde_json::to_string(&descriptions)
    } else {
        serde_json::to_string_pretty(&descriptions)
    };

    rendered.map_err(|e| PortfolioError::Build {
        message: format!("Failed to serialize descriptions: {}", e),
        help: None,
    })
}

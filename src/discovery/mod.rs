//! Project discovery for a portfolio database.
//!
//! A database is a directory tree of project folders, each holding a
//! `description.md`, with an optional `.portfoliodb.yml` at the root.
//!
//! # Example
//!
//! ```ignore
//! use portfoliodb::discovery::discover;
//!
//! let database = discover("./portfolio")?;
//! println!("Found {} projects", database.projects.len());
//! ```

mod config;
mod loader;
mod scanner;

use std::path::Path;

use crate::error::{PortfolioError, Result};
use crate::parser::ParseOptions;

pub use config::{Check, CheckLevel, CheckSetting, Checks, Configuration, ValidateConfig};
pub use loader::{load_projects, parse_projects, ParsedProject, Project};
pub use scanner::scan_projects;

/// The name of the configuration file.
pub const CONFIG_FILENAME: &str = ".portfoliodb.yml";

/// The name of a project's description file.
pub const DESCRIPTION_FILENAME: &str = "description.md";

/// A discovered database.
#[derive(Debug)]
pub struct Database {
    /// The loaded configuration (default if no file was found).
    pub config: Configuration,

    /// Projects, sorted by folder path.
    pub projects: Vec<Project>,
}

impl Database {
    /// Parse every project's description.
    pub fn parse(self, options: &ParseOptions) -> (Configuration, Vec<ParsedProject>) {
        let parsed = parse_projects(self.projects, options);
        (self.config, parsed)
    }
}

/// Discover the projects of a database directory.
pub fn discover(root: impl AsRef<Path>) -> Result<Database> {
    let root = root.as_ref().to_path_buf();

    if !root.is_dir() {
        return Err(PortfolioError::Io {
            path: root,
            message: "Database directory not found".to_string(),
        });
    }

    let config_path = root.join(CONFIG_FILENAME);
    let config = if config_path.exists() {
        Configuration::load(&config_path)?
    } else {
        tracing::debug!("no {CONFIG_FILENAME} in {}, using default checks", root.display());
        Configuration::default()
    };

    let paths = scan_projects(&root);
    tracing::info!(root = %root.display(), projects = paths.len(), "discovered projects");
    let projects = load_projects(&paths)?;

    Ok(Database { config, projects })
}

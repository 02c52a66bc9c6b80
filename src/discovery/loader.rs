//! Project loader - reads and parses discovered descriptions.

use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::error::{PortfolioError, Result};
use crate::parser::{parse_description_with, DescriptionResult, ParseOptions};

use super::DESCRIPTION_FILENAME;

/// A project folder with its raw description.
#[derive(Debug, Clone)]
pub struct Project {
    /// Folder name, used as the project's identifier.
    pub id: String,
    /// The project folder.
    pub path: PathBuf,
    /// Raw text of `description.md`.
    pub description_raw: String,
}

impl Project {
    /// Read a project from its folder.
    pub fn load(path: &Path) -> Result<Self> {
        let description_path = path.join(DESCRIPTION_FILENAME);
        let description_raw =
            fs::read_to_string(&description_path).map_err(|e| PortfolioError::Io {
                path: description_path.clone(),
                message: format!("Failed to read description: {}", e),
            })?;

        let id = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        Ok(Self {
            id,
            path: path.to_path_buf(),
            description_raw,
        })
    }

    /// Path of the project's description file.
    pub fn description_path(&self) -> PathBuf {
        self.path.join(DESCRIPTION_FILENAME)
    }
}

/// A project together with its parsed description.
#[derive(Debug, Clone)]
pub struct ParsedProject {
    pub project: Project,
    pub result: DescriptionResult,
}

/// Load every project folder.
///
/// Read failures are collected and reported together.
pub fn load_projects(paths: &[PathBuf]) -> Result<Vec<Project>> {
    let mut projects = Vec::new();
    let mut errors: Vec<String> = Vec::new();

    for path in paths {
        match Project::load(path) {
            Ok(project) => projects.push(project),
            Err(e) => errors.push(e.to_string()),
        }
    }

    if !errors.is_empty() {
        return Err(PortfolioError::Build {
            message: format!(
                "Failed to load {} project(s):\n  {}",
                errors.len(),
                errors.join("\n  ")
            ),
            help: Some("Fix the errors above and try again".to_string()),
        });
    }

    Ok(projects)
}

/// Parse every project's description, in parallel across projects.
///
/// Output order matches input order.
pub fn parse_projects(projects: Vec<Project>, options: &ParseOptions) -> Vec<ParsedProject> {
    projects
        .into_par_iter()
        .map(|project| {
            tracing::debug!(project = %project.id, "parsing description");
            let result = parse_description_with(&project.description_raw, options);
            ParsedProject { project, result }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_project() {
        let dir = tempdir().unwrap();
        let project_dir = dir.path().join("my-shop");
        fs::create_dir_all(&project_dir).unwrap();
        fs::write(project_dir.join(DESCRIPTION_FILENAME), ":: en\n# Shop\n").unwrap();

        let project = Project::load(&project_dir).unwrap();

        assert_eq!(project.id, "my-shop");
        assert_eq!(project.description_raw, ":: en\n# Shop\n");
        assert_eq!(project.description_path(), project_dir.join("description.md"));
    }

    #[test]
    fn test_load_projects_reports_all_failures() {
        let dir = tempdir().unwrap();

        let result = load_projects(&[dir.path().join("a"), dir.path().join("b")]);

        match result {
            Err(PortfolioError::Build { message, .. }) => {
                assert!(message.starts_with("Failed to load 2 project(s)"));
            }
            other => panic!("expected build error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_projects_keeps_order() {
        let projects: Vec<Project> = ["b", "a", "c"]
            .iter()
            .map(|id| Project {
                id: id.to_string(),
                path: PathBuf::from(id),
                description_raw: format!(":: en\n# {id}\n"),
            })
            .collect();

        let parsed = parse_projects(projects, &ParseOptions::default());

        let ids: Vec<&str> = parsed.iter().map(|p| p.project.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
        assert_eq!(parsed[1].result.description.title_for("en"), Some("a"));
    }
}

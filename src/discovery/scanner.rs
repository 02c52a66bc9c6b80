//! File system scanner for discovering projects.
//!
//! A project is any directory holding a `description.md` file. Hidden
//! files and directories are skipped.

use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use super::DESCRIPTION_FILENAME;

/// Scan a database directory for project folders.
///
/// Returns project directories sorted by path.
pub fn scan_projects(root: &Path) -> Vec<PathBuf> {
    let mut projects = Vec::new();

    if !root.exists() {
        return projects;
    }

    for entry in WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e))
        .filter_map(|e| e.ok())
    {
        if !entry.file_type().is_file() || entry.file_name() != DESCRIPTION_FILENAME {
            continue;
        }

        if let Some(parent) = entry.path().parent() {
            projects.push(parent.to_path_buf());
        }
    }

    projects.sort();
    projects
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| name.starts_with('.'))
}

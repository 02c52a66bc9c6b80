//! Validation checks over parsed projects.
//!
//! Each check takes the parsed projects and the severity to report at, and
//! returns a `ValidationResult`.

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use crate::discovery::{Check, ParsedProject};
use crate::error::RecoverableError;
use crate::parser::slugify;

use super::warning::{Diagnostic, Severity, ValidationResult};

fn code(check: Check) -> String {
    format!("portfoliodb::validate::{}", check.code())
}

/// Check that every project has decodable, non-empty front matter.
pub fn check_yaml_header(projects: &[ParsedProject], severity: Severity) -> ValidationResult {
    let mut result = ValidationResult::new();

    for parsed in projects {
        let decode_error = parsed
            .result
            .diagnostics
            .iter()
            .find(|e| matches!(e, RecoverableError::MetadataDecode { .. }));

        let diagnostic = if let Some(error) = decode_error {
            Diagnostic::new(severity, code(Check::YamlHeader), error.to_string())
        } else if !parsed.result.has_frontmatter {
            Diagnostic::new(severity, code(Check::YamlHeader), "No YAML header")
                .with_help("Start the description with ---, key: value lines, then ---")
        } else if parsed.result.description.metadata.is_empty() {
            Diagnostic::new(severity, code(Check::YamlHeader), "Empty YAML header")
                .with_help("Add key: value lines between the --- markers")
        } else {
            continue;
        };

        result.push(diagnostic.for_project(&parsed.project.id));
    }

    result
}

/// Check that every language of every project has a title.
pub fn check_title_presence(projects: &[ParsedProject], severity: Severity) -> ValidationResult {
    let mut result = ValidationResult::new();

    for parsed in projects {
        let description = &parsed.result.description;

        if description.is_unlocalized() {
            result.push(
                Diagnostic::new(
                    severity,
                    code(Check::TitlePresence),
                    "Description declares no language, so it has no title",
                )
                .for_project(&parsed.project.id)
                .with_help("Add a language marker such as `:: en`, or pass --default-language"),
            );
            continue;
        }

        for language in description.languages() {
            if description.title_for(language).is_none() {
                result.push(
                    Diagnostic::new(
                        severity,
                        code(Check::TitlePresence),
                        format!("No title for language '{}'", language),
                    )
                    .for_project(&parsed.project.id)
                    .with_help("Add a `# Title` line"),
                );
            }
        }
    }

    result
}

/// Check that no two projects share a title in the same language.
pub fn check_title_uniqueness(projects: &[ParsedProject], severity: Severity) -> ValidationResult {
    let mut result = ValidationResult::new();
    let mut owners: BTreeMap<(&str, &str), Vec<&str>> = BTreeMap::new();

    for parsed in projects {
        let description = &parsed.result.description;
        for language in description.languages() {
            if let Some(title) = description.title_for(language) {
                owners
                    .entry((language, title))
                    .or_default()
                    .push(&parsed.project.id);
            }
        }
    }

    for ((language, title), ids) in owners {
        if ids.len() > 1 {
            result.push(Diagnostic::new(
                severity,
                code(Check::TitleUniqueness),
                format!(
                    "Title '{}' ({}) is used by {} projects: {}",
                    title,
                    language,
                    ids.len(),
                    ids.join(", ")
                ),
            ));
        }
    }

    result
}

/// Check that every project has tags in its metadata.
pub fn check_tags_presence(projects: &[ParsedProject], severity: Severity) -> ValidationResult {
    let mut result = ValidationResult::new();

    for parsed in projects {
        if parsed.result.description.tags().is_empty() {
            result.push(
                Diagnostic::new(severity, code(Check::TagsPresence), "No tags")
                    .for_project(&parsed.project.id)
                    .with_help("Add `tags: [...]` to the YAML header"),
            );
        }
    }

    result
}

/// Check that local image and media embeds point at existing files.
pub fn check_working_media(projects: &[ParsedProject], severity: Severity) -> ValidationResult {
    let mut result = ValidationResult::new();

    for parsed in projects {
        let description = &parsed.result.description;
        let mut seen: HashSet<&str> = HashSet::new();

        let sources = description
            .image_embeds
            .values()
            .chain(description.media_embeds.values())
            .flatten()
            .map(|embed| embed.source.as_str());

        for source in sources {
            if !seen.insert(source) || is_remote(source) {
                continue;
            }

            if !parsed.project.path.join(Path::new(source)).exists() {
                result.push(
                    Diagnostic::new(
                        severity,
                        code(Check::WorkingMedia),
                        format!("Embedded file '{}' not found", source),
                    )
                    .for_project(&parsed.project.id),
                );
            }
        }
    }

    result
}

/// Check that no two projects share a folder name.
pub fn check_work_folder_uniqueness(
    projects: &[ParsedProject],
    severity: Severity,
) -> ValidationResult {
    let mut result = ValidationResult::new();
    let mut folders: BTreeMap<&str, Vec<&Path>> = BTreeMap::new();

    for parsed in projects {
        folders
            .entry(&parsed.project.id)
            .or_default()
            .push(&parsed.project.path);
    }

    for (id, paths) in folders {
        if paths.len() > 1 {
            let listed: Vec<String> = paths.iter().map(|p| p.display().to_string()).collect();
            result.push(
                Diagnostic::new(
                    severity,
                    code(Check::WorkFolderUniqueness),
                    format!("Folder name is used {} times: {}", paths.len(), listed.join(", ")),
                )
                .for_project(id)
                .with_help("Project folder names are identifiers and must be unique"),
            );
        }
    }

    result
}

/// Check that folder names are already URL-safe slugs.
pub fn check_work_folder_safeness(
    projects: &[ParsedProject],
    severity: Severity,
) -> ValidationResult {
    let mut result = ValidationResult::new();

    for parsed in projects {
        let slug = slugify(&parsed.project.id);
        if slug != parsed.project.id {
            result.push(
                Diagnostic::new(
                    severity,
                    code(Check::WorkFolderSafeness),
                    "Folder name is not URL-safe",
                )
                .for_project(&parsed.project.id)
                .with_help(format!("Rename the folder to '{}'", slug)),
            );
        }
    }

    result
}

/// Report unreadable numeric fields found while parsing.
pub fn check_numeric_fields(projects: &[ParsedProject]) -> ValidationResult {
    let mut result = ValidationResult::new();

    for parsed in projects {
        for error in &parsed.result.diagnostics {
            if matches!(error, RecoverableError::NumericField { .. }) {
                result.push(
                    Diagnostic::warning("portfoliodb::numeric_field", error.to_string())
                        .for_project(&parsed.project.id),
                );
            }
        }
    }

    result
}

fn is_remote(source: &str) -> bool {
    source.contains("://") || source.starts_with("data:") || source.starts_with("mailto:")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discovery::Project;
    use crate::parser::{parse_description_with, ParseOptions};
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn parsed(id: &str, source: &str) -> ParsedProject {
        parsed_at(id, PathBuf::from(id), source)
    }

    fn parsed_at(id: &str, path: PathBuf, source: &str) -> ParsedProject {
        ParsedProject {
            project: Project {
                id: id.to_string(),
                path,
                description_raw: source.to_string(),
            },
            result: parse_description_with(source, &ParseOptions::default()),
        }
    }

    #[test]
    fn test_yaml_header() {
        let projects = vec![
            parsed("ok", "---\ntags: [a]\n---\n"),
            parsed("missing", ":: en\n# Hi\n"),
            parsed("broken", "---\nkey: [oops\n---\n"),
            parsed("empty", "---\n---\n:: en\n# Hi\n"),
        ];

        let result = check_yaml_header(&projects, Severity::Error);

        let flagged: Vec<_> = result
            .iter()
            .map(|d| (d.project.as_deref(), d.message.as_str()))
            .collect();
        assert_eq!(flagged[0], (Some("missing"), "No YAML header"));
        assert_eq!(flagged[1].0, Some("broken"));
        assert_eq!(flagged[2], (Some("empty"), "Empty YAML header"));
        assert_eq!(result.error_count(), 3);
    }

    #[test]
    fn test_title_presence() {
        let projects = vec![
            parsed("titled", ":: en\n# Shop\n"),
            parsed("half", "# Shared\n:: en\n:: fr\n# \n"),
            parsed("empty", ":: en\nNo title here.\n"),
            parsed("bare", "# Title without language\n"),
        ];

        let result = check_title_presence(&projects, Severity::Error);

        let flagged: Vec<_> = result.iter().map(|d| d.project.as_deref()).collect();
        assert_eq!(flagged, vec![Some("empty"), Some("bare")]);
    }

    #[test]
    fn test_title_uniqueness() {
        let projects = vec![
            parsed("a", ":: en\n# Shop\n"),
            parsed("b", ":: en\n# Shop\n:: fr\n# Boutique\n"),
            parsed("c", ":: fr\n# Shop\n"),
        ];

        let result = check_title_uniqueness(&projects, Severity::Error);

        assert_eq!(result.error_count(), 1);
        let message = &result.iter().next().unwrap().message;
        assert!(message.contains("'Shop' (en)"));
        assert!(message.ends_with("a, b"));
    }

    #[test]
    fn test_tags_presence() {
        let projects = vec![
            parsed("tagged", "---\ntags: [web]\n---\n"),
            parsed("untagged", "---\nyear: 2020\n---\n"),
        ];

        let result = check_tags_presence(&projects, Severity::Warning);

        assert_eq!(result.warning_count(), 1);
        assert_eq!(
            result.iter().next().unwrap().project.as_deref(),
            Some("untagged")
        );
    }

    #[test]
    fn test_working_media() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("cover.png"), b"png").unwrap();
        let source = ":: en\n![cover](cover.png)\n\n>[clip](clip.mp4)\n\n![remote](https://cdn.example/x.png)\n\n:: fr\n>[clip](clip.mp4)\n";
        let projects = vec![parsed_at("shop", dir.path().to_path_buf(), source)];

        let result = check_working_media(&projects, Severity::Warning);

        let messages: Vec<_> = result.iter().map(|d| d.message.as_str()).collect();
        assert_eq!(messages, vec!["Embedded file 'clip.mp4' not found"]);
    }

    #[test]
    fn test_work_folder_uniqueness() {
        let projects = vec![
            parsed_at("shop", PathBuf::from("web/shop"), ""),
            parsed_at("shop", PathBuf::from("print/shop"), ""),
            parsed_at("poster", PathBuf::from("print/poster"), ""),
        ];

        let result = check_work_folder_uniqueness(&projects, Severity::Fatal);

        assert!(result.has_fatal());
        assert_eq!(result.count(Severity::Fatal), 1);
    }

    #[test]
    fn test_work_folder_safeness() {
        let projects = vec![parsed("good-name", ""), parsed("Bad Name", "")];

        let result = check_work_folder_safeness(&projects, Severity::Error);

        assert_eq!(result.error_count(), 1);
        let diagnostic = result.iter().next().unwrap();
        assert_eq!(diagnostic.help.as_deref(), Some("Rename the folder to 'bad-name'"));
    }

    #[test]
    fn test_numeric_fields() {
        let projects = vec![parsed("notes", "[123456]: too big\n")];

        let result = check_numeric_fields(&projects);

        assert_eq!(result.warning_count(), 1);
    }
}

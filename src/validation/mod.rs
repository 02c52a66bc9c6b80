//! Validation of parsed portfolio projects.
//!
//! Runs the configured checks against parsed projects and reports errors
//! and warnings. Used by both `portfoliodb validate` and `portfoliodb build`.

mod checks;
mod warning;

pub use warning::{Diagnostic, Severity, ValidationResult};

use crate::discovery::{Check, Configuration, ParsedProject};
use crate::output::Printer;

/// Run every enabled check against the parsed projects.
pub fn validate_projects(projects: &[ParsedProject], config: &Configuration) -> ValidationResult {
    let mut result = ValidationResult::new();

    let suite: [(Check, fn(&[ParsedProject], Severity) -> ValidationResult); 7] = [
        (Check::WorkFolderUniqueness, checks::check_work_folder_uniqueness),
        (Check::WorkFolderSafeness, checks::check_work_folder_safeness),
        (Check::YamlHeader, checks::check_yaml_header),
        (Check::TitlePresence, checks::check_title_presence),
        (Check::TitleUniqueness, checks::check_title_uniqueness),
        (Check::TagsPresence, checks::check_tags_presence),
        (Check::WorkingMedia, checks::check_working_media),
    ];

    for (check, run) in suite {
        if let Some(severity) = config.check_level(check).severity() {
            result.merge(run(projects, severity));
        }
    }

    result.merge(checks::check_numeric_fields(projects));

    result
}

/// Print diagnostics to stderr.
pub fn print_diagnostics(result: &ValidationResult, printer: &Printer) {
    for d in result.iter() {
        let label = printer.severity(d.severity);
        match &d.project {
            Some(project) => eprintln!("{}[{}]: {}: {}", label, d.code, project, d.message),
            None => eprintln!("{}[{}]: {}", label, d.code, d.message),
        }
        if let Some(help) = &d.help {
            eprintln!("  {} {}", printer.dim("help:"), help);
        }
    }

    let errors = result.error_count();
    let warnings = result.warning_count();

    if errors > 0 {
        printer.error(
            "Failed",
            &format!("validation: {} error(s), {} warning(s)", errors, warnings),
        );
    } else if warnings > 0 {
        printer.warning("Passed", &format!("validation ({} warning(s))", warnings));
    } else {
        printer.status("Passed", "validation");
    }
}

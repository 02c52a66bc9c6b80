//! Terminal output formatting for the portfoliodb CLI.
//!
//! Status lines go to stderr with a right-aligned coloured verb, Cargo
//! style. Stdout carries only JSON.

use std::io::{self, IsTerminal};
use std::path::Path;

use crate::discovery::ParsedProject;
use crate::validation::Severity;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";

/// Width for right-aligned verb column.
const VERB_WIDTH: usize = 12;

/// Colour of a verb or label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tone {
    Progress,
    Note,
    Caution,
    Failure,
}

impl Tone {
    fn colour(self) -> &'static str {
        match self {
            Tone::Progress => GREEN,
            Tone::Note => CYAN,
            Tone::Caution => YELLOW,
            Tone::Failure => RED,
        }
    }

    fn of(severity: Severity) -> Self {
        match severity {
            Severity::Info => Tone::Note,
            Severity::Warning => Tone::Caution,
            Severity::Error | Severity::Fatal => Tone::Failure,
        }
    }
}

/// Terminal-aware status printer. Colour is on when stderr is a terminal.
pub struct Printer {
    color: bool,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

impl Printer {
    pub fn new() -> Self {
        Self {
            color: io::stderr().is_terminal(),
        }
    }

    /// A printer that never emits escape codes.
    pub fn plain() -> Self {
        Self { color: false }
    }

    /// e.g. "     Parsing 12 projects"
    pub fn status(&self, verb: &str, message: &str) {
        self.line(Tone::Progress, verb, message);
    }

    pub fn warning(&self, verb: &str, message: &str) {
        self.line(Tone::Caution, verb, message);
    }

    pub fn error(&self, verb: &str, message: &str) {
        self.line(Tone::Failure, verb, message);
    }

    /// One line per parsed project, yellow when parsing hit recoverable
    /// problems.
    pub fn project(&self, parsed: &ParsedProject) {
        let tone = if parsed.result.diagnostics.is_empty() {
            Tone::Progress
        } else {
            Tone::Caution
        };
        self.line(tone, "Parsed", &project_summary(parsed));
    }

    /// Format a string as dim/grey.
    pub fn dim(&self, text: &str) -> String {
        self.paint(DIM, text)
    }

    /// Bold label for a diagnostic severity.
    pub fn severity(&self, severity: Severity) -> String {
        let style = format!("{BOLD}{}", Tone::of(severity).colour());
        self.paint(&style, &severity.to_string())
    }

    fn paint(&self, style: &str, text: &str) -> String {
        if self.color {
            format!("{style}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    fn line(&self, tone: Tone, verb: &str, message: &str) {
        let style = format!("{BOLD}{}", tone.colour());
        let verb = self.paint(&style, &format!("{verb:>VERB_WIDTH$}"));
        eprintln!("{verb} {message}");
    }
}

/// `shop [en, fr]`, with a problem count when parsing recovered from any.
pub fn project_summary(parsed: &ParsedProject) -> String {
    let languages: Vec<&str> = parsed.result.description.languages().collect();
    let mut summary = if languages.is_empty() {
        format!("{} (no language)", parsed.project.id)
    } else {
        format!("{} [{}]", parsed.project.id, languages.join(", "))
    };

    let problems = parsed.result.diagnostics.len();
    if problems > 0 {
        summary.push_str(&format!(", {}", plural(problems, "problem", "problems")));
    }
    summary
}

/// Pluralize a count: `plural(1, "project", "projects")` → "1 project".
pub fn plural(n: usize, singular: &str, pluralized: &str) -> String {
    let word = if n == 1 { singular } else { pluralized };
    format!("{n} {word}")
}

/// A path relative to the working directory when it lies below it.
pub fn display_path(path: &Path) -> String {
    let relative = std::env::current_dir()
        .ok()
        .and_then(|cwd| path.strip_prefix(cwd).ok().map(Path::to_path_buf));

    match relative {
        Some(r) if r.as_os_str().is_empty() => ".".to_string(),
        Some(r) => r.display().to_string(),
        None => path.display().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discovery::Project;
    use crate::parser::parse_description;
    use std::path::PathBuf;

    fn parsed(id: &str, source: &str) -> ParsedProject {
        ParsedProject {
            project: Project {
                id: id.to_string(),
                path: PathBuf::from(id),
                description_raw: source.to_string(),
            },
            result: parse_description(source),
        }
    }

    #[test]
    fn test_plural() {
        assert_eq!(plural(1, "project", "projects"), "1 project");
        assert_eq!(plural(0, "project", "projects"), "0 projects");
        assert_eq!(plural(3, "language", "languages"), "3 languages");
    }

    #[test]
    fn test_plain_printer_has_no_escapes() {
        let printer = Printer::plain();

        assert_eq!(printer.dim("help:"), "help:");
        assert_eq!(printer.severity(Severity::Fatal), "fatal");
    }

    #[test]
    fn test_severity_tones() {
        assert_eq!(Tone::of(Severity::Info), Tone::Note);
        assert_eq!(Tone::of(Severity::Warning), Tone::Caution);
        assert_eq!(Tone::of(Severity::Fatal), Tone::Failure);
    }

    #[test]
    fn test_project_summary() {
        assert_eq!(
            project_summary(&parsed("shop", ":: fr\n# Boutique\n:: en\n# Shop\n")),
            "shop [en, fr]"
        );
        assert_eq!(project_summary(&parsed("bare", "# Title\n")), "bare (no language)");
        assert_eq!(
            project_summary(&parsed("notes", ":: en\n[70000]: big\n")),
            "notes [en], 1 problem"
        );
    }

    #[test]
    fn test_display_path_absolute() {
        let p = Path::new("/nonexistent/portfolio/shop");
        assert_eq!(display_path(p), "/nonexistent/portfolio/shop");
    }
}

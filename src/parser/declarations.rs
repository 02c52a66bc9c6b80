//! Line-level collection of abbreviation and footnote definitions.

use crate::error::RecoverableError;
use crate::types::{Abbreviation, Footnote};

use super::extract::{parse_abbreviation, parse_footnote};

/// Definitions pulled out of a block, plus what is left of it.
#[derive(Debug, Default)]
pub struct DeclarationsResult {
    /// The input with every definition line removed.
    pub body: String,
    pub abbreviations: Vec<Abbreviation>,
    pub footnotes: Vec<Footnote>,
    /// Footnote numbers that could not be read.
    pub errors: Vec<RecoverableError>,
}

/// Remove abbreviation and footnote definition lines from `markdown`.
///
/// A definition must take up a whole line (`*[name]: definition` or
/// `[n]: content`). Definitions are returned in the order they appear.
pub fn collect_declarations(markdown: &str) -> DeclarationsResult {
    let mut result = DeclarationsResult::default();

    for line in markdown.lines() {
        if let Some(abbreviation) = parse_abbreviation(line) {
            result.abbreviations.push(abbreviation);
        } else if let Some(footnote) = parse_footnote(line, &mut result.errors) {
            result.footnotes.push(footnote);
        } else {
            result.body.push_str(line);
            result.body.push('\n');
        }
    }

    result
}

//! Splitting a body into per-language blocks.

use crate::types::{LanguageCode, PerLanguage};

use super::patterns::LANGUAGE_MARKER;

/// A body split at its language markers.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LanguageBlocks {
    /// Lines before the first marker, shared by every language.
    pub unlocalized: String,
    /// Lines after each marker, keyed by the marker's language code.
    pub localized: PerLanguage<String>,
}

/// Split `markdown` on `:: code` marker lines.
///
/// Marker lines are not copied anywhere. Once a marker has been seen, no
/// later line goes back to the unlocalized block. Repeating a marker starts
/// that language's block over.
pub fn split_languages(markdown: &str) -> LanguageBlocks {
    let mut blocks = LanguageBlocks::default();
    let mut current: Option<LanguageCode> = None;

    for line in markdown.lines() {
        if let Some(code) = language_marker(line) {
            if blocks.localized.insert(code.to_string(), String::new()).is_some() {
                tracing::debug!("language `{code}` declared again, restarting its block");
            }
            current = Some(code.to_string());
            continue;
        }

        let target = match &current {
            Some(code) => blocks.localized.entry(code.clone()).or_default(),
            None => &mut blocks.unlocalized,
        };
        target.push_str(line);
        target.push('\n');
    }

    blocks
}

/// All language codes declared in `markdown`, in order of first appearance.
pub fn detect_languages(markdown: &str) -> Vec<LanguageCode> {
    let mut languages: Vec<LanguageCode> = Vec::new();

    for code in markdown.lines().filter_map(language_marker) {
        if !languages.iter().any(|l| l == code) {
            languages.push(code.to_string());
        }
    }

    languages
}

/// The language code of a marker line, exactly as written.
fn language_marker(line: &str) -> Option<&str> {
    LANGUAGE_MARKER
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

//! The per-language aggregate produced for one description document.

use std::collections::BTreeMap;

use serde::Serialize;

use super::records::{Abbreviation, Footnote, ImageEmbed, Link, MediaEmbed, Paragraph};

/// A language code taken verbatim from a `:: code` marker (no normalization).
pub type LanguageCode = String;

/// Front matter key/value pairs.
pub type Metadata = BTreeMap<String, serde_yaml::Value>;

/// A map keyed by language code.
pub type PerLanguage<T> = BTreeMap<LanguageCode, T>;

/// Everything extracted from one description document.
///
/// Every language present in one per-language map is present in all of
/// them, possibly with an empty value. Lists keep source order, with
/// unlocalized content ahead of the language's own content.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParsedDescription {
    pub metadata: Metadata,
    pub title: PerLanguage<String>,
    pub paragraphs: PerLanguage<Vec<Paragraph>>,
    pub image_embeds: PerLanguage<Vec<ImageEmbed>>,
    pub media_embeds: PerLanguage<Vec<MediaEmbed>>,
    pub links: PerLanguage<Vec<Link>>,
    pub footnotes: PerLanguage<Vec<Footnote>>,
    pub abbreviations: PerLanguage<Vec<Abbreviation>>,
}

impl ParsedDescription {
    /// Languages the document has content for, in code order.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.title.keys().map(String::as_str)
    }

    /// Whether the document defines no language at all.
    pub fn is_unlocalized(&self) -> bool {
        self.title.is_empty()
    }

    /// Get the title for a language, if the language exists and has one.
    pub fn title_for(&self, language: &str) -> Option<&str> {
        self.title
            .get(language)
            .map(String::as_str)
            .filter(|t| !t.is_empty())
    }

    /// Get a metadata string value by key.
    pub fn get_metadata_str(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).and_then(|v| v.as_str())
    }

    /// Get tags from metadata (handles both string and sequence).
    pub fn tags(&self) -> Vec<String> {
        match self.metadata.get("tags") {
            Some(serde_yaml::Value::String(s)) => s
                .split(|c: char| c.is_whitespace() || c == ',')
                .filter(|t| !t.is_empty())
                .map(|t| t.trim_start_matches('#').to_string())
                .collect(),
            Some(serde_yaml::Value::Sequence(seq)) => seq
                .iter()
                .filter_map(|v| v.as_str())
                .map(|s| s.trim_start_matches('#').to_string())
                .collect(),
            _ => vec![],
        }
    }

    /// Register a language in every per-language map.
    ///
    /// Existing entries are left untouched.
    pub(crate) fn insert_language(&mut self, language: &str) {
        self.title.entry(language.to_string()).or_default();
        self.paragraphs.entry(language.to_string()).or_default();
        self.image_embeds.entry(language.to_string()).or_default();
        self.media_embeds.entry(language.to_string()).or_default();
        self.links.entry(language.to_string()).or_default();
        self.footnotes.entry(language.to_string()).or_default();
        self.abbreviations.entry(language.to_string()).or_default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_tags(value: serde_yaml::Value) -> ParsedDescription {
        let mut description = ParsedDescription::default();
        description.metadata.insert("tags".to_string(), value);
        description
    }

    #[test]
    fn test_tags_from_string() {
        let description = with_tags(serde_yaml::Value::String("#web, design  print".to_string()));

        assert_eq!(description.tags(), vec!["web", "design", "print"]);
    }

    #[test]
    fn test_tags_from_sequence() {
        let description = with_tags(serde_yaml::Value::Sequence(vec![
            serde_yaml::Value::String("web".to_string()),
            serde_yaml::Value::Bool(true),
            serde_yaml::Value::String("#print".to_string()),
        ]));

        assert_eq!(description.tags(), vec!["web", "print"]);
    }

    #[test]
    fn test_tags_missing() {
        assert!(ParsedDescription::default().tags().is_empty());
    }

    #[test]
    fn test_insert_language_fills_every_map() {
        let mut description = ParsedDescription::default();
        description.insert_language("fr");

        assert_eq!(description.languages().collect::<Vec<_>>(), vec!["fr"]);
        assert!(description.paragraphs["fr"].is_empty());
        assert!(description.image_embeds["fr"].is_empty());
        assert!(description.media_embeds["fr"].is_empty());
        assert!(description.links["fr"].is_empty());
        assert!(description.footnotes["fr"].is_empty());
        assert!(description.abbreviations["fr"].is_empty());
        assert_eq!(description.title_for("fr"), None);
    }

    #[test]
    fn test_insert_language_keeps_existing_values() {
        let mut description = ParsedDescription::default();
        description.insert_language("en");
        description.title.insert("en".to_string(), "Hello".to_string());
        description.insert_language("en");

        assert_eq!(description.title_for("en"), Some("Hello"));
    }
}

//! Typed records extracted from description chunks.

use serde::Serialize;

/// An abbreviation definition: `*[HTML]: Hypertext Markup Language`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Abbreviation {
    /// The abbreviated term.
    pub name: String,
    /// What the term stands for.
    pub definition: String,
}

/// A numbered footnote definition: `[1]: Some aside.`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Footnote {
    /// Footnote number. Zero when the source number could not be read.
    pub number: u16,
    pub content: String,
}

/// A block of prose, optionally anchored by a `(some-id)` marker line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Paragraph {
    /// Lowercase-hyphen identifier, empty when the chunk had no marker.
    pub id: String,
    pub content: String,
}

/// A standalone link line: `[name "title"](url)`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Link {
    /// Slug derived from `name`, unique within one language.
    pub id: String,
    pub name: String,
    /// Optional title, empty when absent.
    pub title: String,
    pub url: String,
}

/// An embed line: `>[alt "title"](source)` for media, `![alt "title"](source)`
/// for images.
///
/// Only the syntax is captured. Nothing here checks that `source` exists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MediaEmbed {
    pub alt: String,
    /// Optional title, empty when absent.
    pub title: String,
    pub source: String,
}

/// Image embeds share the media embed shape; only the marker differs.
pub type ImageEmbed = MediaEmbed;

//! Chunk segmentation and classification.
//!
//! A chunk is a blank-line separated piece of a raw block. Classification
//! looks at the chunk text alone and tries the kinds in a fixed order; the
//! first match wins.

use super::patterns::{
    ABBREVIATION_DEFINITION, EMBED_OR_LINK, FOOTNOTE_DECLARATION, LANGUAGE_MARKER, PARAGRAPH_ID,
    TITLE,
};

/// The syntactic kind of a chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChunkKind {
    /// `*[name]: definition`
    Abbreviation,
    /// Prose whose first line is a `(some-id)` marker
    ParagraphWithId,
    /// `![alt "title"](source)`
    Image,
    /// `>[alt "title"](source)`
    Media,
    /// `[name "title"](url)`
    Link,
    /// `[n]: content`
    FootnoteDeclaration,
    /// `# Title`
    Title,
    /// Anything else
    Paragraph,
}

/// A classified chunk borrowing its text from the block it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk<'a> {
    pub kind: ChunkKind,
    /// Chunk text with surrounding whitespace trimmed.
    pub text: &'a str,
}

/// Split a raw block on blank lines and classify every non-empty piece.
///
/// Residual language markers are dropped.
pub fn segment_chunks(block: &str) -> Vec<Chunk<'_>> {
    block
        .split("\n\n")
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .filter_map(|text| classify_chunk(text).map(|kind| Chunk { kind, text }))
        .collect()
}

/// Classify a trimmed chunk.
///
/// Returns `None` only for a chunk that is a language marker, which the
/// language splitter should already have removed.
pub fn classify_chunk(text: &str) -> Option<ChunkKind> {
    let first_line = text.lines().next().unwrap_or_default();

    if ABBREVIATION_DEFINITION.is_match(text) {
        return Some(ChunkKind::Abbreviation);
    }

    if PARAGRAPH_ID.is_match(first_line) {
        return Some(ChunkKind::ParagraphWithId);
    }

    if let Some(caps) = EMBED_OR_LINK.captures(text) {
        let kind = match &caps[1] {
            "!" => ChunkKind::Image,
            ">" => ChunkKind::Media,
            _ => ChunkKind::Link,
        };
        return Some(kind);
    }

    if FOOTNOTE_DECLARATION.is_match(text) {
        return Some(ChunkKind::FootnoteDeclaration);
    }

    if LANGUAGE_MARKER.is_match(text) {
        tracing::debug!("dropping stray language marker chunk {text:?}");
        return None;
    }

    if TITLE.is_match(text) {
        return Some(ChunkKind::Title);
    }

    Some(ChunkKind::Paragraph)
}

//! Typed extraction of classified chunks.
//!
//! Each extractor takes the text of a chunk (or a single line, for the
//! declaration collector) and returns a typed record, or `None` when the
//! text does not have the expected shape.

use regex::Captures;

use crate::error::RecoverableError;
use crate::types::{Abbreviation, Footnote, Link, MediaEmbed, Paragraph};

use super::chunk::{Chunk, ChunkKind};
use super::patterns::{
    ABBREVIATION_DEFINITION, EMBED_OR_LINK, FOOTNOTE_DECLARATION, PARAGRAPH_ID, TITLE,
};
use super::slug::slugify;

/// A chunk turned into the record it describes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    Title(String),
    Paragraph(Paragraph),
    Image(MediaEmbed),
    Media(MediaEmbed),
    Link(Link),
    Footnote(Footnote),
    Abbreviation(Abbreviation),
}

/// Extract the record for a classified chunk.
///
/// Classification guarantees the chunk matches its kind's pattern. Should an
/// extractor still come back empty the chunk is kept as a plain paragraph,
/// so no text is lost.
pub fn extract_record(chunk: &Chunk<'_>, errors: &mut Vec<RecoverableError>) -> Record {
    let record = match chunk.kind {
        ChunkKind::Title => parse_title(chunk.text).map(Record::Title),
        ChunkKind::Paragraph => Some(Record::Paragraph(Paragraph {
            id: String::new(),
            content: chunk.text.to_string(),
        })),
        ChunkKind::ParagraphWithId => Some(Record::Paragraph(parse_paragraph(chunk.text))),
        ChunkKind::Image => parse_embed(chunk.text).map(Record::Image),
        ChunkKind::Media => parse_embed(chunk.text).map(Record::Media),
        ChunkKind::Link => parse_link(chunk.text).map(Record::Link),
        ChunkKind::FootnoteDeclaration => parse_footnote(chunk.text, errors).map(Record::Footnote),
        ChunkKind::Abbreviation => parse_abbreviation(chunk.text).map(Record::Abbreviation),
    };

    record.unwrap_or_else(|| {
        Record::Paragraph(Paragraph {
            id: String::new(),
            content: chunk.text.to_string(),
        })
    })
}

/// `# Title` -> `Title`.
pub fn parse_title(text: &str) -> Option<String> {
    TITLE.captures(text).map(|caps| caps[1].to_string())
}

/// Parse a paragraph, taking its ID from a `(some-id)` first line.
///
/// With a marker the content is every following line; without one the ID
/// is empty and the content is the whole text.
pub fn parse_paragraph(text: &str) -> Paragraph {
    let mut lines = text.lines();
    let id = lines
        .next()
        .and_then(|first| PARAGRAPH_ID.captures(first))
        .map(|caps| caps[1].to_string());

    match id {
        Some(id) => Paragraph {
            id,
            content: lines.collect::<Vec<_>>().join("\n"),
        },
        None => Paragraph {
            id: String::new(),
            content: text.to_string(),
        },
    }
}

/// Parse an image or media embed line. The marker character is not checked.
pub fn parse_embed(text: &str) -> Option<MediaEmbed> {
    let caps = EMBED_OR_LINK.captures(text)?;

    Some(MediaEmbed {
        alt: caps[2].to_string(),
        title: optional_group(&caps, 3),
        source: caps[4].to_string(),
    })
}

/// Parse a link line. The `id` is the plain slug of the name; the
/// aggregator makes it unique per language.
pub fn parse_link(text: &str) -> Option<Link> {
    let caps = EMBED_OR_LINK.captures(text)?;

    Some(Link {
        id: slugify(&caps[2]),
        name: caps[2].to_string(),
        title: optional_group(&caps, 3),
        url: caps[4].to_string(),
    })
}

/// Parse a `[n]: content` footnote definition.
///
/// A number that does not fit in 16 bits becomes 0 and is reported through
/// `errors`.
pub fn parse_footnote(text: &str, errors: &mut Vec<RecoverableError>) -> Option<Footnote> {
    let caps = FOOTNOTE_DECLARATION.captures(text)?;

    let raw = &caps[1];
    let number = raw.parse::<u16>().unwrap_or_else(|_| {
        let error = RecoverableError::NumericField {
            field: "Footnote number",
            raw: raw.to_string(),
        };
        tracing::warn!("{error}");
        errors.push(error);
        0
    });

    Some(Footnote {
        number,
        content: caps[2].to_string(),
    })
}

/// Parse a `*[name]: definition` abbreviation definition.
pub fn parse_abbreviation(text: &str) -> Option<Abbreviation> {
    let caps = ABBREVIATION_DEFINITION.captures(text)?;

    Some(Abbreviation {
        name: caps[1].to_string(),
        definition: caps[2].to_string(),
    })
}

fn optional_group(caps: &Captures<'_>, index: usize) -> String {
    caps.get(index)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn chunk(kind: ChunkKind, text: &str) -> Chunk<'_> {
        Chunk { kind, text }
    }

    #[test]
    fn test_parse_title() {
        assert_eq!(parse_title("# Hello world"), Some("Hello world".to_string()));
        assert_eq!(parse_title("#Hello"), None);
    }

    #[test]
    fn test_parse_paragraph_with_id() {
        let paragraph = parse_paragraph("(my-id)\nAnother paragraph.\nSecond line.");

        assert_eq!(
            paragraph,
            Paragraph {
                id: "my-id".to_string(),
                content: "Another paragraph.\nSecond line.".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_paragraph_without_id() {
        let paragraph = parse_paragraph("Just (words)\nhere.");

        assert_eq!(paragraph.id, "");
        assert_eq!(paragraph.content, "Just (words)\nhere.");
    }

    #[test]
    fn test_parse_image() {
        let image = parse_embed("![a cat](cat.jpg)").unwrap();

        assert_eq!(
            image,
            MediaEmbed {
                alt: "a cat".to_string(),
                title: String::new(),
                source: "cat.jpg".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_media_with_title() {
        let media = parse_embed(r#">[trailer "The trailer"](trailer.mp4)"#).unwrap();

        assert_eq!(media.alt, "trailer");
        assert_eq!(media.title, "The trailer");
        assert_eq!(media.source, "trailer.mp4");
    }

    #[test]
    fn test_parse_link() {
        let link = parse_link(r#"[Example "My title"](https://example.com)"#).unwrap();

        assert_eq!(
            link,
            Link {
                id: "example".to_string(),
                name: "Example".to_string(),
                title: "My title".to_string(),
                url: "https://example.com".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_footnote() {
        let mut errors = Vec::new();
        let footnote = parse_footnote("[1]: a footnote.", &mut errors).unwrap();

        assert_eq!(footnote.number, 1);
        assert_eq!(footnote.content, "a footnote.");
        assert!(errors.is_empty());
    }

    #[test]
    fn test_parse_footnote_overflow() {
        let mut errors = Vec::new();
        let footnote = parse_footnote("[70000]: too many notes", &mut errors).unwrap();

        assert_eq!(footnote.number, 0);
        assert_eq!(footnote.content, "too many notes");
        assert_eq!(
            errors,
            vec![RecoverableError::NumericField {
                field: "Footnote number",
                raw: "70000".to_string(),
            }]
        );
    }

    #[test]
    fn test_parse_abbreviation_uses_name_group() {
        let abbreviation = parse_abbreviation("*[HTML]: Hypertext Markup Language").unwrap();

        assert_eq!(abbreviation.name, "HTML");
        assert_eq!(abbreviation.definition, "Hypertext Markup Language");
    }

    #[test]
    fn test_extract_record_dispatch() {
        let mut errors = Vec::new();

        assert_eq!(
            extract_record(&chunk(ChunkKind::Title, "# Hi"), &mut errors),
            Record::Title("Hi".to_string())
        );
        assert!(matches!(
            extract_record(&chunk(ChunkKind::Image, "![x](x.png)"), &mut errors),
            Record::Image(_)
        ));
        assert!(matches!(
            extract_record(&chunk(ChunkKind::Media, ">[x](x.mp4)"), &mut errors),
            Record::Media(_)
        ));
        assert!(matches!(
            extract_record(&chunk(ChunkKind::FootnoteDeclaration, "[3]: x"), &mut errors),
            Record::Footnote(Footnote { number: 3, .. })
        ));
    }

    #[test]
    fn test_extract_record_falls_back_to_paragraph() {
        let mut errors = Vec::new();

        let record = extract_record(&chunk(ChunkKind::Link, "not a link"), &mut errors);

        assert_eq!(
            record,
            Record::Paragraph(Paragraph {
                id: String::new(),
                content: "not a link".to_string(),
            })
        );
    }
}

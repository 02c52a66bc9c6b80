//! Description parsing: the full pipeline from raw text to
//! `ParsedDescription`.

use std::collections::HashSet;

use rayon::prelude::*;

use crate::error::RecoverableError;
use crate::types::{
    Abbreviation, Footnote, ImageEmbed, LanguageCode, Link, MediaEmbed, Paragraph,
    ParsedDescription,
};

use super::chunk::segment_chunks;
use super::declarations::collect_declarations;
use super::extract::{extract_record, Record};
use super::frontmatter::extract_frontmatter;
use super::language::{detect_languages, split_languages};
use super::slug::unique_slug;

/// Fallback id for links whose name has no slug-able characters.
const FALLBACK_LINK_ID: &str = "link";

/// Options for parsing a description.
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    /// Language that receives the unlocalized content of a document with no
    /// language markers. Without it such a document has no languages.
    pub default_language: Option<LanguageCode>,
    /// Process languages of one document on the rayon pool
    /// (`--parallel-languages` on `build` and `parse`).
    pub parallel: bool,
}

impl ParseOptions {
    /// Options with a default language set.
    pub fn with_default_language(language: impl Into<LanguageCode>) -> Self {
        Self {
            default_language: Some(language.into()),
            ..Self::default()
        }
    }
}

/// A parsed description and everything that went wrong along the way.
#[derive(Debug, Clone, Default)]
pub struct DescriptionResult {
    pub description: ParsedDescription,
    /// Whether the source had a `---` front matter delimiter, even an
    /// empty block.
    pub has_frontmatter: bool,
    /// Recoverable problems, in document order.
    pub diagnostics: Vec<RecoverableError>,
}

/// Parse a description document with default options.
///
/// Never fails: malformed pieces are recovered from and reported in
/// `diagnostics`.
pub fn parse_description(source: &str) -> DescriptionResult {
    parse_description_with(source, &ParseOptions::default())
}

/// Parse a description document.
pub fn parse_description_with(source: &str, options: &ParseOptions) -> DescriptionResult {
    let frontmatter = extract_frontmatter(source);
    let mut diagnostics: Vec<RecoverableError> = frontmatter.error.into_iter().collect();

    let mut languages = detect_languages(&frontmatter.body);
    if languages.is_empty() {
        if let Some(language) = &options.default_language {
            languages.push(language.clone());
        }
    }

    let blocks = split_languages(&frontmatter.body);
    let shared = BlockContent::parse(&blocks.unlocalized);
    diagnostics.extend(shared.errors.iter().cloned());

    let build = |language: &LanguageCode| {
        let own = blocks
            .localized
            .get(language)
            .map(|raw| BlockContent::parse(raw))
            .unwrap_or_default();
        let mut content = LanguageContent::default();
        content.apply(&shared);
        content.apply(&own);
        (language.clone(), content, own.errors)
    };

    let per_language: Vec<_> = if options.parallel {
        languages.par_iter().map(build).collect()
    } else {
        languages.iter().map(build).collect()
    };

    let mut description = ParsedDescription {
        metadata: frontmatter.metadata,
        ..ParsedDescription::default()
    };

    for (language, content, errors) in per_language {
        diagnostics.extend(errors);
        content.store(&language, &mut description);
    }

    tracing::debug!(
        languages = languages.len(),
        diagnostics = diagnostics.len(),
        "parsed description"
    );

    DescriptionResult {
        description,
        has_frontmatter: frontmatter.has_frontmatter,
        diagnostics,
    }
}

/// What one raw block contributes: its definition lines and the records of
/// its chunks.
#[derive(Debug, Default)]
struct BlockContent {
    abbreviations: Vec<Abbreviation>,
    footnotes: Vec<Footnote>,
    records: Vec<Record>,
    errors: Vec<RecoverableError>,
}

impl BlockContent {
    fn parse(raw: &str) -> Self {
        let declarations = collect_declarations(raw);
        let mut errors = declarations.errors;

        let records = segment_chunks(&declarations.body)
            .iter()
            .map(|chunk| extract_record(chunk, &mut errors))
            .collect();

        Self {
            abbreviations: declarations.abbreviations,
            footnotes: declarations.footnotes,
            records,
            errors,
        }
    }
}

/// Records gathered for one language.
#[derive(Debug, Default)]
struct LanguageContent {
    title: String,
    paragraphs: Vec<Paragraph>,
    image_embeds: Vec<ImageEmbed>,
    media_embeds: Vec<MediaEmbed>,
    links: Vec<Link>,
    footnotes: Vec<Footnote>,
    abbreviations: Vec<Abbreviation>,
    link_ids: HashSet<String>,
}

impl LanguageContent {
    /// Append a block: definition lines first, then chunk records in order.
    fn apply(&mut self, block: &BlockContent) {
        self.abbreviations.extend(block.abbreviations.iter().cloned());
        self.footnotes.extend(block.footnotes.iter().cloned());

        for record in &block.records {
            match record {
                // Only one title per language is kept: the last one.
                Record::Title(title) => self.title.clone_from(title),
                Record::Paragraph(paragraph) => self.paragraphs.push(paragraph.clone()),
                Record::Image(image) => self.image_embeds.push(image.clone()),
                Record::Media(media) => self.media_embeds.push(media.clone()),
                Record::Link(link) => {
                    let id = unique_slug(&link.id, FALLBACK_LINK_ID, &mut self.link_ids);
                    self.links.push(Link {
                        id,
                        ..link.clone()
                    });
                }
                Record::Footnote(footnote) => self.footnotes.push(footnote.clone()),
                Record::Abbreviation(abbreviation) => {
                    self.abbreviations.push(abbreviation.clone());
                }
            }
        }
    }

    fn store(self, language: &str, description: &mut ParsedDescription) {
        description.insert_language(language);
        let key = language.to_string();

        description.title.insert(key.clone(), self.title);
        description.paragraphs.insert(key.clone(), self.paragraphs);
        description.image_embeds.insert(key.clone(), self.image_embeds);
        description.media_embeds.insert(key.clone(), self.media_embeds);
        description.links.insert(key.clone(), self.links);
        description.footnotes.insert(key.clone(), self.footnotes);
        description.abbreviations.insert(key, self.abbreviations);
    }
}

//! Parser for project description files.
//!
//! A description is markdown with a few extensions: YAML front matter,
//! `:: code` language markers, `(id)` paragraph anchors, standalone
//! image/media/link lines, footnote and abbreviation definitions.
//!
//! # Pipeline
//!
//! 1. [`extract_frontmatter`] splits off the metadata block
//! 2. [`split_languages`] separates shared content from each language
//! 3. [`collect_declarations`] pulls definition lines out of each block
//! 4. [`segment_chunks`] cuts blocks at blank lines and classifies chunks
//! 5. [`extract_record`] turns each chunk into a typed record
//! 6. [`parse_description`] assembles the per-language result
//!
//! # Usage
//!
//! ```ignore
//! use portfoliodb::parser::parse_description;
//!
//! let source = std::fs::read_to_string("my-project/description.md")?;
//! let result = parse_description(&source);
//!
//! for language in result.description.languages() {
//!     println!("{}: {:?}", language, result.description.title_for(language));
//! }
//! ```

mod chunk;
mod declarations;
mod description;
mod extract;
mod frontmatter;
mod language;
pub mod patterns;
mod slug;

// Re-export main entry points
pub use chunk::{classify_chunk, segment_chunks, Chunk, ChunkKind};
pub use declarations::{collect_declarations, DeclarationsResult};
pub use description::{parse_description, parse_description_with, DescriptionResult, ParseOptions};
pub use extract::{
    extract_record, parse_abbreviation, parse_embed, parse_footnote, parse_link, parse_paragraph,
    parse_title, Record,
};
pub use frontmatter::{decode_metadata, extract_frontmatter, FrontmatterResult};
pub use language::{detect_languages, split_languages, LanguageBlocks};
pub use slug::{slugify, unique_slug};

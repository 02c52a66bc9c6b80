//! portfoliodb - Structured data from folders of project descriptions
//!
//! A library for turning Markdown-with-front-matter project descriptions
//! into per-language JSON records: titles, paragraphs, media, links,
//! footnotes and abbreviations.

pub mod cli;
pub mod discovery;
pub mod error;
pub mod output;
pub mod parser;
pub mod types;
pub mod validation;

pub use discovery::{discover, Configuration, Database, ParsedProject, Project};
pub use error::{PortfolioError, RecoverableError, Result};
pub use parser::{parse_description, parse_description_with, DescriptionResult, ParseOptions};
pub use types::{
    Abbreviation, Footnote, ImageEmbed, LanguageCode, Link, MediaEmbed, Metadata, Paragraph,
    ParsedDescription, PerLanguage,
};
pub use validation::{validate_projects, Diagnostic, Severity, ValidationResult};

//! Core domain types for portfoliodb.
//!
//! This module contains the values a parsed description is made of:
//! - `ParsedDescription` - the per-language aggregate for one project
//! - `Paragraph`, `Link`, `MediaEmbed`, `Footnote`, `Abbreviation` - records
//!   extracted from individual chunks

mod description;
mod records;

pub use description::{LanguageCode, Metadata, ParsedDescription, PerLanguage};
pub use records::{Abbreviation, Footnote, ImageEmbed, Link, MediaEmbed, Paragraph};

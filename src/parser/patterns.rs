//! Line and chunk patterns of the description dialect.
//!
//! Compiled once on first use. None of the patterns use multi-line mode:
//! `^` and `$` anchor to the start and end of whatever text they are given,
//! which is a single line for the line-oriented stages and a whole chunk for
//! the classifier.
//!
//! Whitespace and digit classes are ASCII only (`[\t\n\f\r ]`, `[0-9]`):
//! a no-break space does not open a language marker and full-width digits
//! do not number a footnote.

use std::sync::LazyLock;

use regex::Regex;

/// `::  en` switches the current language. Group 1: language code.
pub static LANGUAGE_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^::[\t\n\f\r ]+(.+)$").unwrap());

/// `# Title`. Group 1: title text.
pub static TITLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[\t\n\f\r ]+(.+)$").unwrap());

/// `(some-id)` on the first line of a paragraph chunk. Group 1: id.
pub static PARAGRAPH_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\(([a-z-]+)\)$").unwrap());

/// `[name "title"](url)`, `![alt "title"](src)` or `>[alt "title"](src)`.
///
/// Group 1: marker (`!`, `>` or empty), 2: alt/name, 3: optional title,
/// 4: source/url.
pub static EMBED_OR_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^([!>]?)\[([^"\]]+)(?: "([^"\]]+)")?\]\(([^\)]+)\)$"#).unwrap()
});

/// `[12]: content`. Group 1: number, 2: content.
pub static FOOTNOTE_DECLARATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[([0-9]+)\]:[\t\n\f\r ]+(.+)$").unwrap());

/// `*[HTML]: Hypertext Markup Language`. Group 1: name, 2: definition.
pub static ABBREVIATION_DEFINITION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\*\[([^\]]+)\]:[\t\n\f\r ]+(.+)$").unwrap());

//! URL-safe identifiers for links.

use std::collections::HashSet;

/// Generate a URL-safe slug from text.
///
/// Lowercases ASCII letters, folds common Latin accents, turns whitespace,
/// `-` and `_` into single hyphens and drops everything else. Two different
/// names can produce the same slug; see [`unique_slug`].
pub fn slugify(text: &str) -> String {
    text.chars()
        .filter_map(|c| {
            let c = fold_accent(c);
            if c.is_ascii_alphanumeric() {
                Some(c.to_ascii_lowercase())
            } else if c.is_whitespace() || c == '-' || c == '_' {
                Some('-')
            } else {
                None
            }
        })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// Make `slug` unique among `taken` by appending `-2`, `-3`, ...
///
/// The returned slug is added to `taken`. An empty slug becomes `fallback`
/// before deduplication.
pub fn unique_slug(slug: &str, fallback: &str, taken: &mut HashSet<String>) -> String {
    let base = if slug.is_empty() { fallback } else { slug };

    let mut candidate = base.to_string();
    let mut suffix = 2;
    while taken.contains(&candidate) {
        candidate = format!("{base}-{suffix}");
        suffix += 1;
    }

    taken.insert(candidate.clone());
    candidate
}

fn fold_accent(c: char) -> char {
    match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å' => 'a',
        'ç' | 'Ç' => 'c',
        'è' | 'é' | 'ê' | 'ë' | 'È' | 'É' | 'Ê' | 'Ë' => 'e',
        'ì' | 'í' | 'î' | 'ï' | 'Ì' | 'Í' | 'Î' | 'Ï' => 'i',
        'ñ' | 'Ñ' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' | 'Ø' => 'o',
        'ù' | 'ú' | 'û' | 'ü' | 'Ù' | 'Ú' | 'Û' | 'Ü' => 'u',
        'ý' | 'ÿ' | 'Ý' => 'y',
        _ => c,
    }
}

//! YAML front matter extraction.

use crate::error::RecoverableError;
use crate::types::Metadata;

/// Result of splitting a description into front matter and markdown body.
#[derive(Debug)]
pub struct FrontmatterResult {
    /// Decoded front matter, empty when absent or malformed.
    pub metadata: Metadata,
    /// Every line outside the front matter, each with its newline restored.
    pub body: String,
    /// Whether at least one `---` line was seen.
    pub has_frontmatter: bool,
    /// Set when the front matter text could not be decoded.
    pub error: Option<RecoverableError>,
}

/// Split a description into its front matter and markdown body.
///
/// A line that is exactly `---` (ignoring surrounding whitespace) toggles
/// between front matter and body. The markers themselves are dropped. An
/// unbalanced marker leaves the toggle where it is for the rest of the
/// document, so everything after a lone `---` is treated as front matter.
pub fn extract_frontmatter(source: &str) -> FrontmatterResult {
    let mut in_frontmatter = false;
    let mut has_frontmatter = false;
    let mut yaml = String::new();
    let mut body = String::new();

    for line in source.lines() {
        if line.trim() == "---" {
            in_frontmatter = !in_frontmatter;
            has_frontmatter = true;
            continue;
        }

        let target = if in_frontmatter { &mut yaml } else { &mut body };
        target.push_str(line);
        target.push('\n');
    }

    let (metadata, error) = match decode_metadata(&yaml) {
        Ok(metadata) => (metadata, None),
        Err(e) => {
            tracing::warn!("{e}");
            (Metadata::new(), Some(e))
        }
    };

    FrontmatterResult {
        metadata,
        body,
        has_frontmatter,
        error,
    }
}

/// Decode front matter text into a key/value map.
///
/// Blank text and a YAML null both decode to an empty map. Anything that is
/// not a mapping is an error. Numeric and boolean keys are stringified;
/// keys of any other shape are dropped.
pub fn decode_metadata(yaml: &str) -> Result<Metadata, RecoverableError> {
    if yaml.trim().is_empty() {
        return Ok(Metadata::new());
    }

    let parsed: serde_yaml::Value =
        serde_yaml::from_str(yaml).map_err(|e| RecoverableError::MetadataDecode {
            message: e.to_string(),
        })?;

    match parsed {
        serde_yaml::Value::Mapping(map) => Ok(map
            .into_iter()
            .filter_map(|(key, value)| key_to_string(key).map(|key| (key, value)))
            .collect()),
        serde_yaml::Value::Null => Ok(Metadata::new()),
        other => Err(RecoverableError::MetadataDecode {
            message: format!("expected a mapping, found {}", describe(&other)),
        }),
    }
}

fn key_to_string(key: serde_yaml::Value) -> Option<String> {
    match key {
        serde_yaml::Value::String(s) => Some(s),
        serde_yaml::Value::Number(n) => Some(n.to_string()),
        serde_yaml::Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn describe(value: &serde_yaml::Value) -> &'static str {
    match value {
        serde_yaml::Value::Null => "nothing",
        serde_yaml::Value::Bool(_) => "a boolean",
        serde_yaml::Value::Number(_) => "a number",
        serde_yaml::Value::String(_) => "a string",
        serde_yaml::Value::Sequence(_) => "a list",
        serde_yaml::Value::Mapping(_) => "a mapping",
        serde_yaml::Value::Tagged(_) => "a tagged value",
    }
}

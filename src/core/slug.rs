// string helpers for file segments and heading anchors
use crate::core::types::NodeId;

const EXTERNAL_PREFIXES: [&str; 4] = ["http:", "https:", "ftp:", "file:"];

/// Replaces every character that is not ASCII alphanumeric with `_`.
/// Empty names fall back to `reflection-<id>`.
pub fn sanitize_alias(name: &str, id: NodeId) -> String {
    let alias: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    if alias.is_empty() {
        format!("reflection-{id}")
    } else {
        alias
    }
}

/// Wiki pages live in one flat namespace where underscores are dropped.
pub fn strip_underscores(segment: &str) -> String {
    segment.replace('_', "")
}

/// Heading id fragment as bitbucket derives it: separators removed, lowercased.
pub fn anchor_ref(text: &str) -> String {
    text.chars()
        .filter(|c| !matches!(c, '_' | '/' | '.' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Absolute urls (pointing outside the generated docs) are final and never
/// reassigned.
pub fn is_external_url(url: &str) -> bool {
    EXTERNAL_PREFIXES.iter().any(|p| url.starts_with(p))
}

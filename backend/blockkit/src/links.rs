//! URL extraction and the "helpful links" hint block.

use crate::elements::{Block, section};
use once_cell::sync::Lazy;
use regex::Regex;

/// `http`/`https` URLs, ending at whitespace or one of `)`, `>`, `]`.
static HTTP_LINK: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)https?://[^\s)>\]]+").unwrap());

const LINK_HINT_HEADER: &str = "*The following link(s) might help you:*";

/// Every URL in `text`, left to right, duplicates preserved.
pub fn extract_links(text: &str) -> Vec<String> {
    HTTP_LINK
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// A bulleted section listing the first `limit` links, or nothing.
pub fn link_hint_blocks(links: &[String], limit: usize) -> Vec<Block> {
    if links.is_empty() || limit == 0 {
        return Vec::new();
    }
    let bullets = links
        .iter()
        .take(limit)
        .map(|url| format!("• {url}"))
        .collect::<Vec<_>>()
        .join("\n");
    vec![section(&format!("{LINK_HINT_HEADER}\n{bullets}"))]
}

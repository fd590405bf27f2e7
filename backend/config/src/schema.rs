//! Settings schema for the helpdesk payload builder.
//!
//! Typed for serde YAML/JSON deserialization. Every field is optional in the
//! file; accessors fall back to the values in [`crate::defaults`].

use crate::defaults::{
    DEFAULT_DOCS_URL, DEFAULT_MAX_LINK_HINTS, DEFAULT_MAX_TEXT_CHARS, DEFAULT_SLA_URL,
    DEFAULT_TEAM_NAME, SLACK_SECTION_TEXT_LIMIT,
};
use serde::{Deserialize, Serialize};

/// Root settings consumed by the Block Kit builders.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockKitConfig {
    /// Ceiling applied to every embedded answer or section text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_text_chars: Option<usize>,

    /// How many extracted links the hint block lists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_link_hints: Option<usize>,

    /// Self-help documentation link shown after negative feedback.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docs_url: Option<String>,

    /// SLA documentation link appended to a created ticket.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sla_url: Option<String>,

    /// Organisation name used in the answer preamble.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_name: Option<String>,
}

impl BlockKitConfig {
    /// Never above Slack's section limit, whatever the file says.
    pub fn max_text_chars(&self) -> usize {
        self.max_text_chars
            .unwrap_or(DEFAULT_MAX_TEXT_CHARS)
            .min(SLACK_SECTION_TEXT_LIMIT)
    }

    pub fn max_link_hints(&self) -> usize {
        self.max_link_hints.unwrap_or(DEFAULT_MAX_LINK_HINTS)
    }

    pub fn docs_url(&self) -> &str {
        self.docs_url.as_deref().unwrap_or(DEFAULT_DOCS_URL)
    }

    pub fn sla_url(&self) -> &str {
        self.sla_url.as_deref().unwrap_or(DEFAULT_SLA_URL)
    }

    pub fn team_name(&self) -> &str {
        self.team_name.as_deref().unwrap_or(DEFAULT_TEAM_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_fall_back_to_defaults() {
        let cfg = BlockKitConfig::default();
        assert_eq!(cfg.max_text_chars(), 3000);
        assert_eq!(cfg.max_link_hints(), 3);
        assert_eq!(cfg.docs_url(), "https://cloudtech.apple.com/docs");
        assert_eq!(cfg.sla_url(), "https://cloudtech.apple.com/docs/sla");
        assert_eq!(cfg.team_name(), "Cloud Tech");
    }

    #[test]
    fn parses_camel_case_yaml() {
        let yaml = "maxTextChars: 1200\nteamName: Platform Support\n";
        let cfg: BlockKitConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cfg.max_text_chars(), 1200);
        assert_eq!(cfg.team_name(), "Platform Support");
        assert_eq!(cfg.max_link_hints(), 3);
    }

    #[test]
    fn text_limit_is_capped_at_slack_ceiling() {
        let cfg = BlockKitConfig {
            max_text_chars: Some(5000),
            ..Default::default()
        };
        assert_eq!(cfg.max_text_chars(), SLACK_SECTION_TEXT_LIMIT);
    }

    #[test]
    fn skips_unset_fields_when_serializing() {
        let cfg = BlockKitConfig {
            sla_url: Some("https://example.com/sla".into()),
            ..Default::default()
        };
        let value = serde_json::to_value(&cfg).unwrap();
        assert_eq!(value, serde_json::json!({"slaUrl": "https://example.com/sla"}));
    }
}

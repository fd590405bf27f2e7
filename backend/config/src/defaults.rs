//! Default values for unset settings.

use crate::schema::BlockKitConfig;

/// Slack rejects `section` text longer than this.
pub const SLACK_SECTION_TEXT_LIMIT: usize = 3000;

pub const DEFAULT_MAX_TEXT_CHARS: usize = SLACK_SECTION_TEXT_LIMIT;
pub const DEFAULT_MAX_LINK_HINTS: usize = 3;
pub const DEFAULT_DOCS_URL: &str = "https://cloudtech.apple.com/docs";
pub const DEFAULT_SLA_URL: &str = "https://cloudtech.apple.com/docs/sla";
pub const DEFAULT_TEAM_NAME: &str = "Cloud Tech";

/// Fill every unset field so the serialized config is explicit.
pub fn apply_all_defaults(mut config: BlockKitConfig) -> BlockKitConfig {
    config.max_text_chars.get_or_insert(DEFAULT_MAX_TEXT_CHARS);
    config.max_link_hints.get_or_insert(DEFAULT_MAX_LINK_HINTS);
    if config.docs_url.is_none() {
        config.docs_url = Some(DEFAULT_DOCS_URL.to_string());
    }
    if config.sla_url.is_none() {
        config.sla_url = Some(DEFAULT_SLA_URL.to_string());
    }
    if config.team_name.is_none() {
        config.team_name = Some(DEFAULT_TEAM_NAME.to_string());
    }
    config
}

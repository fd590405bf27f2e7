//! `helpdesk-config` — settings for the helpdesk Slack payload builder.
//!
//! Provides:
//! - Typed settings schema (text limits, link hints, documentation URLs)
//! - YAML loading
//! - Default value application
//! - Validation against Slack's limits

pub mod defaults;
pub mod io;
pub mod schema;
pub mod validation;

pub use defaults::{apply_all_defaults, SLACK_SECTION_TEXT_LIMIT};
pub use io::{load_config, parse_config};
pub use schema::BlockKitConfig;
pub use validation::{validate, ConfigValidationError, ValidationReport};

use anyhow::{bail, Result};
use std::path::Path;

/// Load, apply defaults, and validate a settings file.
///
/// This is the main entry point for loading settings at startup.
pub async fn load_and_prepare(path: &Path) -> Result<BlockKitConfig> {
    let raw = load_config(path).await?;
    prepare(raw)
}

fn prepare(raw: BlockKitConfig) -> Result<BlockKitConfig> {
    let config = apply_all_defaults(raw);

    let report = validate(&config);
    for warning in &report.warnings {
        tracing::warn!(path = %warning.path, message = %warning.message, "Settings warning");
    }
    for error in &report.errors {
        tracing::error!(path = %error.path, message = %error.message, "Settings error");
    }
    if !report.is_valid() {
        let paths: Vec<_> = report.errors.iter().map(|e| e.path.as_str()).collect();
        bail!("Invalid block kit settings at: {}", paths.join(", "));
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prepare_fills_defaults_and_keeps_user_values() {
        let raw = parse_config("slaUrl: https://support.example.com/sla\n").unwrap();
        let cfg = prepare(raw).unwrap();
        assert_eq!(cfg.sla_url.as_deref(), Some("https://support.example.com/sla"));
        assert_eq!(cfg.max_text_chars, Some(3000));
    }

    #[test]
    fn prepare_rejects_invalid_settings() {
        let raw = parse_config("maxTextChars: 4000\nmaxLinkHints: 0\n").unwrap();
        let msg = prepare(raw).unwrap_err().to_string();
        assert!(msg.contains("maxTextChars"));
        assert!(msg.contains("maxLinkHints"));
    }

    #[test]
    fn placeholder_text_is_taken_literally() {
        let raw = parse_config("teamName: \"${TEAM}\"\n").unwrap();
        let cfg = prepare(raw).unwrap();
        assert_eq!(cfg.team_name(), "${TEAM}");
    }

    #[tokio::test]
    async fn load_and_prepare_without_file_gives_full_defaults() {
        let path = std::env::temp_dir().join("helpdesk-config-never-written.yaml");
        let cfg = load_and_prepare(&path).await.unwrap();
        assert_eq!(cfg, apply_all_defaults(BlockKitConfig::default()));
    }
}

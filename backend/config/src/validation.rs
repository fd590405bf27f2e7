//! Settings validation with per-field error messages.

use crate::defaults::SLACK_SECTION_TEXT_LIMIT;
use crate::schema::BlockKitConfig;
use thiserror::Error;

/// A validation finding with its field path.
#[derive(Debug, Error)]
#[error("Config validation error at '{path}': {message}")]
pub struct ConfigValidationError {
    pub path: String,
    pub message: String,
}

/// Every error and warning found in one pass.
#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<ConfigValidationError>,
    pub warnings: Vec<ConfigValidationError>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    fn error(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigValidationError {
            path: path.into(),
            message: message.into(),
        });
    }

    fn warn(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigValidationError {
            path: path.into(),
            message: message.into(),
        });
    }
}

pub fn validate(config: &BlockKitConfig) -> ValidationReport {
    let mut report = ValidationReport::default();
    validate_limits(config, &mut report);
    validate_urls(config, &mut report);
    validate_team(config, &mut report);
    report
}

fn validate_limits(config: &BlockKitConfig, report: &mut ValidationReport) {
    match config.max_text_chars {
        Some(0) => report.error("maxTextChars", "Must be greater than zero"),
        Some(n) if n > SLACK_SECTION_TEXT_LIMIT => report.error(
            "maxTextChars",
            format!("{n} exceeds Slack's section text limit of {SLACK_SECTION_TEXT_LIMIT}"),
        ),
        _ => {}
    }
    if config.max_link_hints == Some(0) {
        report.error("maxLinkHints", "Must be greater than zero");
    }
}

fn validate_urls(config: &BlockKitConfig, report: &mut ValidationReport) {
    for (path, url) in [("docsUrl", &config.docs_url), ("slaUrl", &config.sla_url)] {
        let Some(url) = url else { continue };
        let lower = url.to_ascii_lowercase();
        if !(lower.starts_with("http://") || lower.starts_with("https://")) {
            report.error(path, format!("'{url}' is not an http(s) URL"));
        }
    }
}

fn validate_team(config: &BlockKitConfig, report: &mut ValidationReport) {
    if matches!(&config.team_name, Some(name) if name.trim().is_empty()) {
        report.warn("teamName", "Blank team name; the answer preamble will read oddly");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let report = validate(&BlockKitConfig::default());
        assert!(report.is_valid());
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn rejects_text_limit_above_slack_ceiling() {
        let cfg = BlockKitConfig {
            max_text_chars: Some(3001),
            ..Default::default()
        };
        let report = validate(&cfg);
        assert!(!report.is_valid());
        assert_eq!(report.errors[0].path, "maxTextChars");
    }

    #[test]
    fn rejects_zero_limits() {
        let cfg = BlockKitConfig {
            max_text_chars: Some(0),
            max_link_hints: Some(0),
            ..Default::default()
        };
        let paths: Vec<_> = validate(&cfg).errors.into_iter().map(|e| e.path).collect();
        assert_eq!(paths, vec!["maxTextChars", "maxLinkHints"]);
    }

    #[test]
    fn rejects_non_http_urls() {
        let cfg = BlockKitConfig {
            sla_url: Some("ftp://example.com/sla".into()),
            ..Default::default()
        };
        let report = validate(&cfg);
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].to_string().contains("slaUrl"));
    }

    #[test]
    fn blank_team_name_is_a_warning() {
        let cfg = BlockKitConfig {
            team_name: Some("  ".into()),
            ..Default::default()
        };
        let report = validate(&cfg);
        assert!(report.is_valid());
        assert_eq!(report.warnings.len(), 1);
    }
}

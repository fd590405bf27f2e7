//! Settings file loading.

use crate::schema::BlockKitConfig;
use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;
use tracing::{debug, info};

/// Load and parse settings from a YAML file.
///
/// Returns `Ok(Default::default())` if the file doesn't exist.
pub async fn load_config(path: &Path) -> Result<BlockKitConfig> {
    if !fs::try_exists(path).await.unwrap_or(false) {
        debug!(path = %path.display(), "Settings file does not exist; using defaults");
        return Ok(BlockKitConfig::default());
    }

    let raw = fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read settings file: {}", path.display()))?;

    let config = parse_config(&raw)
        .with_context(|| format!("Failed to parse settings YAML at: {}", path.display()))?;

    info!(path = %path.display(), "Loaded block kit settings");
    Ok(config)
}

/// Parse settings from YAML text. An empty document yields the defaults.
pub fn parse_config(raw: &str) -> Result<BlockKitConfig> {
    if raw.trim().is_empty() {
        return Ok(BlockKitConfig::default());
    }
    Ok(serde_yaml::from_str(raw)?)
}

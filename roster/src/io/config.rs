//! Roster configuration stored under `.roster/config.toml`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

/// Roster configuration (TOML).
///
/// This file is intended to be edited by humans. Missing fields default to
/// sensible values, and a missing file means all defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RosterConfig {
    /// File name of the snapshot inside `.roster/`.
    pub snapshot_file: String,

    /// Colorize status labels in listings.
    pub color: bool,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            snapshot_file: "groups.json".to_string(),
            color: true,
        }
    }
}

impl RosterConfig {
    pub fn validate(&self) -> Result<()> {
        if self.snapshot_file.trim().is_empty() {
            return Err(anyhow!("snapshot_file must not be empty"));
        }
        if self.snapshot_file.contains(['/', '\\']) {
            return Err(anyhow!("snapshot_file must be a bare file name"));
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `RosterConfig::default()`.
pub fn load_config(path: &Path) -> Result<RosterConfig> {
    if !path.exists() {
        return Ok(RosterConfig::default());
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: RosterConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}

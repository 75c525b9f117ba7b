// SPDX-License-Identifier: PMPL-1.0-or-later

//! Game configuration: timing, input limits and optional seed.

use anyhow::{anyhow, bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Starting time limit in seconds.
pub const INITIAL_TIME_SECS: u64 = 60;
/// Seconds removed from the limit after each passed round.
pub const TIME_DECREMENT_SECS: u64 = 5;
/// Floor for the time limit.
pub const MIN_TIME_SECS: u64 = 10;
/// Longest password the input routine accepts.
pub const MAX_PASSWORD_LEN: usize = 99;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub initial_time_secs: u64,
    pub time_decrement_secs: u64,
    pub min_time_secs: u64,
    pub max_password_len: usize,
    pub start_round: u32,
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            initial_time_secs: INITIAL_TIME_SECS,
            time_decrement_secs: TIME_DECREMENT_SECS,
            min_time_secs: MIN_TIME_SECS,
            max_password_len: MAX_PASSWORD_LEN,
            start_round: 1,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading game config {}", path.display()))?;
        let config: GameConfig = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::from_str(&content)
                .with_context(|| format!("parsing json game config {}", path.display()))?,
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)
                .with_context(|| format!("parsing yaml game config {}", path.display()))?,
            _ => {
                return Err(anyhow!(
                    "unsupported game config extension for {}",
                    path.display()
                ))
            }
        };
        config
            .validate()
            .with_context(|| format!("invalid game config {}", path.display()))?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_time_secs == 0 {
            bail!("min_time_secs must be at least 1");
        }
        if self.initial_time_secs < self.min_time_secs {
            bail!(
                "initial_time_secs ({}) is below min_time_secs ({})",
                self.initial_time_secs,
                self.min_time_secs
            );
        }
        if self.max_password_len == 0 {
            bail!("max_password_len must be at least 1");
        }
        if self.start_round == 0 {
            bail!("start_round must be at least 1");
        }
        Ok(())
    }

    pub fn initial_time(&self) -> Duration {
        Duration::from_secs(self.initial_time_secs)
    }

    pub fn time_decrement(&self) -> Duration {
        Duration::from_secs(self.time_decrement_secs)
    }

    pub fn min_time(&self) -> Duration {
        Duration::from_secs(self.min_time_secs)
    }
}

use std::{path::Path, time::Duration};

use serde::Deserialize;

/// Settings read from `roster.toml`. Every field is optional in the file.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RosterConfig {
    pub request_timeout_secs: u64,
    /// First list position shown on the dashboard (inclusive).
    pub dashboard_start: usize,
    /// Position where the dashboard stops (exclusive).
    pub dashboard_end: usize,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: 10,
            dashboard_start: 1,
            dashboard_end: 5,
        }
    }
}

impl RosterConfig {
    pub fn load(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        if !Path::new(path).exists() {
            tracing::info!("Config file not found at {path}, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&content)?;
        tracing::info!(?config, "Loaded roster config from {path}");
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

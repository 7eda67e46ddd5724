//! Configuration management and loading for rangeq.
//!
//! Precedence, highest first: CLI flags, the `RANGEQ_LOG` environment
//! variable, the config file, built-in defaults. This crate handles the
//! bottom three; the CLI applies its flags on top.

use anyhow::{Context, Result};
use rangeq_engine::Backend;
use rangeq_logging::{LogLevel, LoggingConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable overriding the configured log level.
pub const LOG_ENV: &str = "RANGEQ_LOG";

/// Configuration format types supported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigFormat {
    Json,
    Yaml,
}

impl Default for ConfigFormat {
    fn default() -> Self {
        Self::Yaml
    }
}

impl ConfigFormat {
    /// Detect format from extension; anything but `.json` is YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => ConfigFormat::Json,
            Some("yaml") | Some("yml") => ConfigFormat::Yaml,
            _ => ConfigFormat::default(),
        }
    }
}

/// Main rangeq configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RangeqConfig {
    /// Range-update backend used by `run`
    #[serde(default)]
    pub backend: Backend,

    /// Diagnostics written to stderr
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl RangeqConfig {
    /// Applies a `RANGEQ_LOG`-style level override, if any.
    pub fn apply_log_env(&mut self, value: Option<&str>) -> Result<()> {
        if let Some(raw) = value.filter(|v| !v.trim().is_empty()) {
            self.logging.level = raw
                .parse::<LogLevel>()
                .map_err(anyhow::Error::msg)
                .with_context(|| format!("invalid {LOG_ENV} value"))?;
        }
        Ok(())
    }
}

/// Load configuration from a file
pub fn load_config(path: impl AsRef<Path>) -> Result<RangeqConfig> {
    let path = path.as_ref();
    let contents =
        std::fs::read_to_string(path).with_context(|| format!("read config {path:?}"))?;

    match ConfigFormat::from_path(path) {
        ConfigFormat::Json => serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse JSON config {path:?}")),
        ConfigFormat::Yaml => serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse YAML config {path:?}")),
    }
}

/// Save configuration to a file
pub fn save_config(config: &RangeqConfig, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let contents = match ConfigFormat::from_path(path) {
        ConfigFormat::Json => serde_json::to_string_pretty(config)
            .context("Failed to serialize JSON config")?,
        ConfigFormat::Yaml => {
            serde_yaml::to_string(config).context("Failed to serialize YAML config")?
        }
    };

    std::fs::write(path, contents).with_context(|| format!("write config {path:?}"))?;
    Ok(())
}

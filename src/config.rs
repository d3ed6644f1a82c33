//! Tool configuration.
//!
//! Handles loading, validating, and merging `fill-resize.toml`. User values
//! are deep-merged over stock defaults, so a config file only needs the keys
//! it wants to change.
//!
//! ## Config File Location
//!
//! - `--config PATH` on the command line (the file must exist), otherwise
//! - `fill-resize.toml` in the working directory, if present, otherwise
//! - stock defaults.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [resize]
//! filter = "catmull-rom"   # nearest | triangle | catmull-rom | gaussian | lanczos3
//!
//! [output]
//! quality = 90             # JPEG/AVIF encoding quality (1-100)
//!
//! [fetch]
//! timeout_secs = 30        # Whole-request timeout for http(s) sources
//! user_agent = "fill-resize"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::imaging::{FetchError, FillOptions, FilterKind, HttpFetcher, Quality};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// File name looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "fill-resize.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Configuration loaded from `fill-resize.toml`.
///
/// All fields have defaults. Unknown keys are rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Resampling settings.
    pub resize: ResizeConfig,
    /// Encoding settings for saved results.
    pub output: OutputConfig,
    /// HTTP settings for remote sources.
    pub fetch: FetchConfig,
}

impl Config {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.output.quality == 0 || self.output.quality > 100 {
            return Err(ConfigError::Validation(
                "output.quality must be 1-100".into(),
            ));
        }
        if self.fetch.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "fetch.timeout_secs must be positive".into(),
            ));
        }
        if self.fetch.user_agent.trim().is_empty() {
            return Err(ConfigError::Validation(
                "fetch.user_agent must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// Backend options derived from this config.
    pub fn fill_options(&self) -> FillOptions {
        FillOptions {
            filter: self.resize.filter,
            quality: Quality::new(self.output.quality),
        }
    }

    /// Build the HTTP fetcher for remote sources.
    pub fn http_fetcher(&self) -> Result<HttpFetcher, FetchError> {
        HttpFetcher::new(
            Duration::from_secs(self.fetch.timeout_secs),
            &self.fetch.user_agent,
        )
    }
}

/// Resampling settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResizeConfig {
    /// Filter for the final resize. Bicubic unless overridden.
    pub filter: FilterKind,
}

/// Encoding settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Lossy encoding quality (1 = worst, 100 = best). Ignored by lossless formats.
    pub quality: u32,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            quality: Quality::default().value(),
        }
    }
}

/// HTTP settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FetchConfig {
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            user_agent: concat!("fill-resize/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the base layer user overrides are merged onto.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    toml::Value::try_from(Config::default())
        .map_err(|e| ConfigError::Validation(format!("default config must serialize: {e}")))
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Read a config file as a raw TOML value.
pub fn load_raw_config(path: &Path) -> Result<toml::Value, ConfigError> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Merge an optional overlay onto the stock defaults, then deserialize and validate.
pub fn resolve_config(overlay: Option<toml::Value>) -> Result<Config, ConfigError> {
    let base = stock_defaults_value()?;
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: Config = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load the effective config.
///
/// An `explicit` path must exist. Without one, `fallback` is used if it
/// exists and stock defaults otherwise.
pub fn load_config(explicit: Option<&Path>, fallback: &Path) -> Result<Config, ConfigError> {
    let overlay = match explicit {
        Some(path) => Some(load_raw_config(path)?),
        None if fallback.is_file() => Some(load_raw_config(fallback)?),
        None => None,
    };
    resolve_config(overlay)
}

/// Returns a fully-commented stock `fill-resize.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# fill-resize configuration
# ========================
# All keys are optional. Values shown are the defaults.
# Unknown keys are rejected.

[resize]
# Resampling filter for the final resize step.
# One of: nearest, triangle, catmull-rom (bicubic), gaussian, lanczos3
filter = "catmull-rom"

[output]
# Encoding quality for lossy formats (JPEG, AVIF), 1-100.
# PNG, TIFF, WebP and GIF are written losslessly and ignore this.
quality = 90

[fetch]
# Whole-request timeout in seconds for http:// and https:// sources.
timeout_secs = 30
# User-Agent header sent with remote requests.
# user_agent = "fill-resize/<version>"
"##
}

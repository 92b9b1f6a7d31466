//! Run configuration
//!
//! Settings for a seeding run, loadable from YAML. Every field has a default,
//! so an empty file (or no file at all) gives the stock behavior: write to
//! `output/`, overwrite colliding folders and assume FL for addresses
//! without a state.

use crate::address::DEFAULT_STATE;
use crate::error::{Error, Result};
use crate::types::LogLevel;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Collision Policy
// ============================================================================

/// What to do when two distinct parcel ids sanitize to the same folder
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum CollisionPolicy {
    /// Warn and let the later row overwrite the folder
    #[default]
    Overwrite,
    /// Warn and skip the later row
    Skip,
    /// Abort the run
    Fail,
}

// ============================================================================
// Seed Config
// ============================================================================

/// Complete run configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedConfig {
    /// Directory receiving one folder per parcel
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Exit non-zero when the run is aborted part way
    #[serde(default)]
    pub strict: bool,

    /// Handling of sanitized folder name collisions
    #[serde(default)]
    pub on_collision: CollisionPolicy,

    /// Print a progress line every N rows
    #[serde(default = "default_progress_interval")]
    pub progress_interval: usize,

    /// Number of built parcels echoed in the report
    #[serde(default = "default_sample_parcels")]
    pub sample_parcels: usize,

    /// Number of leading rows shown with their formatted address
    #[serde(default = "default_address_examples")]
    pub address_examples: usize,

    /// State used when an address carries none
    #[serde(default = "default_state")]
    pub default_state: String,

    /// Minimum log level
    #[serde(default)]
    pub log_level: LogLevel,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("output")
}

fn default_progress_interval() -> usize {
    100
}

fn default_sample_parcels() -> usize {
    3
}

fn default_address_examples() -> usize {
    5
}

fn default_state() -> String {
    DEFAULT_STATE.to_string()
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            strict: false,
            on_collision: CollisionPolicy::default(),
            progress_interval: default_progress_interval(),
            sample_parcels: default_sample_parcels(),
            address_examples: default_address_examples(),
            default_state: default_state(),
            log_level: LogLevel::default(),
        }
    }
}

impl SeedConfig {
    /// Parse and validate a YAML config
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        // An empty document deserializes as unit, not as an empty map
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a YAML config file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            Error::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_yaml_str(&content)
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<()> {
        if self.output_dir.as_os_str().is_empty() {
            return Err(Error::invalid_value("output_dir", "cannot be empty"));
        }

        if self.progress_interval == 0 {
            return Err(Error::invalid_value(
                "progress_interval",
                "must be greater than zero",
            ));
        }

        let state = self.default_state.as_bytes();
        if state.len() != 2 || !state.iter().all(u8::is_ascii_uppercase) {
            return Err(Error::invalid_value(
                "default_state",
                format!(
                    "expected a two-letter uppercase code, got '{}'",
                    self.default_state
                ),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = SeedConfig::default();
        assert_eq!(config.output_dir, PathBuf::from("output"));
        assert!(!config.strict);
        assert_eq!(config.on_collision, CollisionPolicy::Overwrite);
        assert_eq!(config.progress_interval, 100);
        assert_eq!(config.sample_parcels, 3);
        assert_eq!(config.address_examples, 5);
        assert_eq!(config.default_state, "FL");
        assert_eq!(config.log_level, LogLevel::Info);
        config.validate().unwrap();
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(SeedConfig::from_yaml_str("").unwrap(), SeedConfig::default());
        assert_eq!(
            SeedConfig::from_yaml_str("{}").unwrap(),
            SeedConfig::default()
        );
    }

    #[test]
    fn test_full_yaml() {
        let yaml = r"
output_dir: /tmp/seed
strict: true
on_collision: fail
progress_interval: 10
sample_parcels: 1
address_examples: 0
default_state: GA
log_level: DEBUG
";
        let config = SeedConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(
            config,
            SeedConfig {
                output_dir: PathBuf::from("/tmp/seed"),
                strict: true,
                on_collision: CollisionPolicy::Fail,
                progress_interval: 10,
                sample_parcels: 1,
                address_examples: 0,
                default_state: "GA".to_string(),
                log_level: LogLevel::Debug,
            }
        );
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = SeedConfig::from_yaml_str("outptu_dir: x").unwrap_err();
        assert!(matches!(err, Error::YamlParse(_)));
        assert!(err.to_string().starts_with("Failed to parse YAML"));
    }

    #[test]
    fn test_invalid_values() {
        let err = SeedConfig::from_yaml_str("progress_interval: 0").unwrap_err();
        assert!(matches!(err, Error::InvalidConfigValue { ref field, .. } if field == "progress_interval"));

        let err = SeedConfig::from_yaml_str("default_state: Florida").unwrap_err();
        assert!(matches!(err, Error::InvalidConfigValue { ref field, .. } if field == "default_state"));

        let err = SeedConfig::from_yaml_str("output_dir: ''").unwrap_err();
        assert!(matches!(err, Error::InvalidConfigValue { ref field, .. } if field == "output_dir"));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "on_collision: skip").unwrap();

        let config = SeedConfig::from_file(file.path()).unwrap();
        assert_eq!(config.on_collision, CollisionPolicy::Skip);
        assert_eq!(config.output_dir, PathBuf::from("output"));
    }

    #[test]
    fn test_from_missing_file() {
        let err = SeedConfig::from_file("/nonexistent/seed.yaml").unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
        assert!(err.to_string().contains("Failed to read config file"));
    }
}

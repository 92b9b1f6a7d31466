//! Error types for parcel-seed
//!
//! This module defines the error hierarchy for the whole crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for parcel-seed
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    // ============================================================================
    // Input Errors
    // ============================================================================
    #[error("File {} not found", path.display())]
    FileNotFound { path: PathBuf },

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    // ============================================================================
    // Output Errors
    // ============================================================================
    #[error("Failed to serialize JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Output error: {message}")]
    Output { message: String },

    #[error("Parcel ids '{existing}' and '{incoming}' both map to folder '{folder}'")]
    Collision {
        folder: String,
        existing: String,
        incoming: String,
    },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid config value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a file-not-found error
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create an output error
    pub fn output(message: impl Into<String>) -> Self {
        Self::Output {
            message: message.into(),
        }
    }
}

/// Result type alias for parcel-seed
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::config("test message");
        assert_eq!(err.to_string(), "Configuration error: test message");

        let err = Error::file_not_found("seeding.csv");
        assert_eq!(err.to_string(), "File seeding.csv not found");

        let err = Error::Collision {
            folder: "12A_34".to_string(),
            existing: "12A/34".to_string(),
            incoming: "12A 34".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Parcel ids '12A/34' and '12A 34' both map to folder '12A_34'"
        );
    }

    #[test]
    fn test_yaml_error_conversion() {
        let yaml_err = serde_yaml::from_str::<u32>("not a number").unwrap_err();
        let err: Error = yaml_err.into();
        assert!(matches!(err, Error::YamlParse(_)));
        assert!(err.to_string().starts_with("Failed to parse YAML: "));
    }

    #[test]
    fn test_result_context() {
        let result: Result<()> = Err(Error::output("inner"));
        let with_context = result.context("outer");
        assert!(with_context
            .unwrap_err()
            .to_string()
            .contains("outer: Output error: inner"));
    }

    #[test]
    fn test_io_error_with_context() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let result: std::result::Result<(), std::io::Error> = Err(io);
        let err = result
            .with_context(|| "Failed to write output/1/property_root.json".to_string())
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Failed to write output/1/property_root.json: IO error: denied"
        );
    }
}

//! Common types used throughout parcel-seed
//!
//! This module contains shared type definitions, type aliases,
//! and utility types used across multiple modules.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ============================================================================
// Type Aliases
// ============================================================================

/// Generic key-value map with string keys and values
pub type StringMap = HashMap<String, String>;

// ============================================================================
// Column Names
// ============================================================================

/// Column names read from the input CSV
pub mod columns {
    /// Parcel identifier (required)
    pub const PARCEL_ID: &str = "parcel_id";
    /// Free-text street address
    pub const ADDRESS: &str = "Address";
    /// Escaped raw HTTP request used to fetch the record
    pub const HTTP_REQUEST: &str = "http_request";
    /// County name
    pub const COUNTY: &str = "County";
    /// Identifier of the upstream request
    pub const SOURCE_IDENTIFIER: &str = "source_identifier";
}

// ============================================================================
// Row
// ============================================================================

/// One CSV record, keyed by header name.
///
/// Columns missing from a record are reported as absent, never as an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    values: StringMap,
}

impl Row {
    /// Create an empty row
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the raw value of a column
    pub fn get(&self, column: &str) -> Option<&str> {
        self.values.get(column).map(String::as_str)
    }

    /// Get the value of a column unless it is absent or blank
    pub fn non_blank(&self, column: &str) -> Option<&str> {
        self.get(column).filter(|v| !v.trim().is_empty())
    }

    /// Set a column value
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.values.insert(column.into(), value.into());
    }

    /// Number of columns present
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the row has no columns at all
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

// ============================================================================
// Log Level
// ============================================================================

/// Log level for the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

// ============================================================================
// Utilities
// ============================================================================

/// Extension trait for optional strings that should disappear when blank
pub trait OptionStringExt {
    /// Returns None if the string is empty or whitespace only
    fn none_if_blank(self) -> Option<String>;
}

impl OptionStringExt for Option<String> {
    fn none_if_blank(self) -> Option<String> {
        self.filter(|s| !s.trim().is_empty())
    }
}

impl OptionStringExt for Option<&str> {
    fn none_if_blank(self) -> Option<String> {
        self.filter(|s| !s.trim().is_empty()).map(str::to_string)
    }
}

impl OptionStringExt for String {
    fn none_if_blank(self) -> Option<String> {
        if self.trim().is_empty() {
            None
        } else {
            Some(self)
        }
    }
}

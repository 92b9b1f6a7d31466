//! # parcel-seed
//!
//! Turns rows of a property-records CSV into per-parcel JSON documents.
//!
//! For every row with a parcel id, a folder `<output_dir>/<parcel_id>/` is
//! written holding:
//!
//! - `unnormalized_address.json` - formatted address, postal code, county
//! - `property_root.json` - parcel id and source request
//! - `relationship_property_to_address.json` - property → address link
//! - a fixed-name root label file pointing at the relationship
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use parcel_seed::cli::{Reporter, Runner};
//! use parcel_seed::config::SeedConfig;
//!
//! let runner = Runner::new("seeding.csv", SeedConfig::default());
//! let mut reporter = Reporter::new(std::io::stdout());
//! let report = runner.run(&mut reporter)?;
//! assert!(report.is_complete());
//! # Ok::<(), parcel_seed::Error>(())
//! ```
//!
//! ## Architecture
//!
//! ```text
//! CSV ──► reader ──► Row ──┬─► address (postal code, street/city/state)
//!                          ├─► coerce  (blank checks, safe_int, unescape)
//!                          ▼
//!                      documents ──► output (one folder per parcel)
//!                          │
//!                          └──► cli::Reporter (progress, samples)
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Blank checks, integer normalization and request unescaping
pub mod coerce;

/// Postal code extraction and address formatting
pub mod address;

/// CSV row reader
pub mod reader;

/// Parcel document types and builder
pub mod documents;

/// Parcel folder writer
pub mod output;

/// Run configuration
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::Row;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");

//! CLI module
//!
//! Command-line interface for a seeding run.
//!
//! `parcel-seed [INPUT]` reads `INPUT` (default `seeding.csv`) and writes one
//! folder per parcel under the output directory.

mod commands;
mod reporter;
mod runner;

pub use commands::Cli;
pub use reporter::{
    AddressExample, FolderCollision, ParcelSample, Reporter, RunFailure, RunReport,
};
pub use runner::Runner;

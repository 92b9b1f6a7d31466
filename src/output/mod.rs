//! Output module
//!
//! Handles parcel folder creation and JSON file writing.
//!
//! # Overview
//!
//! Every parcel gets its own folder under the configured output directory.
//! Files are pretty-printed JSON and replaced wholesale on every run, so a
//! rerun over unchanged input leaves byte-identical files.

mod writer;

pub use writer::ParcelWriter;

#[cfg(test)]
mod tests;

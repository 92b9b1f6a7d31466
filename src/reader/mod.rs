//! Row reader module
//!
//! Parses the input CSV into an ordered list of [`Row`](crate::types::Row)s.
//!
//! # Overview
//!
//! Column names come from the header line. Records shorter than the header
//! leave their trailing columns absent, surplus cells are ignored.

mod csv_reader;

pub use csv_reader::CsvRowReader;

//! CSV implementation of the row reader

use crate::error::{Error, Result};
use crate::types::Row;
use csv::ReaderBuilder;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// CSV reader with a header row and configurable delimiter
#[derive(Debug, Clone)]
pub struct CsvRowReader {
    /// Field delimiter
    delimiter: u8,
}

impl Default for CsvRowReader {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl CsvRowReader {
    /// Create a new CSV reader with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a CSV reader with a custom delimiter
    pub fn with_delimiter(delimiter: u8) -> Self {
        Self { delimiter }
    }

    /// Read every row of a CSV file
    pub fn read_path(&self, path: impl AsRef<Path>) -> Result<Vec<Row>> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::file_not_found(path)
            } else {
                Error::Io(e)
            }
        })?;

        let rows = self.read_from(file)?;
        debug!("Read {} rows from {}", rows.len(), path.display());
        Ok(rows)
    }

    /// Read every row from any reader
    pub fn read_from<R: Read>(&self, input: R) -> Result<Vec<Row>> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .flexible(true)
            .from_reader(input);

        let headers = reader.headers()?.clone();
        let mut rows = Vec::new();

        for record in reader.records() {
            let record = record?;
            rows.push(headers.iter().zip(record.iter()).collect());
        }

        Ok(rows)
    }
}

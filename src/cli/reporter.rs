//! Run report and console output

use crate::address::{extract_postal_code, format_address_with_state};
use crate::documents::{
    render_pretty, PropertyRoot, UnnormalizedAddress, ADDRESS_FILE, PROPERTY_ROOT_FILE,
    RELATIONSHIP_FILE, ROOT_LABEL_FILE,
};
use crate::error::{Error, Result};
use crate::types::{columns, Row};
use std::io::Write;
use std::path::PathBuf;

const RULE_WIDTH: usize = 60;

// ============================================================================
// Report Types
// ============================================================================

/// A built parcel kept for manual verification
#[derive(Debug, Clone)]
pub struct ParcelSample {
    /// Parcel id as it appeared in the CSV
    pub parcel_id: String,
    pub folder: PathBuf,
    pub address: UnnormalizedAddress,
    pub property_root: PropertyRoot,
}

/// Raw vs. formatted address of one input row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressExample {
    pub parcel_id: String,
    pub original: String,
    pub formatted: Option<String>,
    pub postal_code: Option<String>,
}

impl AddressExample {
    /// Format the address of `row` without regard to its parcel id
    pub fn from_row(row: &Row, default_state: &str) -> Self {
        let original = row.get(columns::ADDRESS).unwrap_or_default();
        Self {
            parcel_id: row.get(columns::PARCEL_ID).unwrap_or_default().to_string(),
            original: original.to_string(),
            formatted: format_address_with_state(Some(original), default_state),
            postal_code: extract_postal_code(Some(original)),
        }
    }
}

/// Two parcel ids that sanitized to the same folder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderCollision {
    pub row: usize,
    pub folder: String,
    pub existing: String,
    pub incoming: String,
}

/// Error that stopped a run part way
#[derive(Debug)]
pub struct RunFailure {
    /// 1-based row being processed, if rows had been read
    pub row: Option<usize>,
    pub error: Error,
}

/// Outcome of a seeding run
#[derive(Debug, Default)]
pub struct RunReport {
    pub output_dir: PathBuf,
    /// Rows read from the input
    pub total_rows: usize,
    /// Folders written, in input order
    pub created: Vec<PathBuf>,
    /// 1-based numbers of rows skipped for an empty parcel id
    pub skipped_rows: Vec<usize>,
    pub collisions: Vec<FolderCollision>,
    pub samples: Vec<ParcelSample>,
    pub address_examples: Vec<AddressExample>,
    pub failure: Option<RunFailure>,
}

impl RunReport {
    /// Whether every row was handled
    pub fn is_complete(&self) -> bool {
        self.failure.is_none()
    }

    /// Process exit status for this outcome
    pub fn exit_code(&self, strict: bool) -> i32 {
        if strict && !self.is_complete() {
            2
        } else {
            0
        }
    }
}

// ============================================================================
// Reporter
// ============================================================================

/// Writes progress and the final summary to a console-like sink
pub struct Reporter<W: Write> {
    out: W,
}

impl<W: Write> Reporter<W> {
    /// Create a reporter writing to `out`
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consume the reporter, returning the sink
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Announce the number of rows read
    pub fn rows_found(&mut self, count: usize) -> Result<()> {
        writeln!(self.out, "Found {count} rows")?;
        Ok(())
    }

    /// Periodic progress line
    pub fn progress(&mut self, processed: usize) -> Result<()> {
        writeln!(self.out, "Processed {processed} parcels...")?;
        Ok(())
    }

    /// Print the end-of-run summary
    pub fn finish(&mut self, report: &RunReport) -> Result<()> {
        if let Some(failure) = &report.failure {
            return self.failure(report, failure);
        }

        writeln!(
            self.out,
            "\nSuccessfully created {} parcel folders!",
            report.created.len()
        )?;
        if !report.skipped_rows.is_empty() {
            writeln!(
                self.out,
                "Skipped {} rows with an empty parcel_id",
                report.skipped_rows.len()
            )?;
        }
        if !report.collisions.is_empty() {
            writeln!(
                self.out,
                "{} parcel ids collided with an earlier folder name",
                report.collisions.len()
            )?;
        }

        self.samples(report)?;
        self.address_examples(report)?;
        self.file_listing(report)
    }

    fn failure(&mut self, report: &RunReport, failure: &RunFailure) -> Result<()> {
        match failure.row {
            Some(row) => writeln!(self.out, "\nError processing CSV at row {row}: {}", failure.error)?,
            None => writeln!(self.out, "\nError processing CSV: {}", failure.error)?,
        }
        writeln!(
            self.out,
            "Run stopped after creating {} parcel folders; they were left in place.",
            report.created.len()
        )?;
        Ok(())
    }

    fn heading(&mut self, title: &str) -> Result<()> {
        let rule = "=".repeat(RULE_WIDTH);
        writeln!(self.out, "\n{rule}\n{title}\n{rule}")?;
        Ok(())
    }

    fn samples(&mut self, report: &RunReport) -> Result<()> {
        self.heading("SAMPLE DATA VERIFICATION")?;

        for (i, sample) in report.samples.iter().enumerate() {
            writeln!(
                self.out,
                "\n--- Sample {}: Parcel ID {} ---",
                i + 1,
                sample.parcel_id
            )?;
            writeln!(self.out, "Folder: {}", sample.folder.display())?;
            writeln!(self.out, "\n{ADDRESS_FILE}:")?;
            writeln!(self.out, "{}", render_pretty(&sample.address)?)?;
            writeln!(self.out, "\n{PROPERTY_ROOT_FILE}:")?;
            writeln!(self.out, "{}", render_pretty(&sample.property_root)?)?;
        }
        Ok(())
    }

    fn address_examples(&mut self, report: &RunReport) -> Result<()> {
        self.heading("ADDRESS FORMATTING EXAMPLES")?;

        for (i, example) in report.address_examples.iter().enumerate() {
            writeln!(self.out, "\n{}. Parcel ID: \"{}\"", i + 1, example.parcel_id)?;
            writeln!(self.out, "   Original Address: \"{}\"", example.original)?;
            writeln!(
                self.out,
                "   Formatted Address: {}",
                quoted_or_null(example.formatted.as_deref())
            )?;
            writeln!(
                self.out,
                "   Postal Code: {}",
                quoted_or_null(example.postal_code.as_deref())
            )?;
        }
        Ok(())
    }

    fn file_listing(&mut self, report: &RunReport) -> Result<()> {
        writeln!(
            self.out,
            "\nAll files created in individual parcel folders under '{}'",
            report.output_dir.display()
        )?;
        writeln!(self.out, "Each folder contains:")?;
        for file in [ADDRESS_FILE, PROPERTY_ROOT_FILE, RELATIONSHIP_FILE, ROOT_LABEL_FILE] {
            writeln!(self.out, "   - {file}")?;
        }
        Ok(())
    }
}

fn quoted_or_null(value: Option<&str>) -> String {
    value.map_or_else(|| "null".to_string(), |v| format!("\"{v}\""))
}

//! CLI runner - executes a seeding run

use crate::cli::reporter::{
    AddressExample, FolderCollision, ParcelSample, Reporter, RunFailure, RunReport,
};
use crate::coerce::sanitize_parcel_id;
use crate::config::{CollisionPolicy, SeedConfig};
use crate::documents::DocumentBuilder;
use crate::error::{Error, Result};
use crate::output::ParcelWriter;
use crate::reader::CsvRowReader;
use crate::types::{columns, Row};
use std::collections::HashMap;
use std::error::Error as StdError;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

/// What happened to a single row
enum RowOutcome {
    Written,
    Skipped,
}

/// Per-run mutable state
struct RunState {
    builder: DocumentBuilder,
    writer: ParcelWriter,
    /// Sanitized folder name -> raw parcel id that last wrote it
    owners: HashMap<String, String>,
}

/// CLI runner
pub struct Runner {
    input: PathBuf,
    config: SeedConfig,
}

impl Runner {
    /// Create a new runner
    pub fn new(input: impl Into<PathBuf>, config: SeedConfig) -> Self {
        Self {
            input: input.into(),
            config,
        }
    }

    /// Input CSV path
    pub fn input(&self) -> &Path {
        &self.input
    }

    /// Run configuration
    pub fn config(&self) -> &SeedConfig {
        &self.config
    }

    /// Process the whole input file.
    ///
    /// Only an invalid config or a missing input path is returned as `Err`.
    /// Failures while processing stop the run and are recorded in
    /// [`RunReport::failure`]; folders written before the failure stay on disk.
    pub fn run<W: Write>(&self, reporter: &mut Reporter<W>) -> Result<RunReport> {
        self.config.validate()?;
        if !self.input.exists() {
            return Err(Error::file_not_found(&self.input));
        }

        let mut report = RunReport {
            output_dir: self.config.output_dir.clone(),
            ..Default::default()
        };

        if let Err(failure) = self.process(&mut report, reporter) {
            match failure.row {
                Some(row) => error!(
                    "Error processing CSV at row {row}: {}",
                    error_chain(&failure.error)
                ),
                None => error!("Error processing CSV: {}", error_chain(&failure.error)),
            }
            report.failure = Some(failure);
        }

        if let Err(e) = reporter.finish(&report) {
            warn!("Failed to print run summary: {e}");
        }

        info!(
            created = report.created.len(),
            skipped = report.skipped_rows.len(),
            collisions = report.collisions.len(),
            complete = report.is_complete(),
            "Run finished"
        );
        Ok(report)
    }

    fn process<W: Write>(
        &self,
        report: &mut RunReport,
        reporter: &mut Reporter<W>,
    ) -> std::result::Result<(), RunFailure> {
        let before_rows = |error| RunFailure { row: None, error };

        let rows = CsvRowReader::new()
            .read_path(&self.input)
            .map_err(before_rows)?;
        report.total_rows = rows.len();
        reporter.rows_found(rows.len()).map_err(before_rows)?;

        report.address_examples = rows
            .iter()
            .take(self.config.address_examples)
            .map(|row| AddressExample::from_row(row, &self.config.default_state))
            .collect();

        let mut state = RunState {
            builder: DocumentBuilder::new().with_default_state(&self.config.default_state),
            writer: ParcelWriter::new(&self.config.output_dir),
            owners: HashMap::new(),
        };

        for (index, row) in rows.iter().enumerate() {
            let row_number = index + 1;
            let at_row = |error| RunFailure {
                row: Some(row_number),
                error,
            };

            let outcome = self
                .process_row(row_number, row, &mut state, report)
                .map_err(at_row)?;

            if matches!(outcome, RowOutcome::Written)
                && row_number % self.config.progress_interval == 0
            {
                reporter.progress(row_number).map_err(at_row)?;
            }
        }

        Ok(())
    }

    fn process_row(
        &self,
        row_number: usize,
        row: &Row,
        state: &mut RunState,
        report: &mut RunReport,
    ) -> Result<RowOutcome> {
        let Some(parcel_id) = row.non_blank(columns::PARCEL_ID) else {
            warn!("Row {row_number} has empty parcel_id, skipping...");
            report.skipped_rows.push(row_number);
            return Ok(RowOutcome::Skipped);
        };

        let folder_id = sanitize_parcel_id(parcel_id);

        if let Some(existing) = state.owners.get(&folder_id).filter(|id| *id != parcel_id) {
            let collision = FolderCollision {
                row: row_number,
                folder: folder_id.clone(),
                existing: existing.clone(),
                incoming: parcel_id.to_string(),
            };
            report.collisions.push(collision.clone());

            match self.config.on_collision {
                CollisionPolicy::Overwrite => warn!(
                    "Row {row_number}: parcel_id '{}' overwrites folder '{}' written for '{}'",
                    collision.incoming, collision.folder, collision.existing
                ),
                CollisionPolicy::Skip => {
                    warn!(
                        "Row {row_number}: parcel_id '{}' maps to folder '{}' already used by '{}', skipping...",
                        collision.incoming, collision.folder, collision.existing
                    );
                    return Ok(RowOutcome::Skipped);
                }
                CollisionPolicy::Fail => {
                    return Err(Error::Collision {
                        folder: collision.folder,
                        existing: collision.existing,
                        incoming: collision.incoming,
                    });
                }
            }
        }

        let documents = state.builder.build(row, &folder_id);
        let folder = state.writer.write(&documents)?;
        state.owners.insert(folder_id, parcel_id.to_string());

        if report.samples.len() < self.config.sample_parcels {
            report.samples.push(ParcelSample {
                parcel_id: parcel_id.to_string(),
                folder: folder.clone(),
                address: documents.address,
                property_root: documents.property_root,
            });
        }
        report.created.push(folder);

        Ok(RowOutcome::Written)
    }
}

/// Render an error with its full source chain
fn error_chain(error: &Error) -> String {
    let mut message = error.to_string();
    let mut source = StdError::source(error);
    while let Some(cause) = source {
        message.push_str(&format!("\n  caused by: {cause}"));
        source = cause.source();
    }
    message
}

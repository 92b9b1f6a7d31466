//! Parcel folder writer
//!
//! Writes the documents of one parcel into `<output_dir>/<folder_id>/`.

use crate::documents::ParcelDocuments;
use crate::error::{Error, Result, ResultExt};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Writes parcel folders under one output directory
#[derive(Debug, Clone)]
pub struct ParcelWriter {
    /// Root directory holding one folder per parcel
    output_dir: PathBuf,
    /// Number of files written so far
    files_written: usize,
}

impl ParcelWriter {
    /// Create a writer rooted at `output_dir`
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            files_written: 0,
        }
    }

    /// Root output directory
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Number of files written so far
    #[must_use]
    pub fn files_written(&self) -> usize {
        self.files_written
    }

    /// Folder for a sanitized parcel id
    pub fn folder_path(&self, folder_id: &str) -> PathBuf {
        self.output_dir.join(folder_id)
    }

    /// Create the parcel folder if it is missing, returning its path
    pub fn ensure_folder(&self, folder_id: &str) -> Result<PathBuf> {
        if folder_id.is_empty() {
            return Err(Error::output("Parcel folder name cannot be empty"));
        }

        let folder = self.folder_path(folder_id);
        if folder.is_dir() {
            return Ok(folder);
        }

        fs::create_dir_all(&folder)
            .with_context(|| format!("Failed to create directory {}", folder.display()))?;
        info!("Created directory: {}", folder.display());
        Ok(folder)
    }

    /// Write all four documents, overwriting files of the same name.
    ///
    /// Files are written one at a time; a failure leaves the ones already
    /// written in place.
    pub fn write(&mut self, documents: &ParcelDocuments) -> Result<PathBuf> {
        let folder = self.ensure_folder(&documents.folder_id)?;

        for (file_name, contents) in documents.render()? {
            let path = folder.join(file_name);
            fs::write(&path, contents)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            debug!("Wrote {}", path.display());
            self.files_written += 1;
        }

        Ok(folder)
    }
}

//! Download artifacts.
//!
//! The data download is a single CSV file with a fixed name. The bytes are
//! built in memory from the session's record set, so repeated downloads in
//! one session are byte-identical.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use perfski_core::RecordSet;

use crate::export::export_csv;

/// File name of the data download.
pub const CSV_FILE_NAME: &str = "performances_skieurs.csv";

/// MIME type of the data download.
pub const CSV_MIME: &str = "text/csv";

/// File name of the Markdown report.
pub const REPORT_FILE_NAME: &str = "rapport_skieurs.md";

/// An in-memory file ready to be handed to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadArtifact {
    pub file_name: &'static str,
    pub mime: &'static str,
    pub data: Vec<u8>,
}

impl DownloadArtifact {
    /// The CSV download of a record set.
    pub fn csv(records: &RecordSet) -> Result<Self> {
        Ok(Self {
            file_name: CSV_FILE_NAME,
            mime: CSV_MIME,
            data: export_csv(records)?.into_bytes(),
        })
    }

    /// A Markdown report.
    pub fn markdown(report: String) -> Self {
        Self {
            file_name: REPORT_FILE_NAME,
            mime: "text/markdown",
            data: report.into_bytes(),
        }
    }

    /// Write the artifact into `dir`, creating it when missing. An existing
    /// file of the same name is replaced.
    pub fn save(&self, dir: impl AsRef<Path>) -> Result<PathBuf> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create output directory {}", dir.display()))?;
        let path = dir.join(self.file_name);
        std::fs::write(&path, &self.data)
            .with_context(|| format!("failed to write {}", path.display()))?;
        tracing::info!(path = %path.display(), bytes = self.data.len(), "artifact saved");
        Ok(path)
    }
}

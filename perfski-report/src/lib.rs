//! perfski report - everything that leaves the session as a file.
//!
//! - CSV export/import (the data download) and versioned JSON export
//! - Download artifacts with their fixed file names
//! - Markdown session report

pub mod artifact;
pub mod export;
pub mod report;

pub use artifact::{DownloadArtifact, CSV_FILE_NAME, CSV_MIME, REPORT_FILE_NAME};
pub use export::{
    csv_headers, export_csv, export_json, import_csv, import_json, DatasetExport, SCHEMA_VERSION,
};
pub use report::MarkdownReport;

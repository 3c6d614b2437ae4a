//! Record set export - CSV and JSON, with their importers.
//!
//! CSV is the download format: header row, one row per record in
//! generation order, no index column. Floats are written with Rust's
//! shortest round-trip `Display`, so parsing the file back yields
//! bit-identical values.
//!
//! JSON carries the records together with the generator settings and the
//! dataset fingerprint. It has a `schema_version`; unknown versions are
//! rejected on load.

use anyhow::{bail, ensure, Context, Result};
use serde::{Deserialize, Serialize};

use perfski_core::rng::ALGORITHM;
use perfski_core::{DatasetHash, Field, GeneratorConfig, RecordSet, SkierRecord, NAME_HEADER};

/// Current schema version of the JSON export.
pub const SCHEMA_VERSION: u32 = 1;

/// CSV header row.
pub fn csv_headers() -> [&'static str; 4] {
    [
        NAME_HEADER,
        Field::Distance.header(),
        Field::Time.header(),
        Field::Speed.header(),
    ]
}

// ─── CSV ────────────────────────────────────────────────────────────

pub fn export_csv(records: &RecordSet) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record(csv_headers())?;
    for r in records {
        wtr.write_record([
            r.name().to_string(),
            r.distance_m().to_string(),
            r.time_s().to_string(),
            r.avg_speed_mps().to_string(),
        ])?;
    }
    let data = wtr.into_inner().context("failed to flush CSV writer")?;
    String::from_utf8(data).context("CSV output is not valid UTF-8")
}

/// Parse a CSV export back into a record set.
///
/// The header must match exactly. The speed column is checked against
/// distance / time rather than trusted.
pub fn import_csv(content: &str) -> Result<RecordSet> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(content.as_bytes());

    let headers = rdr.headers().context("failed to read CSV header")?.clone();
    let expected = csv_headers();
    ensure!(
        headers.iter().eq(expected.iter().copied()),
        "unexpected CSV header: {:?} (expected {:?})",
        headers.iter().collect::<Vec<_>>(),
        expected
    );

    let mut records = Vec::new();
    for (line, row) in rdr.records().enumerate() {
        let row = row.with_context(|| format!("malformed CSV row {}", line + 1))?;
        let record = SkierRecord::try_new(
            column(&row, 0, line)?,
            number(&row, 1, line)?,
            number(&row, 2, line)?,
        )
        .with_context(|| format!("row {}", line + 1))?;
        record
            .check_speed(number(&row, 3, line)?)
            .with_context(|| format!("row {}", line + 1))?;
        records.push(record);
    }

    RecordSet::new(records).context("invalid record set")
}

fn column(row: &csv::StringRecord, idx: usize, line: usize) -> Result<&str> {
    row.get(idx)
        .with_context(|| format!("row {} is missing column {}", line + 1, csv_headers()[idx]))
}

fn number(row: &csv::StringRecord, idx: usize, line: usize) -> Result<f64> {
    let raw = column(row, idx, line)?;
    raw.trim()
        .parse::<f64>()
        .with_context(|| format!("row {}: invalid {} '{raw}'", line + 1, csv_headers()[idx]))
}

// ─── JSON ───────────────────────────────────────────────────────────

/// Self-describing JSON export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetExport {
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,
    pub algorithm: String,
    pub generator: GeneratorConfig,
    pub fingerprint: DatasetHash,
    pub records: RecordSet,
}

fn default_schema_version() -> u32 {
    SCHEMA_VERSION
}

impl DatasetExport {
    pub fn new(generator: &GeneratorConfig, records: &RecordSet) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            algorithm: ALGORITHM.to_string(),
            generator: generator.clone(),
            fingerprint: DatasetHash::of(records),
            records: records.clone(),
        }
    }
}

pub fn export_json(export: &DatasetExport) -> Result<String> {
    serde_json::to_string_pretty(export).context("failed to serialize dataset to JSON")
}

/// Deserialize a JSON export, rejecting unknown schema versions, invalid
/// generator settings and fingerprints that do not match the records.
pub fn import_json(json: &str) -> Result<DatasetExport> {
    let export: DatasetExport =
        serde_json::from_str(json).context("failed to deserialize dataset from JSON")?;
    if export.schema_version == 0 || export.schema_version > SCHEMA_VERSION {
        bail!(
            "unsupported schema version {} (supported: 1..={})",
            export.schema_version,
            SCHEMA_VERSION
        );
    }
    export
        .generator
        .validate()
        .context("invalid generator settings in JSON export")?;
    let actual = DatasetHash::of(&export.records);
    ensure!(
        actual == export.fingerprint,
        "fingerprint mismatch: file says {}, records hash to {}",
        export.fingerprint,
        actual
    );
    Ok(export)
}

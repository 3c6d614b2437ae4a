//! Domain types - skier records and the immutable record set.
//!
//! A `SkierRecord` owns its derived average speed: it is computed once at
//! construction from distance and time and there is no way to change it
//! afterwards. A `RecordSet` is the ordered, name-unique collection for one
//! session; views over it (rankings, selections) borrow rather than mutate.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Column header for the skier name, as shown in tables and exports.
pub const NAME_HEADER: &str = "Skieur";

/// Relative tolerance used when checking an externally supplied speed
/// against the one derived from distance and time.
const SPEED_TOLERANCE: f64 = 1e-9;

/// Errors raised when building records from untrusted input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecordError {
    #[error("skier name must not be empty")]
    EmptyName,
    #[error("{field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f64 },
    #[error("distance must not be negative, got {0}")]
    NegativeDistance(f64),
    #[error("time must be positive, got {0}")]
    NonPositiveTime(f64),
    #[error("speed {given} for '{name}' does not match distance / time = {derived}")]
    SpeedMismatch {
        name: String,
        given: f64,
        derived: f64,
    },
    #[error("duplicate skier name '{0}'")]
    DuplicateName(String),
}

/// Numeric columns of a record, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    Distance,
    Time,
    Speed,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Distance, Field::Time, Field::Speed];

    /// Column header used by tables, charts and the CSV export.
    pub fn header(self) -> &'static str {
        match self {
            Field::Distance => "Distance (m)",
            Field::Time => "Temps (s)",
            Field::Speed => "Vitesse Moyenne (m/s)",
        }
    }

    pub fn value(self, record: &SkierRecord) -> f64 {
        match self {
            Field::Distance => record.distance_m,
            Field::Time => record.time_s,
            Field::Speed => record.avg_speed_mps,
        }
    }
}

/// One skier's performance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRecord")]
pub struct SkierRecord {
    name: String,
    distance_m: f64,
    time_s: f64,
    avg_speed_mps: f64,
}

/// Wire shape accepted on deserialization; the speed is optional and only
/// checked, never trusted.
#[derive(Deserialize)]
struct RawRecord {
    name: String,
    distance_m: f64,
    time_s: f64,
    #[serde(default)]
    avg_speed_mps: Option<f64>,
}

impl TryFrom<RawRecord> for SkierRecord {
    type Error = RecordError;

    fn try_from(raw: RawRecord) -> Result<Self, Self::Error> {
        let record = SkierRecord::try_new(raw.name, raw.distance_m, raw.time_s)?;
        match raw.avg_speed_mps {
            Some(given) => record.check_speed(given).map(|_| record),
            None => Ok(record),
        }
    }
}

impl SkierRecord {
    /// Build a record from values the caller already knows are valid
    /// (finite, positive time). Used by the generator.
    pub(crate) fn from_sample(name: String, distance_m: f64, time_s: f64) -> Self {
        Self {
            name,
            distance_m,
            time_s,
            avg_speed_mps: distance_m / time_s,
        }
    }

    /// Build a record from untrusted values.
    pub fn try_new(name: impl Into<String>, distance_m: f64, time_s: f64) -> Result<Self, RecordError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(RecordError::EmptyName);
        }
        if !distance_m.is_finite() {
            return Err(RecordError::NonFinite {
                field: "distance",
                value: distance_m,
            });
        }
        if !time_s.is_finite() {
            return Err(RecordError::NonFinite {
                field: "time",
                value: time_s,
            });
        }
        if distance_m < 0.0 {
            return Err(RecordError::NegativeDistance(distance_m));
        }
        if time_s <= 0.0 {
            return Err(RecordError::NonPositiveTime(time_s));
        }
        Ok(Self::from_sample(name, distance_m, time_s))
    }

    /// Verify that an externally supplied speed agrees with the derived one.
    pub fn check_speed(&self, given: f64) -> Result<(), RecordError> {
        let derived = self.avg_speed_mps;
        let scale = derived.abs().max(1.0);
        if (given - derived).abs() <= SPEED_TOLERANCE * scale {
            Ok(())
        } else {
            Err(RecordError::SpeedMismatch {
                name: self.name.clone(),
                given,
                derived,
            })
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn distance_m(&self) -> f64 {
        self.distance_m
    }

    pub fn time_s(&self) -> f64 {
        self.time_s
    }

    pub fn avg_speed_mps(&self) -> f64 {
        self.avg_speed_mps
    }
}

/// The immutable, ordered record collection of one session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<SkierRecord>", into = "Vec<SkierRecord>")]
pub struct RecordSet {
    records: Vec<SkierRecord>,
}

impl TryFrom<Vec<SkierRecord>> for RecordSet {
    type Error = RecordError;

    fn try_from(records: Vec<SkierRecord>) -> Result<Self, Self::Error> {
        RecordSet::new(records)
    }
}

impl From<RecordSet> for Vec<SkierRecord> {
    fn from(set: RecordSet) -> Self {
        set.records
    }
}

impl RecordSet {
    /// Wrap records, rejecting duplicate names.
    pub fn new(records: Vec<SkierRecord>) -> Result<Self, RecordError> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.name.as_str()) {
                return Err(RecordError::DuplicateName(record.name.clone()));
            }
        }
        Ok(Self { records })
    }

    /// Wrap records whose names are unique by construction.
    pub(crate) fn from_unique(records: Vec<SkierRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[SkierRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SkierRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Names in generation order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.records.iter().map(|r| r.name.as_str())
    }

    /// Look up a record by exact name.
    pub fn get(&self, name: &str) -> Option<&SkierRecord> {
        self.records.iter().find(|r| r.name == name)
    }

    /// Generation-order index of a name.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name == name)
    }

    /// One numeric column in generation order.
    pub fn column(&self, field: Field) -> Vec<f64> {
        self.records.iter().map(|r| field.value(r)).collect()
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a SkierRecord;
    type IntoIter = std::slice::Iter<'a, SkierRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

//! Dataset fingerprinting - a content hash of a record set.
//!
//! The hash covers, per record in order: the name bytes, a 0 separator,
//! then the little-endian IEEE-754 bytes of distance and time. Speed is
//! derived and therefore not hashed.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::RecordSet;

/// BLAKE3 hex digest of a record set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DatasetHash(pub String);

impl DatasetHash {
    pub fn of(records: &RecordSet) -> Self {
        let mut hasher = blake3::Hasher::new();
        for record in records {
            hasher.update(record.name().as_bytes());
            hasher.update(&[0]);
            hasher.update(&record.distance_m().to_le_bytes());
            hasher.update(&record.time_s().to_le_bytes());
        }
        Self(hasher.finalize().to_hex().to_string())
    }

    /// First 12 hex characters, for status lines.
    pub fn short(&self) -> &str {
        let end = self.0.len().min(12);
        &self.0[..end]
    }
}

impl fmt::Display for DatasetHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

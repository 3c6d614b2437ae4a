//! perfski core - synthetic skier performance data and its analysis.
//!
//! This crate holds the whole data pipeline, free of any display concern:
//! - Domain types (`SkierRecord` with its derived speed, `RecordSet`)
//! - Seeded ChaCha8 generation
//! - Descriptive statistics and the highlight-maximum rule
//! - Speed ranking and skier selection
//! - Session configuration (TOML) and lifecycle
//! - Dataset fingerprinting

pub mod config;
pub mod domain;
pub mod fingerprint;
pub mod generator;
pub mod labels;
pub mod ranking;
pub mod rng;
pub mod selection;
pub mod session;
pub mod stats;

pub use config::{ConfigError, ExportConfig, GeneratorConfig, SampleRange, SessionConfig};
pub use domain::{Field, RecordError, RecordSet, SkierRecord, NAME_HEADER};
pub use fingerprint::DatasetHash;
pub use generator::{generate, Generator};
pub use ranking::{rank_by_speed, RankingEntry};
pub use selection::{select, Selector, SkierDetail};
pub use session::Session;
pub use stats::{highlight_max, ColumnSummary, Describe, Statistic};

//! Session lifecycle - one immutable record set per run.
//!
//! A session is created once from a validated config. Everything derived
//! from it (statistics, ranking, details) is recomputed on demand from the
//! record set and never cached, so a view can never drift from the data.

use crate::config::{ConfigError, SessionConfig};
use crate::domain::RecordSet;
use crate::fingerprint::DatasetHash;
use crate::generator::Generator;
use crate::ranking::{rank_by_speed, RankingEntry};
use crate::selection::{select, SkierDetail};
use crate::stats::Describe;

#[derive(Debug, Clone)]
pub struct Session {
    config: SessionConfig,
    records: RecordSet,
    fingerprint: DatasetHash,
}

impl Session {
    pub fn start(config: SessionConfig) -> Result<Self, ConfigError> {
        let records = Generator::from_config(&config.generator)?.generate();
        let fingerprint = DatasetHash::of(&records);
        tracing::info!(
            seed = config.generator.seed,
            count = records.len(),
            fingerprint = fingerprint.short(),
            "session started"
        );
        Ok(Self {
            config,
            records,
            fingerprint,
        })
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn records(&self) -> &RecordSet {
        &self.records
    }

    pub fn fingerprint(&self) -> &DatasetHash {
        &self.fingerprint
    }

    pub fn seed(&self) -> u64 {
        self.config.generator.seed
    }

    pub fn describe(&self) -> Describe {
        Describe::of(&self.records)
    }

    pub fn ranking(&self) -> Vec<RankingEntry<'_>> {
        rank_by_speed(&self.records)
    }

    pub fn detail(&self, name: &str) -> Option<SkierDetail> {
        select(&self.records, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_session_has_ten_skiers() {
        let session = Session::start(SessionConfig::default()).unwrap();
        assert_eq!(session.records().len(), 10);
        assert_eq!(session.seed(), 42);
        assert_eq!(session.fingerprint(), &DatasetHash::of(session.records()));
    }

    #[test]
    fn invalid_config_fails_to_start() {
        let mut config = SessionConfig::default();
        config.generator.count = 0;
        assert!(Session::start(config).is_err());
    }

    #[test]
    fn two_sessions_same_config_same_data() {
        let a = Session::start(SessionConfig::default()).unwrap();
        let b = Session::start(SessionConfig::default()).unwrap();
        assert_eq!(a.records(), b.records());
    }
}

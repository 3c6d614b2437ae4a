//! Synthetic record generation.
//!
//! Draw order matters for reproducibility: all `count` distances are drawn
//! first, then all `count` times, from one ChaCha8 stream. Names are
//! `{prefix}{i}` with `i` starting at 1.

use rand::distributions::{Distribution, Uniform};

use crate::config::{ConfigError, GeneratorConfig, SampleRange};
use crate::domain::{RecordSet, SkierRecord};
use crate::rng::session_rng;

/// A validated generator. Construction is the only fallible step;
/// `generate` is total.
#[derive(Debug, Clone)]
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    pub fn from_config(config: &GeneratorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config: config.clone(),
        })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn generate(&self) -> RecordSet {
        let c = &self.config;
        let set = sample(c.count, c.seed, &c.name_prefix, c.distance_m, c.time_s);
        tracing::debug!(count = set.len(), seed = c.seed, "generated record set");
        set
    }
}

/// Generate `count` records with the default name prefix and ranges.
pub fn generate(count: usize, seed: u64) -> RecordSet {
    let defaults = GeneratorConfig::default();
    sample(
        count,
        seed,
        &defaults.name_prefix,
        defaults.distance_m,
        defaults.time_s,
    )
}

fn sample(
    count: usize,
    seed: u64,
    prefix: &str,
    distance_m: SampleRange,
    time_s: SampleRange,
) -> RecordSet {
    let mut rng = session_rng(seed);
    let distance_dist = Uniform::new(distance_m.min, distance_m.max);
    let time_dist = Uniform::new(time_s.min, time_s.max);

    let distances: Vec<f64> = (0..count).map(|_| distance_dist.sample(&mut rng)).collect();
    let times: Vec<f64> = (0..count).map(|_| time_dist.sample(&mut rng)).collect();

    let records = distances
        .into_iter()
        .zip(times)
        .enumerate()
        .map(|(i, (d, t))| SkierRecord::from_sample(format!("{prefix}{}", i + 1), d, t))
        .collect();

    RecordSet::from_unique(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_sequential() {
        let set = generate(10, 42);
        let names: Vec<_> = set.names().collect();
        let expected: Vec<String> = (1..=10).map(|i| format!("Skieur_{i}")).collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn values_fall_in_default_ranges() {
        let set = generate(200, 7);
        for r in &set {
            assert!((1000.0..5000.0).contains(&r.distance_m()));
            assert!((300.0..900.0).contains(&r.time_s()));
        }
    }

    #[test]
    fn same_seed_is_bit_identical() {
        let a = generate(10, 42);
        let b = generate(10, 42);
        for (x, y) in a.iter().zip(b.iter()) {
            assert_eq!(x.distance_m().to_bits(), y.distance_m().to_bits());
            assert_eq!(x.time_s().to_bits(), y.time_s().to_bits());
        }
    }

    #[test]
    fn distances_are_drawn_before_times() {
        // A longer run shares its first draws with a shorter one only for
        // distances; times start after all distances.
        let short = generate(3, 42);
        let long = generate(5, 42);
        for (a, b) in short.iter().zip(long.iter()) {
            assert_eq!(a.distance_m(), b.distance_m());
        }
        assert_ne!(short.records()[0].time_s(), long.records()[0].time_s());
    }

    #[test]
    fn zero_count_is_empty() {
        assert!(generate(0, 42).is_empty());
    }

    #[test]
    fn configured_generator_uses_prefix_and_ranges() {
        let config = GeneratorConfig {
            seed: 3,
            count: 4,
            name_prefix: "S".into(),
            distance_m: SampleRange::new(10.0, 11.0),
            time_s: SampleRange::new(1.0, 2.0),
        };
        let set = Generator::from_config(&config).unwrap().generate();
        assert_eq!(set.len(), 4);
        assert_eq!(set.records()[0].name(), "S1");
        for r in &set {
            assert!(config.distance_m.contains(r.distance_m()));
            assert!(config.time_s.contains(r.time_s()));
        }
    }

    #[test]
    fn invalid_config_rejected_at_construction() {
        let config = GeneratorConfig {
            count: 0,
            ..GeneratorConfig::default()
        };
        assert!(Generator::from_config(&config).is_err());
    }

    #[test]
    fn default_config_matches_free_function() {
        let from_config = Generator::from_config(&GeneratorConfig::default())
            .unwrap()
            .generate();
        assert_eq!(from_config, generate(10, 42));
    }
}

//! Session configuration, loaded from TOML.
//!
//! Every field has a default matching the stock dashboard (seed 42, ten
//! skiers, distances in [1000, 5000) m, times in [300, 900) s), so an empty
//! file and no file at all both yield the same session.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::rng::DEFAULT_SEED;

/// File name looked up under the user config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Half-open sampling interval `[min, max)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleRange {
    pub min: f64,
    pub max: f64,
}

impl SampleRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value < self.max
    }

    fn validate(&self, label: &str) -> Result<(), ConfigError> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(ConfigError::Invalid(format!(
                "{label} bounds must be finite (got {}..{})",
                self.min, self.max
            )));
        }
        if self.min >= self.max {
            return Err(ConfigError::Invalid(format!(
                "{label}.min must be below {label}.max (got {}..{})",
                self.min, self.max
            )));
        }
        Ok(())
    }
}

/// Generator settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    pub seed: u64,
    pub count: usize,
    pub name_prefix: String,
    pub distance_m: SampleRange,
    pub time_s: SampleRange,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            count: 10,
            name_prefix: "Skieur_".to_string(),
            distance_m: SampleRange::new(1000.0, 5000.0),
            time_s: SampleRange::new(300.0, 900.0),
        }
    }
}

impl GeneratorConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.count == 0 {
            return Err(ConfigError::Invalid("count must be at least 1".into()));
        }
        if self.name_prefix.trim().is_empty() {
            return Err(ConfigError::Invalid("name_prefix must not be empty".into()));
        }
        self.distance_m.validate("distance_m")?;
        self.time_s.validate("time_s")?;
        if self.distance_m.min < 0.0 {
            return Err(ConfigError::Invalid("distance_m.min must not be negative".into()));
        }
        if self.time_s.min <= 0.0 {
            return Err(ConfigError::Invalid("time_s.min must be positive".into()));
        }
        Ok(())
    }
}

/// Where downloads and reports are written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExportConfig {
    pub output_dir: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
        }
    }
}

/// Top-level configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionConfig {
    pub generator: GeneratorConfig,
    pub export: ExportConfig,
}

impl SessionConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: SessionConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::info!(path = %path.display(), "loaded session config");
        Ok(config)
    }

    /// `<config_dir>/perfski/config.toml`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("perfski").join(CONFIG_FILE_NAME))
    }

    /// Explicit path if given, else the default path when it exists, else
    /// built-in defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match Self::default_path() {
            Some(path) if path.is_file() => Self::load(&path),
            _ => {
                tracing::debug!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Apply command-line overrides, re-validating the result.
    pub fn with_overrides(mut self, seed: Option<u64>, count: Option<usize>) -> Result<Self, ConfigError> {
        if let Some(seed) = seed {
            self.generator.seed = seed;
        }
        if let Some(count) = count {
            self.generator.count = count;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.generator.validate()
    }
}

use crate::error::RulesError;
use crate::game::deal::{Deal, DealGenerator};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use thiserror::Error;

const DEFAULT_GAMES: usize = 1;

/// Deal batch request loaded from YAML.
///
/// ```yaml
/// games: 512
/// seed: 20251017
/// parallel: true
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct DealConfig {
    #[serde(default = "default_games")]
    pub games: usize,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub parallel: bool,
}

impl Default for DealConfig {
    fn default() -> Self {
        Self {
            games: DEFAULT_GAMES,
            seed: None,
            parallel: false,
        }
    }
}

impl DealConfig {
    /// Load and validate a configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path_buf = path.as_ref().to_path_buf();
        let file = File::open(&path_buf).map_err(|source| ConfigError::Read {
            source,
            path: path_buf.clone(),
        })?;
        let cfg: DealConfig =
            serde_yaml::from_reader(BufReader::new(file)).map_err(|source| ConfigError::Parse {
                source,
                path: path_buf.clone(),
            })?;
        cfg.validate().map_err(|source| ConfigError::Invalid {
            path: path_buf,
            source,
        })?;
        Ok(cfg)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let cfg: DealConfig = serde_yaml::from_str(yaml).map_err(|source| ConfigError::Parse {
            source,
            path: PathBuf::from("<inline>"),
        })?;
        cfg.validate().map_err(|source| ConfigError::Invalid {
            path: PathBuf::from("<inline>"),
            source,
        })?;
        Ok(cfg)
    }

    /// Validate the configuration without performing I/O.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.games == 0 {
            return Err(ValidationError::InvalidField {
                field: "games".to_string(),
                message: "number of games must be greater than zero".to_string(),
            });
        }
        Ok(())
    }

    /// A generator seeded from `seed`, or from entropy when unset.
    pub fn generator(&self) -> DealGenerator {
        match self.seed {
            Some(seed) => DealGenerator::with_seed(seed),
            None => DealGenerator::new(),
        }
    }

    pub fn generate(&self) -> Result<Vec<Deal>, RulesError> {
        let mut generator = self.generator();
        if self.parallel {
            generator.generate_parallel(self.games)
        } else {
            generator.generate(self.games)
        }
    }
}

fn default_games() -> usize {
    DEFAULT_GAMES
}

/// Errors surfaced when loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },
    #[error("failed to parse config {path:?}: {source}")]
    Parse {
        #[source]
        source: serde_yaml::Error,
        path: PathBuf,
    },
    #[error("invalid configuration in {path:?}: {source}")]
    Invalid {
        path: PathBuf,
        source: ValidationError,
    },
}

impl ConfigError {
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. }
            | ConfigError::Parse { path, .. }
            | ConfigError::Invalid { path, .. } => path.as_path(),
        }
    }
}

/// Validation failures captured with contextual metadata.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field}: {message}")]
    InvalidField { field: String, message: String },
}

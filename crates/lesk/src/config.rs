use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{LeskError, Result};
use crate::relations::RelationPairTable;

/// Configuration for the disambiguator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeskConfig {
    /// Tokens taken on each side of the target word
    pub window_radius: usize,

    /// File receiving "word not found in sentence" events
    pub guess_log: PathBuf,

    /// Gloss pairs compared for each part of speech
    pub relation_pairs: RelationPairTable,
}

impl Default for LeskConfig {
    fn default() -> Self {
        Self {
            window_radius: 3,
            guess_log: PathBuf::from("logs/guessed.txt"),
            relation_pairs: RelationPairTable::default(),
        }
    }
}

impl LeskConfig {
    /// Classic Lesk: compare definitions only
    pub fn gloss_only() -> Self {
        Self {
            relation_pairs: RelationPairTable::gloss_only(),
            ..Default::default()
        }
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&source)?;
        log::debug!(
            "Loaded config from {} (window radius {})",
            path.display(),
            config.window_radius
        );
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.guess_log.as_os_str().is_empty() {
            return Err(LeskError::invalid_config("guess_log must not be empty"));
        }

        if self.relation_pairs.is_empty() {
            log::warn!("No relation pairs configured; every sense will score 0");
        }

        Ok(())
    }
}

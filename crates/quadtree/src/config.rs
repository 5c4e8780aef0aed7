//! QuadTree configuration.

use crate::error::{QuadTreeError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Tunables fixed for the whole lifetime of one tree.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuadTreeConfig {
    /// Maximum number of points a leaf holds before it splits.
    #[serde(default = "default_capacity")]
    pub capacity: usize,
    /// Deepest level a split may create. Inserts that would go deeper fail
    /// with `DepthExceeded`.
    #[serde(default = "default_max_depth")]
    pub max_depth: u32,
}

impl QuadTreeConfig {
    /// Load configuration from a TOML file. Missing keys use defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&contents)?;
        debug!("Loaded quadtree config from {:?}: {:?}", path, config);
        Ok(config)
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(QuadTreeError::InvalidConfig(
                "capacity must be at least 1".to_string(),
            ));
        }
        if self.max_depth == 0 {
            return Err(QuadTreeError::InvalidConfig(
                "max_depth must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for QuadTreeConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
            max_depth: default_max_depth(),
        }
    }
}

fn default_capacity() -> usize {
    10
}
/// Halving a region of `2 * f64::MAX` this many times reaches a cell width
/// of about `1e-308`, so distinct finite points can always be separated.
fn default_max_depth() -> u32 {
    2048
}

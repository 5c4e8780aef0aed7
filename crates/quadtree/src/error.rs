//! QuadTree error types.

use thiserror::Error;

/// Errors that can occur while building or querying a quadtree.
#[derive(Debug, Error)]
pub enum QuadTreeError {
    #[error("Invalid coordinate: ({x}, {y})")]
    InvalidCoordinate { x: f64, y: f64 },

    #[error("Invalid query radius: {0}")]
    InvalidRadius(f64),

    #[error("Split depth limit of {0} exceeded")]
    DepthExceeded(u32),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, QuadTreeError>;

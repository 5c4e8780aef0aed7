//! Region quadtree for 2-D points.
//!
//! This crate contains:
//! - A point type carrying an arbitrary value
//! - A quadtree whose bounding region grows to admit new points
//! - Radius and rectangle queries
//! - Tree configuration loadable from TOML

mod config;
mod error;
pub mod spatial;

pub use config::QuadTreeConfig;
pub use error::{QuadTreeError, Result};
pub use spatial::{Bounds, Point, PointId, QuadTree};

/// Represents a 2D position using glam's DVec2.
pub type Position = glam::DVec2;

#[cfg(test)]
pub(crate) fn init_test_tracing() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_test_writer()
        .try_init();
}

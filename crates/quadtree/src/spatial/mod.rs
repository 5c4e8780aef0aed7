//! Spatial indexing.
//!
//! Region quadtree whose bounding rectangle grows to enclose new points.

mod bounds;
mod node;
mod point;
mod quadtree;

pub use bounds::Bounds;
pub use point::{Point, PointId};
pub use quadtree::QuadTree;

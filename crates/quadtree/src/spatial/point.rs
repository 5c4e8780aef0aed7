//! Points stored in the quadtree.

use crate::Position;

/// Handle to a point owned by a [`QuadTree`](super::QuadTree).
///
/// Handles are assigned in insertion order and stay valid for the life of
/// the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointId(pub(crate) usize);

impl PointId {
    /// Position of the point in insertion order.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// An immutable coordinate pair carrying a value.
#[derive(Debug, Clone, PartialEq)]
pub struct Point<V> {
    position: Position,
    value: V,
}

impl<V> Point<V> {
    #[inline]
    pub fn new(x: f64, y: f64, value: V) -> Self {
        Self {
            position: Position::new(x, y),
            value,
        }
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.position.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.position.y
    }

    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    #[inline]
    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn into_value(self) -> V {
        self.value
    }

    /// Euclidean distance from this point to `(x, y)`.
    #[inline]
    pub fn distance_to(&self, x: f64, y: f64) -> f64 {
        self.position.distance(Position::new(x, y))
    }
}

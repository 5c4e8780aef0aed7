//! QuadTree for spatial indexing.
//!
//! The bounding region is not fixed up front. It starts as the degenerate
//! rectangle at the origin and grows whenever a point lands outside it,
//! after which every stored point is re-filed from the flat insertion list.

use super::bounds::Bounds;
use super::node::Node;
use super::point::{Point, PointId};
use crate::config::QuadTreeConfig;
use crate::error::{QuadTreeError, Result};
use glam::DVec2;
use tracing::{debug, warn};

/// QuadTree mapping 2-D positions to values.
///
/// Points are owned by the tree in an append-only list; leaves refer to
/// them by [`PointId`]. Queries borrow from that list.
pub struct QuadTree<V> {
    /// Every point ever inserted, in insertion order.
    points: Vec<Point<V>>,
    /// Root node. Its bounds are the tree's bounds.
    root: Node,
    config: QuadTreeConfig,
}

impl<V> QuadTree<V> {
    /// Create an empty tree with the default configuration.
    pub fn new() -> Self {
        Self::build(QuadTreeConfig::default())
    }

    /// Create an empty tree with a custom configuration.
    pub fn with_config(config: QuadTreeConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: QuadTreeConfig) -> Self {
        Self {
            points: Vec::new(),
            root: Node::new(Bounds::default(), 0),
            config,
        }
    }

    /// Insert a point, growing the bounding region if needed.
    ///
    /// Fails without modifying the tree if a coordinate is not finite or
    /// if filing the point would split deeper than `max_depth`.
    pub fn insert(&mut self, point: Point<V>) -> Result<PointId> {
        let pos = point.position();
        if !pos.is_finite() {
            return Err(QuadTreeError::InvalidCoordinate { x: pos.x, y: pos.y });
        }

        let id = PointId(self.points.len());
        self.points.push(point);

        let outcome = if self.root.bounds().contains(pos) {
            self.root.insert(id, &self.points, &self.config)
        } else {
            self.grow(pos)
        };

        if let Err(err) = outcome {
            self.points.pop();
            if matches!(err, QuadTreeError::DepthExceeded(_)) {
                warn!("Rejected point at ({}, {}): {}", pos.x, pos.y, err);
            }
            return Err(err);
        }

        Ok(id)
    }

    /// Enlarge the region to admit `pos` and rebuild from the flat list.
    ///
    /// The new point is already the last entry of the list, so it is filed
    /// after every earlier point. The rebuilt root only replaces the old
    /// one once all points are in place.
    fn grow(&mut self, pos: DVec2) -> Result<()> {
        let old = self.root.bounds();
        let bounds = old.grown_to(pos);
        debug!(
            "Growing bounds {:?} -> {:?}, rebuilding {} points",
            old,
            bounds,
            self.points.len()
        );

        let mut root = Node::new(bounds, 0);
        for index in 0..self.points.len() {
            root.insert(PointId(index), &self.points, &self.config)?;
        }

        self.root = root;
        Ok(())
    }

    /// Find all points within `radius` of `(x, y)`.
    ///
    /// A negative radius matches nothing. Order follows the tree layout,
    /// not insertion order.
    pub fn query_radius(&self, x: f64, y: f64, radius: f64) -> Result<Vec<&Point<V>>> {
        let center = DVec2::new(x, y);
        if !center.is_finite() {
            return Err(QuadTreeError::InvalidCoordinate { x, y });
        }
        if radius.is_nan() {
            return Err(QuadTreeError::InvalidRadius(radius));
        }

        let mut found = Vec::new();
        if radius >= 0.0 {
            self.root.query_radius(center, radius, &self.points, &mut found);
        }
        Ok(found)
    }

    /// Find all points inside `area`, edges included.
    pub fn query_bounds(&self, area: &Bounds) -> Result<Vec<&Point<V>>> {
        for (x, y) in [(area.min_x, area.min_y), (area.max_x, area.max_y)] {
            if !x.is_finite() || !y.is_finite() {
                return Err(QuadTreeError::InvalidCoordinate { x, y });
            }
        }

        let mut found = Vec::new();
        if area.min_x <= area.max_x && area.min_y <= area.max_y {
            self.root.query_bounds(area, &self.points, &mut found);
        }
        Ok(found)
    }

    /// Get a point by handle.
    #[inline]
    pub fn get(&self, id: PointId) -> Option<&Point<V>> {
        self.points.get(id.0)
    }

    /// All points in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Point<V>> {
        self.points.iter()
    }

    /// Current bounding region. Never shrinks.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.root.bounds()
    }

    /// Depth of the deepest node; 0 while the root is still a leaf.
    pub fn depth(&self) -> u32 {
        self.root.max_depth()
    }

    #[inline]
    pub fn config(&self) -> &QuadTreeConfig {
        &self.config
    }

    /// Get the number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl<V> Default for QuadTree<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> std::fmt::Debug for QuadTree<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuadTree")
            .field("points", &self.points.len())
            .field("bounds", &self.root.bounds())
            .finish()
    }
}

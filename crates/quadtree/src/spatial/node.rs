//! Quadtree nodes.

use super::bounds::Bounds;
use super::point::{Point, PointId};
use crate::config::QuadTreeConfig;
use crate::error::{QuadTreeError, Result};
use glam::DVec2;
use tracing::trace;

/// A rectangular region of the tree.
#[derive(Debug)]
pub(crate) struct Node {
    bounds: Bounds,
    depth: u32,
    kind: NodeKind,
}

/// Either holds points directly or exactly four children, never both.
#[derive(Debug)]
pub(crate) enum NodeKind {
    Leaf(Vec<PointId>),
    Internal(Box<[Node; 4]>),
}

impl Node {
    pub(crate) fn new(bounds: Bounds, depth: u32) -> Self {
        Self {
            bounds,
            depth,
            kind: NodeKind::Leaf(Vec::new()),
        }
    }

    #[inline]
    pub(crate) fn bounds(&self) -> Bounds {
        self.bounds
    }

    #[cfg(test)]
    pub(crate) fn kind(&self) -> &NodeKind {
        &self.kind
    }

    /// Depth of the deepest node below (and including) this one.
    pub(crate) fn max_depth(&self) -> u32 {
        match &self.kind {
            NodeKind::Leaf(_) => self.depth,
            NodeKind::Internal(children) => children
                .iter()
                .map(Node::max_depth)
                .max()
                .unwrap_or(self.depth),
        }
    }

    /// Insert a point, descending to the leaf that owns its quadrant.
    ///
    /// The caller guarantees the point lies inside the tree's region. On
    /// error the subtree is left exactly as it was.
    pub(crate) fn insert<V>(
        &mut self,
        id: PointId,
        points: &[Point<V>],
        config: &QuadTreeConfig,
    ) -> Result<()> {
        let pos = points[id.0].position();
        let mut node = self;
        loop {
            let (bounds, depth) = (node.bounds, node.depth);
            if let NodeKind::Internal(_) = node.kind {
                let NodeKind::Internal(children) = &mut node.kind else {
                    unreachable!()
                };
                node = &mut children[bounds.quadrant_of(pos)];
                continue;
            }
            let kind = &mut node.kind;
            match &mut *kind {
                NodeKind::Internal(_) => unreachable!(),
                NodeKind::Leaf(ids) => {
                    ids.push(id);
                    if ids.len() <= config.capacity {
                        return Ok(());
                    }
                    if let Err(err) = check_split(bounds, depth, ids.as_slice(), points, config) {
                        ids.pop();
                        return Err(err);
                    }
                    split(kind, bounds, depth, points, config);
                    return Ok(());
                }
            }
        }
    }

    /// Collect every point within `radius` of `center`.
    pub(crate) fn query_radius<'a, V>(
        &self,
        center: DVec2,
        radius: f64,
        points: &'a [Point<V>],
        found: &mut Vec<&'a Point<V>>,
    ) {
        if !self.bounds.intersects_circle(center, radius) {
            return;
        }

        match &self.kind {
            NodeKind::Leaf(ids) => {
                for &id in ids {
                    let point = &points[id.0];
                    if point.distance_to(center.x, center.y) <= radius {
                        found.push(point);
                    }
                }
            }
            NodeKind::Internal(children) => {
                for child in children.iter() {
                    child.query_radius(center, radius, points, found);
                }
            }
        }
    }

    /// Collect every point inside `area`.
    pub(crate) fn query_bounds<'a, V>(
        &self,
        area: &Bounds,
        points: &'a [Point<V>],
        found: &mut Vec<&'a Point<V>>,
    ) {
        if !self.bounds.intersects(area) {
            return;
        }

        match &self.kind {
            NodeKind::Leaf(ids) => {
                found.extend(
                    ids.iter()
                        .map(|id| &points[id.0])
                        .filter(|point| area.contains(point.position())),
                );
            }
            NodeKind::Internal(children) => {
                for child in children.iter() {
                    child.query_bounds(area, points, found);
                }
            }
        }
    }
}

/// Turn an overflowing leaf into an internal node, splitting again
/// wherever a new child still overflows.
///
/// Only called once `check_split` has accepted the leaf, so the chain stays
/// within `max_depth`.
fn split<V>(
    mut kind: &mut NodeKind,
    mut bounds: Bounds,
    mut depth: u32,
    points: &[Point<V>],
    config: &QuadTreeConfig,
) {
    loop {
        let ids = match &mut *kind {
            NodeKind::Leaf(ids) => std::mem::take(ids),
            NodeKind::Internal(_) => return,
        };

        trace!("Splitting leaf {:?} at depth {} ({} points)", bounds, depth, ids.len());

        let quadrants = bounds.quadrants();
        let mut buckets = distribute(bounds, ids, points);
        let overflowing = buckets.iter().position(|b| b.len() > config.capacity);
        let children = std::array::from_fn(|i| Node {
            bounds: quadrants[i],
            depth: depth + 1,
            kind: NodeKind::Leaf(std::mem::take(&mut buckets[i])),
        });
        *kind = NodeKind::Internal(Box::new(children));

        let (Some(index), NodeKind::Internal(children)) = (overflowing, kind) else {
            return;
        };
        let child = &mut children[index];
        bounds = child.bounds;
        depth = child.depth;
        kind = &mut child.kind;
    }
}

/// Sort point ids into the four quadrants of `bounds`.
fn distribute<V>(bounds: Bounds, ids: Vec<PointId>, points: &[Point<V>]) -> [Vec<PointId>; 4] {
    let mut buckets: [Vec<PointId>; 4] = Default::default();
    for id in ids {
        buckets[bounds.quadrant_of(points[id.0].position())].push(id);
    }
    buckets
}

/// Walk the chain of splits an overflowing leaf would trigger and fail if
/// it reaches `max_depth`. At most one child can overflow per level, so the
/// chain is a single path.
fn check_split<V>(
    bounds: Bounds,
    depth: u32,
    ids: &[PointId],
    points: &[Point<V>],
    config: &QuadTreeConfig,
) -> Result<()> {
    let mut bounds = bounds;
    let mut depth = depth;
    let mut ids = ids.to_vec();
    loop {
        if depth >= config.max_depth {
            return Err(QuadTreeError::DepthExceeded(config.max_depth));
        }
        let mut buckets = distribute(bounds, ids, points);
        let Some(index) = buckets.iter().position(|b| b.len() > config.capacity) else {
            return Ok(());
        };
        bounds = bounds.quadrants()[index];
        depth += 1;
        ids = std::mem::take(&mut buckets[index]);
    }
}

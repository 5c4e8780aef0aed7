//! Axis-aligned rectangles.

use glam::DVec2;

/// Closed axis-aligned rectangle with `min_x <= max_x` and `min_y <= max_y`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self { min_x, min_y, max_x, max_y }
    }

    /// Check if a position lies inside the bounds, edges included.
    #[inline]
    pub fn contains(&self, pos: DVec2) -> bool {
        pos.x >= self.min_x && pos.x <= self.max_x && pos.y >= self.min_y && pos.y <= self.max_y
    }

    /// Check if two closed bounds share any point.
    #[inline]
    pub fn intersects(&self, other: &Bounds) -> bool {
        !(other.min_x > self.max_x
            || other.max_x < self.min_x
            || other.min_y > self.max_y
            || other.max_y < self.min_y)
    }

    /// Check the bounds against the square enclosing a circle.
    ///
    /// Over-approximates: a rectangle touching only the square's corner
    /// passes, a rectangle touching the circle never fails.
    #[inline]
    pub fn intersects_circle(&self, center: DVec2, radius: f64) -> bool {
        !(center.x + radius < self.min_x
            || center.x - radius > self.max_x
            || center.y + radius < self.min_y
            || center.y - radius > self.max_y)
    }

    /// Get the midpoint. Halves before adding so bounds near `f64::MAX`
    /// stay finite.
    #[inline]
    pub fn center(&self) -> DVec2 {
        DVec2::new(
            self.min_x * 0.5 + self.max_x * 0.5,
            self.min_y * 0.5 + self.max_y * 0.5,
        )
    }

    /// Index of the quadrant a position falls in.
    ///
    /// 0 = bottom-left, 1 = top-left, 2 = bottom-right, 3 = top-right.
    /// The vertical midline belongs to the left half and the horizontal
    /// midline to the top half.
    #[inline]
    pub fn quadrant_of(&self, pos: DVec2) -> usize {
        let mid = self.center();
        match (pos.x <= mid.x, pos.y < mid.y) {
            (true, true) => 0,
            (true, false) => 1,
            (false, true) => 2,
            (false, false) => 3,
        }
    }

    /// The four quadrants, numbered as in [`Bounds::quadrant_of`].
    pub fn quadrants(&self) -> [Bounds; 4] {
        let mid = self.center();
        [
            Bounds::new(self.min_x, self.min_y, mid.x, mid.y),
            Bounds::new(self.min_x, mid.y, mid.x, self.max_y),
            Bounds::new(mid.x, self.min_y, self.max_x, mid.y),
            Bounds::new(mid.x, mid.y, self.max_x, self.max_y),
        ]
    }

    /// Expand to admit `pos`. Each violated side moves outward by twice
    /// its overshoot, leaving headroom in the direction of growth. Sides
    /// saturate at `±f64::MAX` instead of overflowing to infinity.
    pub fn grown_to(&self, pos: DVec2) -> Bounds {
        let mut grown = *self;
        if pos.x < grown.min_x {
            grown.min_x = (grown.min_x - (grown.min_x - pos.x) * 2.0).max(f64::MIN);
        }
        if pos.x > grown.max_x {
            grown.max_x = (grown.max_x + (pos.x - grown.max_x) * 2.0).min(f64::MAX);
        }
        if pos.y < grown.min_y {
            grown.min_y = (grown.min_y - (grown.min_y - pos.y) * 2.0).max(f64::MIN);
        }
        if pos.y > grown.max_y {
            grown.max_y = (grown.max_y + (pos.y - grown.max_y) * 2.0).min(f64::MAX);
        }
        grown
    }

    /// Check that `other` fits entirely inside these bounds.
    #[inline]
    pub fn encloses(&self, other: &Bounds) -> bool {
        other.min_x >= self.min_x
            && other.max_x <= self.max_x
            && other.min_y >= self.min_y
            && other.max_y <= self.max_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_intersects() {
        let a = Bounds::new(0.0, 0.0, 10.0, 10.0);
        let b = Bounds::new(5.0, 5.0, 15.0, 15.0);
        let c = Bounds::new(20.0, 20.0, 30.0, 30.0);
        let edge = Bounds::new(10.0, 0.0, 12.0, 10.0);

        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(!a.intersects(&c));
        assert!(!c.intersects(&a));
        assert!(a.intersects(&edge));
    }

    #[test]
    fn test_contains_edges() {
        let b = Bounds::new(-1.0, -1.0, 1.0, 1.0);
        assert!(b.contains(DVec2::new(1.0, -1.0)));
        assert!(b.contains(DVec2::ZERO));
        assert!(!b.contains(DVec2::new(1.0001, 0.0)));

        let degenerate = Bounds::default();
        assert!(degenerate.contains(DVec2::ZERO));
        assert!(!degenerate.contains(DVec2::new(0.0, 0.1)));
    }

    #[test]
    fn test_quadrant_tie_break() {
        let b = Bounds::new(-2.0, -2.0, 2.0, 2.0);
        assert_eq!(b.quadrant_of(DVec2::new(-1.0, -1.0)), 0);
        assert_eq!(b.quadrant_of(DVec2::new(-1.0, 1.0)), 1);
        assert_eq!(b.quadrant_of(DVec2::new(1.0, -1.0)), 2);
        assert_eq!(b.quadrant_of(DVec2::new(1.0, 1.0)), 3);

        // Vertical midline goes left, horizontal midline goes top.
        assert_eq!(b.quadrant_of(DVec2::new(0.0, -1.0)), 0);
        assert_eq!(b.quadrant_of(DVec2::new(0.0, 0.0)), 1);
        assert_eq!(b.quadrant_of(DVec2::new(1.0, 0.0)), 3);
    }

    #[test]
    fn test_quadrants_partition_and_match_numbering() {
        let b = Bounds::new(0.0, 0.0, 8.0, 4.0);
        let quads = b.quadrants();

        assert_eq!(quads[0], Bounds::new(0.0, 0.0, 4.0, 2.0));
        assert_eq!(quads[1], Bounds::new(0.0, 2.0, 4.0, 4.0));
        assert_eq!(quads[2], Bounds::new(4.0, 0.0, 8.0, 2.0));
        assert_eq!(quads[3], Bounds::new(4.0, 2.0, 8.0, 4.0));

        for pos in [
            DVec2::new(1.0, 1.0),
            DVec2::new(4.0, 2.0),
            DVec2::new(7.5, 0.5),
            DVec2::new(8.0, 4.0),
            DVec2::new(0.0, 3.0),
        ] {
            assert!(quads[b.quadrant_of(pos)].contains(pos));
        }
    }

    #[test]
    fn test_intersects_circle() {
        let b = Bounds::new(0.0, 0.0, 10.0, 10.0);
        assert!(b.intersects_circle(DVec2::new(5.0, 5.0), 1.0));
        assert!(b.intersects_circle(DVec2::new(-1.0, 5.0), 1.0));
        assert!(!b.intersects_circle(DVec2::new(-1.5, 5.0), 1.0));
        // Square corner overlap passes even though the circle misses.
        assert!(b.intersects_circle(DVec2::new(-0.9, -0.9), 1.0));
        assert!(!b.intersects_circle(DVec2::new(5.0, 5.0), -20.0));
    }

    #[test]
    fn test_grown_to_doubles_overshoot() {
        let b = Bounds::new(0.0, 0.0, 2.0, 2.0);

        let grown = b.grown_to(DVec2::new(-1.0, 5.0));
        assert_eq!(grown, Bounds::new(-2.0, 0.0, 2.0, 8.0));
        assert!(grown.contains(DVec2::new(-1.0, 5.0)));
        assert!(grown.encloses(&b));

        let grown = b.grown_to(DVec2::new(3.0, -0.5));
        assert_eq!(grown, Bounds::new(0.0, -1.0, 4.0, 2.0));

        assert_eq!(b.grown_to(DVec2::new(1.0, 1.0)), b);
    }

    #[test]
    fn test_grown_to_saturates_at_max() {
        let b = Bounds::new(-1.0, -1.0, 1.0, 1.0);

        let grown = b.grown_to(DVec2::new(1e308, -1e308));
        assert_eq!(grown, Bounds::new(-1.0, f64::MIN, f64::MAX, 1.0));
        assert!(grown.contains(DVec2::new(1e308, -1e308)));

        let grown = grown.grown_to(DVec2::new(f64::MIN, f64::MAX));
        assert_eq!(grown, Bounds::new(f64::MIN, f64::MIN, f64::MAX, f64::MAX));
    }

    #[test]
    fn test_center_of_huge_bounds_is_finite() {
        let full = Bounds::new(f64::MIN, f64::MIN, f64::MAX, f64::MAX);
        assert_eq!(full.center(), DVec2::ZERO);

        let right = Bounds::new(f64::MAX * 0.75, 0.0, f64::MAX, 0.0);
        let mid = right.center();
        assert!(mid.is_finite());
        assert!(mid.x > right.min_x && mid.x < right.max_x);
        assert_eq!(right.quadrant_of(DVec2::new(f64::MAX, 0.0)), 3);
        assert_eq!(right.quadrant_of(DVec2::new(right.min_x, 0.0)), 1);
    }
}

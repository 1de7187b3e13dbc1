//! Axis-aligned bounding boxes.

use serde::{Deserialize, Serialize};

/// A projected or geographic bounding box.
///
/// Units are degrees for geographic coordinates and the projection's
/// native unit (usually meters) for projected ones.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingBox {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Whether this box and `other` overlap with positive area.
    /// Boxes that only touch along an edge do not count.
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        self.min_x < other.max_x
            && self.max_x > other.min_x
            && self.min_y < other.max_y
            && self.max_y > other.min_y
    }

    /// Whether a point lies inside the box, edges inclusive.
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intersects_overlap_and_disjoint() {
        let conus = BoundingBox::new(-1_950_510.6, -832_821.2, 3_250_897.4, 4_368_587.2);
        let overlapping = BoundingBox::new(2_000_000.0, 4_000_000.0, 4_000_000.0, 6_000_000.0);
        let disjoint = BoundingBox::new(4_000_000.0, 5_000_000.0, 5_000_000.0, 6_000_000.0);

        assert!(conus.intersects(&overlapping));
        assert!(overlapping.intersects(&conus), "intersection is symmetric");
        assert!(!conus.intersects(&disjoint));
    }

    #[test]
    fn test_intersects_edge_touch_is_not_overlap() {
        let a = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
        let b = BoundingBox::new(10.0, 0.0, 20.0, 10.0);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_contains_point_edges_inclusive() {
        let bbox = BoundingBox::new(-180.0, -90.0, 180.0, 90.0);
        assert!(bbox.contains_point(-95.0, 40.0));
        assert!(bbox.contains_point(-180.0, 90.0));
        assert!(!bbox.contains_point(-180.1, 40.0));
        assert!(!bbox.contains_point(0.0, 90.5));
    }
}

//! Point and segment proximity predicates.

use kurbo::Point;

/// Half-width of the square region around a vertex that counts as grabbing it,
/// in canvas pixels.
pub const VERTEX_TOLERANCE: f64 = 5.0;

/// Check if a point is close enough to a target vertex to grab it.
///
/// Uses a square region (`VERTEX_TOLERANCE` on each axis) rather than a
/// circle, so the corners of the region are slightly more forgiving than its
/// edges.
pub fn near_point(p: Point, target: Point) -> bool {
    (p.x - target.x).abs() < VERTEX_TOLERANCE && (p.y - target.y).abs() < VERTEX_TOLERANCE
}

/// Check if a point lies on the segment from `start` to `end`, within
/// `max_offset` pixels.
///
/// Compares the straight-line length against the sum of distances from the
/// point to both endpoints; the sum only exceeds the length when the point is
/// off the segment, and by how much is the offset being tested. Callers pick
/// `max_offset` for the stroke density they hit-test against.
pub fn on_segment(start: Point, end: Point, p: Point, max_offset: f64) -> bool {
    let offset = start.distance(end) - (start.distance(p) + end.distance(p));
    offset.abs() < max_offset
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_near_point_within_box() {
        let target = Point::new(10.0, 10.0);
        assert!(near_point(Point::new(10.0, 10.0), target));
        assert!(near_point(Point::new(14.0, 6.0), target));
        assert!(near_point(Point::new(6.0, 14.0), target));
    }

    #[test]
    fn test_near_point_boundary_is_exclusive() {
        let target = Point::new(10.0, 10.0);
        assert!(!near_point(Point::new(15.0, 10.0), target));
        assert!(!near_point(Point::new(10.0, 5.0), target));
    }

    #[test]
    fn test_near_point_one_axis_is_not_enough() {
        let target = Point::new(10.0, 10.0);
        assert!(!near_point(Point::new(10.0, 40.0), target));
        assert!(!near_point(Point::new(40.0, 10.0), target));
    }

    #[test]
    fn test_on_segment_interior_point() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(10.0, 10.0);
        assert!(on_segment(a, b, Point::new(5.0, 5.0), 1.0));
    }

    #[test]
    fn test_on_segment_endpoints_count() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(10.0, 0.0);
        assert!(on_segment(a, b, a, 1.0));
        assert!(on_segment(a, b, b, 1.0));
    }

    #[test]
    fn test_on_segment_far_point_misses() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(10.0, 10.0);
        // Offset for (5, 9) is about 1.25 px, past a 1 px tolerance.
        assert!(!on_segment(a, b, Point::new(5.0, 9.0), 1.0));
        assert!(!on_segment(a, b, Point::new(20.0, 0.0), 1.0));
    }

    #[test]
    fn test_on_segment_tolerance_widens_the_band() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(10.0, 10.0);
        let p = Point::new(5.0, 9.0);
        assert!(!on_segment(a, b, p, 1.0));
        assert!(on_segment(a, b, p, 2.0));
    }

    #[test]
    fn test_on_segment_beyond_endpoint_misses() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(10.0, 0.0);
        assert!(!on_segment(a, b, Point::new(13.0, 0.0), 1.0));
    }
}

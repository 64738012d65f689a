//! Collision primitives
//!
//! Two tests cover everything the game needs: circle-circle for
//! projectile/asteroid hits, and circle-triangle for the ship hull
//! against an asteroid's shrinking hitbox.

use glam::Vec2;

/// Segments shorter than this are treated as degenerate
const DEGENERATE_EDGE_EPS: f32 = 1e-4;

/// Closest point to `p` on the segment `a..b`
///
/// Scalar projection clamped to the segment. Returns `None` for a
/// degenerate (near zero-length) segment rather than dividing by zero.
pub fn closest_point_on_segment(a: Vec2, b: Vec2, p: Vec2) -> Option<Vec2> {
    let edge = b - a;
    let len_sq = edge.length_squared();
    if len_sq < DEGENERATE_EDGE_EPS {
        return None;
    }
    let t = ((p - a).dot(edge) / len_sq).clamp(0.0, 1.0);
    Some(a + edge * t)
}

/// True iff two circles touch or overlap
pub fn circle_circle(p1: Vec2, r1: f32, p2: Vec2, r2: f32) -> bool {
    p1.distance(p2) <= r1 + r2
}

/// True iff a circle touches or overlaps a triangle's boundary
///
/// Checks the circle center against the closest point on each of the
/// three edges. Inclusive: a zero-radius circle centered exactly on a
/// vertex collides. A fully degenerate triangle (all edges near zero
/// length) never collides.
pub fn circle_triangle(center: Vec2, radius: f32, triangle: &[Vec2; 3]) -> bool {
    for i in 0..3 {
        let a = triangle[i];
        let b = triangle[(i + 1) % 3];
        if let Some(closest) = closest_point_on_segment(a, b, center) {
            if closest.distance(center) <= radius {
                return true;
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn tri() -> [Vec2; 3] {
        [
            Vec2::new(30.0, 0.0),
            Vec2::new(-10.0, 10.0),
            Vec2::new(-10.0, -10.0),
        ]
    }

    #[test]
    fn touching_circles_collide() {
        // Centers exactly radius-sum apart
        assert!(circle_circle(Vec2::ZERO, 3.0, Vec2::new(53.0, 0.0), 50.0));
    }

    #[test]
    fn separated_circles_miss() {
        assert!(!circle_circle(Vec2::ZERO, 3.0, Vec2::new(54.0, 0.0), 50.0));
    }

    #[test]
    fn zero_radius_circle_at_vertex_collides() {
        assert!(circle_triangle(Vec2::new(30.0, 0.0), 0.0, &tri()));
    }

    #[test]
    fn circle_near_edge_collides() {
        // Just above the top edge midpoint
        assert!(circle_triangle(Vec2::new(10.0, 10.0), 6.0, &tri()));
    }

    #[test]
    fn far_circle_misses() {
        assert!(!circle_triangle(Vec2::new(500.0, 500.0), 10.0, &tri()));
    }

    #[test]
    fn degenerate_triangle_never_collides() {
        let point = Vec2::new(5.0, 5.0);
        let degenerate = [point, point, point];
        assert!(!circle_triangle(point, 100.0, &degenerate));
    }

    #[test]
    fn degenerate_segment_is_none() {
        let p = Vec2::new(1.0, 1.0);
        assert!(closest_point_on_segment(p, p, Vec2::ZERO).is_none());
    }

    #[test]
    fn projection_clamps_to_endpoints() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(10.0, 0.0);
        let closest = closest_point_on_segment(a, b, Vec2::new(-5.0, 3.0)).unwrap();
        assert_eq!(closest, a);
        let closest = closest_point_on_segment(a, b, Vec2::new(15.0, -3.0)).unwrap();
        assert_eq!(closest, b);
    }

    proptest! {
        #[test]
        fn circle_circle_is_symmetric(
            x1 in -500f32..500.0, y1 in -500f32..500.0,
            x2 in -500f32..500.0, y2 in -500f32..500.0,
            r1 in 0f32..100.0, r2 in 0f32..100.0,
        ) {
            let a = Vec2::new(x1, y1);
            let b = Vec2::new(x2, y2);
            prop_assert_eq!(circle_circle(a, r1, b, r2), circle_circle(b, r2, a, r1));
        }

        #[test]
        fn closest_point_lies_between_endpoints(
            ax in -100f32..100.0, ay in -100f32..100.0,
            bx in -100f32..100.0, by in -100f32..100.0,
            px in -200f32..200.0, py in -200f32..200.0,
        ) {
            let a = Vec2::new(ax, ay);
            let b = Vec2::new(bx, by);
            let p = Vec2::new(px, py);
            if let Some(c) = closest_point_on_segment(a, b, p) {
                let slack = 1e-3;
                prop_assert!(c.x >= a.x.min(b.x) - slack && c.x <= a.x.max(b.x) + slack);
                prop_assert!(c.y >= a.y.min(b.y) - slack && c.y <= a.y.max(b.y) + slack);
            }
        }
    }
}

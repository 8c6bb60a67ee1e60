//! Test a circle against a wall segment.
use crate::*;

/// Intersect `circle` with `segment`, returning a pair of contact points.
///
/// The quadratic is solved against the infinite line through the segment, then each root is checked against the
/// finite segment:
///
/// - If neither root is on the segment there is no collision.
/// - If both are, both are returned.  A tangent line yields the same point twice.
/// - If exactly one is, the circle is touching one end of the wall.  When the circle center projects onto the wall
///   (it has not moved past the nearest endpoint) both roots are returned.  Otherwise the pair collapses to
///   `(endpoint, endpoint)`, a point contact at the corner.
///
/// The midpoint of the returned pair is the point the circle should be pushed away from.
pub fn circle_segment(circle: &Circle, segment: &Segment) -> Option<(V2, V2)> {
    let center = *circle.get_center();
    let r = circle.get_radius();

    // Translate so that the circle is at the origin, then write the line as `a*x + b*y = c`.
    let s = segment.get_start() - center;
    let e = segment.get_end() - center;
    let a = s.y - e.y;
    let b = e.x - s.x;
    let c = s.y * (e.x - s.x) - s.x * (e.y - s.y);

    let denom = a * a + b * b;
    if denom == 0.0 {
        // Zero-length segment; there is no line to intersect.
        return None;
    }

    let discriminant = r * r * denom - c * c;
    if discriminant < 0.0 {
        return None;
    }

    let d = discriminant.sqrt();
    let p1 = V2::new((a * c + b * d) / denom, (b * c - a * d) / denom) + center;
    let p2 = V2::new((a * c - b * d) / denom, (b * c + a * d) / denom) + center;

    match (segment.contains_point(&p1), segment.contains_point(&p2)) {
        (false, false) => None,
        (true, true) => Some((p1, p2)),
        _ => {
            let (mut near, mut far) = (segment.get_start(), segment.get_end());
            if center.distance(&near) > center.distance(&far) {
                std::mem::swap(&mut near, &mut far);
            }

            if (center - near).dot(&(far - near)) >= 0.0 {
                Some((p1, p2))
            } else {
                Some((near, near))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::*;
    use proptest::prelude::*;

    fn circle(x: f64, y: f64, r: f64) -> Circle {
        Circle::new(V2::new(x, y), r).expect("Should work")
    }

    #[test]
    fn test_straddling() {
        let wall = Segment::new(V2::new(0.0, 0.0), V2::new(100.0, 0.0));
        let (p1, p2) = circle_segment(&circle(50.0, 15.0, 20.0), &wall).expect("Should collide");
        let (lo, hi) = if p1.x < p2.x { (p1, p2) } else { (p2, p1) };
        let half_chord = (400.0f64 - 225.0).sqrt();
        assert_abs_diff_eq!(lo.x, 50.0 - half_chord, epsilon = 1e-9);
        assert_abs_diff_eq!(hi.x, 50.0 + half_chord, epsilon = 1e-9);
        assert_abs_diff_eq!(lo.y, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(hi.y, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_far_away() {
        let wall = Segment::new(V2::new(0.0, 0.0), V2::new(100.0, 0.0));
        assert!(circle_segment(&circle(50.0, 25.0, 20.0), &wall).is_none());
    }

    #[test]
    fn test_beside_the_end_of_the_line() {
        // The supporting line passes through the circle but the segment stops short of it.
        let wall = Segment::new(V2::new(0.0, 0.0), V2::new(10.0, 0.0));
        assert!(circle_segment(&circle(50.0, 0.0, 20.0), &wall).is_none());
    }

    #[test]
    fn test_tangent() {
        let wall = Segment::new(V2::new(0.0, 0.0), V2::new(100.0, 0.0));
        let (p1, p2) = circle_segment(&circle(50.0, 20.0, 20.0), &wall).expect("Should touch");
        assert_abs_diff_eq!(p1.x, 50.0, epsilon = 1e-9);
        assert_abs_diff_eq!(p2.x, 50.0, epsilon = 1e-9);
    }

    #[test]
    fn test_corner_collapses_to_endpoint() {
        // The circle is past the end of the wall, overlapping only its tip.
        let wall = Segment::new(V2::new(0.0, 0.0), V2::new(100.0, 0.0));
        let got = circle_segment(&circle(110.0, 5.0, 20.0), &wall).expect("Should collide");
        assert_eq!(got, (V2::new(100.0, 0.0), V2::new(100.0, 0.0)));
    }

    #[test]
    fn test_one_root_but_not_past_the_end() {
        // The center projects onto the wall, but one root lands beyond the end.
        let wall = Segment::new(V2::new(0.0, 0.0), V2::new(100.0, 0.0));
        let (p1, p2) = circle_segment(&circle(95.0, 5.0, 20.0), &wall).expect("Should collide");
        assert!(wall.contains_point(&p1) != wall.contains_point(&p2));
        assert_abs_diff_eq!(p1.distance(&V2::new(95.0, 5.0)), 20.0, epsilon = 1e-9);
        assert_abs_diff_eq!(p2.distance(&V2::new(95.0, 5.0)), 20.0, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_length_segment() {
        let wall = Segment::new(V2::new(1.0, 1.0), V2::new(1.0, 1.0));
        assert!(circle_segment(&circle(1.0, 1.0, 20.0), &wall).is_none());
    }

    proptest! {
        // Put a circle of random size somewhere along a random wall, at less than its radius from the wall.  Both
        // points must be on the circle and on the wall.
        #[test]
        fn test_straddling_points_are_on_both(
            x in -1000.0..1000.0f64,
            y in -1000.0..1000.0f64,
            wall_ang in 0.0..360.0f64,
            wall_len in 200.0..400.0f64,
            along_percent in 0.4..0.6f64,
            radius in 5.0..50.0f64,
            offset_percent in -0.9..0.9f64,
        ) {
            let start = V2::new(x, y);
            let dir = V2::from_angle_degrees(wall_ang);
            let wall = Segment::new(start, start + dir * wall_len);
            let normal = V2::new(-dir.y, dir.x);
            let center = start + dir * (wall_len * along_percent) + normal * (radius * offset_percent);

            let got = circle_segment(&circle(center.x, center.y, radius), &wall);
            prop_assert!(got.is_some());
            let (p1, p2) = got.unwrap();
            for p in [p1, p2] {
                prop_assert!((p.distance(&center) - radius).abs() < 1e-6, "{} {}", p, p.distance(&center));
                prop_assert!(wall.get_bounding_box().distance_to_point(&p) < 1e-6);
                prop_assert!(wall.contains_point(&p), "{} not on {:?}", p, wall);
            }
        }

        // A circle whose center is more than its radius away from every point of the wall never collides.
        #[test]
        fn test_outside_never_collides(
            x in -1000.0..1000.0f64,
            y in -1000.0..1000.0f64,
            wall_ang in 0.0..360.0f64,
            wall_len in 1.0..400.0f64,
            along_percent in -1.0..2.0f64,
            radius in 1.0..50.0f64,
            gap in 0.01..100.0f64,
            side in prop_oneof![Just(1.0f64), Just(-1.0f64)],
        ) {
            let start = V2::new(x, y);
            let dir = V2::from_angle_degrees(wall_ang);
            let end = start + dir * wall_len;
            let wall = Segment::new(start, end);
            let normal = V2::new(-dir.y, dir.x) * side;

            let along = wall_len * along_percent;
            let nearest = start + dir * along.clamp(0.0, wall_len);
            let base = start + dir * along;
            // Push out along the normal until the nearest wall point is radius + gap away.
            let along_gap = (base - nearest).length();
            let needed = (radius + gap).powi(2) - along_gap.powi(2);
            let center = if needed > 0.0 {
                base + normal * needed.sqrt()
            } else {
                base
            };
            prop_assume!(center.distance(&nearest) > radius + gap * 0.5);

            prop_assert!(circle_segment(&circle(center.x, center.y, radius), &wall).is_none());
        }
    }
}

//! 2D arc angle utilities.
//!
//! Angles are measured counter-clockwise from the positive x-axis, as
//! returned by `atan2`. A positive sweep is a counter-clockwise arc.
use std::f64::consts::{FRAC_PI_2, TAU};

use super::vector_2d::rotate;
use super::{Point2, Vector2};

/// Angle of `point` as seen from `center`, in `(-π, π]`.
#[must_use]
pub fn angle_of(center: &Point2, point: &Point2) -> f64 {
    (point.y - center.y).atan2(point.x - center.x)
}

/// Point on the circle around `center` at the given angle.
#[must_use]
pub fn point_at_angle(center: &Point2, radius: f64, angle: f64) -> Point2 {
    let (sin, cos) = angle.sin_cos();
    Point2::new(center.x + radius * cos, center.y + radius * sin)
}

/// Rotates `point` around `center` by `angle` radians.
#[must_use]
pub fn rotate_about(center: &Point2, point: &Point2, angle: f64) -> Point2 {
    *center + rotate(&(*point - *center), angle)
}

/// Signed sweep from `start_angle` to `end_angle` travelling in the given sense.
///
/// Counter-clockwise sweeps land in `[0, 2π)`, clockwise sweeps in `(-2π, 0]`.
/// A full circle has coincident endpoints and therefore reports zero.
#[must_use]
pub fn signed_sweep(start_angle: f64, end_angle: f64, counter_clockwise: bool) -> f64 {
    let mut sweep = (end_angle - start_angle) % TAU;
    if counter_clockwise {
        if sweep < 0.0 {
            sweep += TAU;
        }
    } else if sweep > 0.0 {
        sweep -= TAU;
    }
    sweep
}

/// Unit direction of travel on a circle at `angle`.
#[must_use]
pub fn tangent_at(angle: f64, counter_clockwise: bool) -> Vector2 {
    let radial = Vector2::new(angle.cos(), angle.sin());
    rotate(
        &radial,
        if counter_clockwise {
            FRAC_PI_2
        } else {
            -FRAC_PI_2
        },
    )
}

/// Computes the number of line segments needed to approximate an arc
/// within the given tolerance.
#[must_use]
pub fn arc_subdivision_count(radius: f64, abs_sweep: f64, tolerance: f64) -> u32 {
    if radius < 1e-12 || abs_sweep < 1e-12 || tolerance <= 0.0 {
        return 1;
    }
    // From the sagitta formula: sagitta = r * (1 - cos(θ/2))
    let max_angle = if tolerance >= radius {
        std::f64::consts::PI
    } else {
        2.0 * (1.0 - tolerance / radius).acos()
    };
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let n = (abs_sweep / max_angle).ceil() as u32;
    n.max(1)
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use approx::assert_abs_diff_eq;

    use super::*;

    const TOL: f64 = 1e-10;

    #[test]
    fn angle_of_cardinal_points() {
        let c = Point2::new(1.0, 1.0);
        assert!(angle_of(&c, &Point2::new(2.0, 1.0)).abs() < TOL);
        assert!((angle_of(&c, &Point2::new(1.0, 2.0)) - FRAC_PI_2).abs() < TOL);
        assert!((angle_of(&c, &Point2::new(0.0, 1.0)) - PI).abs() < TOL);
        assert!((angle_of(&c, &Point2::new(1.0, 0.0)) + FRAC_PI_2).abs() < TOL);
    }

    #[test]
    fn point_at_angle_lies_on_circle() {
        let c = Point2::new(-2.0, 3.0);
        let p = point_at_angle(&c, 4.0, 1.1);
        assert_abs_diff_eq!((p - c).norm(), 4.0, epsilon = TOL);
        assert!((angle_of(&c, &p) - 1.1).abs() < TOL);
    }

    #[test]
    fn rotate_about_quarter_turn() {
        let p = rotate_about(&Point2::new(10.0, -5.0), &Point2::new(10.0, 0.0), -FRAC_PI_2);
        assert_abs_diff_eq!(p, Point2::new(15.0, -5.0), epsilon = TOL);
    }

    #[test]
    fn sweep_quarter_both_senses() {
        // From 0 to π/2: +π/2 counter-clockwise, -3π/2 clockwise.
        assert!((signed_sweep(0.0, FRAC_PI_2, true) - FRAC_PI_2).abs() < TOL);
        assert!((signed_sweep(0.0, FRAC_PI_2, false) + 3.0 * FRAC_PI_2).abs() < TOL);
    }

    #[test]
    fn sweep_across_branch_cut() {
        // From 3π/4 to -3π/4 counter-clockwise crosses ±π.
        let sweep = signed_sweep(3.0 * PI / 4.0, -3.0 * PI / 4.0, true);
        assert!((sweep - FRAC_PI_2).abs() < TOL, "sweep={sweep}");
        let sweep = signed_sweep(-3.0 * PI / 4.0, 3.0 * PI / 4.0, false);
        assert!((sweep + FRAC_PI_2).abs() < TOL, "sweep={sweep}");
    }

    #[test]
    fn tangent_is_perpendicular_to_radius() {
        for k in 0..8 {
            let angle = f64::from(k) * PI / 4.0;
            let radial = Vector2::new(angle.cos(), angle.sin());
            for ccw in [true, false] {
                let t = tangent_at(angle, ccw);
                assert_abs_diff_eq!(t.dot(&radial), 0.0, epsilon = TOL);
                assert_abs_diff_eq!(t.norm(), 1.0, epsilon = TOL);
            }
        }
        // At angle 0 a counter-clockwise traveller heads up.
        assert_abs_diff_eq!(tangent_at(0.0, true), Vector2::new(0.0, 1.0), epsilon = TOL);
    }

    #[test]
    fn subdivision_count_grows_with_sweep() {
        let quarter = arc_subdivision_count(10.0, FRAC_PI_2, 0.01);
        let full = arc_subdivision_count(10.0, 2.0 * PI, 0.01);
        assert!(quarter >= 1);
        assert!(full > quarter);
    }

    #[test]
    fn subdivision_count_degenerate_inputs() {
        assert_eq!(arc_subdivision_count(0.0, PI, 0.01), 1);
        assert_eq!(arc_subdivision_count(1.0, 0.0, 0.01), 1);
        assert_eq!(arc_subdivision_count(1.0, PI, 0.0), 1);
        // Tolerance larger than the radius: at most a half turn per segment.
        assert_eq!(arc_subdivision_count(1.0, 2.0 * PI, 5.0), 2);
    }
}

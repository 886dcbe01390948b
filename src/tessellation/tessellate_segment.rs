use crate::error::Result;
use crate::geometry::segment::PathSegment;
use crate::math::arc_2d::{arc_subdivision_count, point_at_angle};
use crate::math::Point2;

use super::{Polyline, TessellationParams};

/// Tessellates a single path segment into a polyline.
pub struct TessellateSegment {
    segment: PathSegment,
    params: TessellationParams,
}

impl TessellateSegment {
    /// Creates a new `TessellateSegment` operation.
    #[must_use]
    pub fn new(segment: PathSegment, params: TessellationParams) -> Self {
        Self { segment, params }
    }

    /// Executes the tessellation. The polyline starts at the segment's start
    /// point and ends exactly at its end point.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters are invalid.
    pub fn execute(&self) -> Result<Polyline> {
        self.params.validate()?;
        let mut points = vec![self.segment.start()];
        self.append_to(&mut points);
        Ok(Polyline { points })
    }

    /// Pushes every point after the start point onto `points`.
    pub(super) fn append_to(&self, points: &mut Vec<Point2>) {
        match &self.segment {
            PathSegment::Straight(straight) => points.push(straight.end),
            PathSegment::Arc(arc) => {
                let radius = arc.radius();
                let start_angle = arc.start_angle();
                let sweep = arc.sweep();
                let n = arc_subdivision_count(radius, sweep.abs(), self.params.tolerance)
                    .clamp(self.params.min_segments, self.params.max_segments);
                for j in 1..n {
                    let t = f64::from(j) / f64::from(n);
                    points.push(point_at_angle(&arc.center, radius, start_angle + sweep * t));
                }
                points.push(arc.end);
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::geometry::segment::{ArcSegment, StraightSegment};

    #[test]
    fn straight_gives_two_points() {
        let segment =
            StraightSegment::new(Point2::new(0.0, 0.0), Point2::new(3.0, 4.0)).into();
        let polyline = TessellateSegment::new(segment, TessellationParams::default())
            .execute()
            .unwrap();
        assert_eq!(
            polyline.points,
            vec![Point2::new(0.0, 0.0), Point2::new(3.0, 4.0)]
        );
    }

    #[test]
    fn arc_points_lie_on_circle_and_follow_direction() {
        let arc = ArcSegment::new(
            Point2::new(10.0, 0.0),
            Point2::new(15.0, -5.0),
            Point2::new(10.0, -5.0),
            false,
        );
        let polyline = TessellateSegment::new(arc.into(), TessellationParams::default())
            .execute()
            .unwrap();

        assert!(polyline.points.len() > 4);
        assert_eq!(polyline.points.first(), Some(&arc.start));
        assert_eq!(polyline.points.last(), Some(&arc.end));
        for p in &polyline.points {
            assert_abs_diff_eq!((*p - arc.center).norm(), 5.0, epsilon = 1e-9);
            // A clockwise quarter from the top to the right stays in that quadrant.
            assert!(p.x >= 10.0 - 1e-9 && p.y >= -5.0 - 1e-9);
        }
    }

    #[test]
    fn full_circle_is_not_collapsed() {
        let start = Point2::new(5.0, 0.0);
        let arc = ArcSegment::new(start, start, Point2::origin(), false);
        let polyline = TessellateSegment::new(arc.into(), TessellationParams::default())
            .execute()
            .unwrap();

        assert!(polyline.points.len() > 8);
        // Clockwise from angle 0 the first step goes below the x-axis.
        assert!(polyline.points[1].y < 0.0);
        assert!(polyline.points.iter().any(|p| p.x < -4.9));
    }

    #[test]
    fn segment_count_is_clamped() {
        let arc = ArcSegment::new(
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 1.0),
            Point2::origin(),
            true,
        );
        let params = TessellationParams {
            tolerance: 10.0,
            min_segments: 6,
            max_segments: 8,
        };
        let polyline = TessellateSegment::new(arc.into(), params).execute().unwrap();
        assert_eq!(polyline.points.len(), 7);
    }

    #[test]
    fn invalid_params_are_rejected() {
        let segment =
            StraightSegment::new(Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)).into();
        for params in [
            TessellationParams {
                tolerance: 0.0,
                ..TessellationParams::default()
            },
            TessellationParams {
                min_segments: 10,
                max_segments: 2,
                ..TessellationParams::default()
            },
        ] {
            assert!(TessellateSegment::new(segment, params).execute().is_err());
        }
    }
}

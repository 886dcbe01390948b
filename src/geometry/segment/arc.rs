use crate::error::{GeometryError, Result};
use std::f64::consts::TAU;

use crate::math::arc_2d::{angle_of, signed_sweep, tangent_at};
use crate::math::vector_2d::distance;
use crate::math::{Point2, Vector2, TOLERANCE};

/// A circular arc path segment.
///
/// The radius is not stored; it is recomputed from `start` and `center`.
/// `end` is expected to lie on the same circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSegment {
    /// Where travel along the arc begins.
    pub start: Point2,
    /// Where travel along the arc ends.
    pub end: Point2,
    /// Center of rotation.
    pub center: Point2,
    /// Rotational sense of travel from `start` to `end`.
    pub counter_clockwise: bool,
}

impl ArcSegment {
    /// Creates a new arc segment without checking the radius invariant.
    #[must_use]
    pub fn new(start: Point2, end: Point2, center: Point2, counter_clockwise: bool) -> Self {
        Self {
            start,
            end,
            center,
            counter_clockwise,
        }
    }

    /// Creates a new arc segment, checking that `start` and `end` are
    /// equidistant from `center` and that the radius is non-zero.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is zero or the endpoints lie on
    /// different circles.
    pub fn try_new(
        start: Point2,
        end: Point2,
        center: Point2,
        counter_clockwise: bool,
    ) -> Result<Self> {
        let arc = Self::new(start, end, center, counter_clockwise);
        let radius = arc.radius();
        if radius < TOLERANCE {
            return Err(GeometryError::Degenerate("arc radius must be positive".into()).into());
        }
        let end_radius = distance(&center, &end);
        if (end_radius - radius).abs() > TOLERANCE * radius.max(1.0) {
            return Err(GeometryError::Degenerate(format!(
                "arc endpoints are not equidistant from center ({radius} vs {end_radius})"
            ))
            .into());
        }
        Ok(arc)
    }

    /// Angle of the start point around the center, in `(-π, π]`.
    #[must_use]
    pub fn start_angle(&self) -> f64 {
        angle_of(&self.center, &self.start)
    }

    /// Angle of the end point around the center, in `(-π, π]`.
    #[must_use]
    pub fn end_angle(&self) -> f64 {
        angle_of(&self.center, &self.end)
    }

    /// Distance from the center to the start point.
    #[must_use]
    pub fn radius(&self) -> f64 {
        distance(&self.center, &self.start)
    }

    /// Signed sweep from start to end, positive when counter-clockwise.
    ///
    /// Coincident endpoints describe a full turn and report `±2π`.
    #[must_use]
    pub fn sweep(&self) -> f64 {
        if distance(&self.start, &self.end) <= TOLERANCE * self.radius().max(1.0) {
            return if self.counter_clockwise { TAU } else { -TAU };
        }
        signed_sweep(self.start_angle(), self.end_angle(), self.counter_clockwise)
    }

    /// Arc length along the circle.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.radius() * self.sweep().abs()
    }

    /// Unit direction of travel when leaving `start`.
    ///
    /// # Errors
    ///
    /// Returns an error if the arc has zero radius.
    pub fn start_heading(&self) -> Result<Vector2> {
        self.ensure_radius()?;
        Ok(tangent_at(self.start_angle(), self.counter_clockwise))
    }

    /// Unit direction of travel when arriving at `end`.
    ///
    /// # Errors
    ///
    /// Returns an error if the arc has zero radius.
    pub fn end_heading(&self) -> Result<Vector2> {
        self.ensure_radius()?;
        Ok(tangent_at(self.end_angle(), self.counter_clockwise))
    }

    fn ensure_radius(&self) -> Result<()> {
        if self.radius() < TOLERANCE {
            return Err(GeometryError::Degenerate("arc radius must be positive".into()).into());
        }
        Ok(())
    }
}

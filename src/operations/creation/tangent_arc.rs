use std::f64::consts::PI;

use tracing::{debug, warn};

use crate::error::{GeometryError, Result};
use crate::geometry::segment::{ArcSegment, PathSegment, StraightSegment};
use crate::math::arc_2d::{point_at_angle, rotate_about};
use crate::math::vector_2d::{distance, perpendicular, unit_vector};
use crate::math::{Point2, TOLERANCE};

/// Derives an arc that continues a previous segment without a heading change.
///
/// The new arc starts where `previous` ends, has the requested radius, and
/// sweeps `angle_degrees` in the requested rotational sense. Directions use
/// the y-up map frame: a counter-clockwise arc turns left.
#[derive(Debug, Clone, Copy)]
pub struct TangentArc {
    radius: f64,
    angle_degrees: f64,
    counter_clockwise: bool,
}

impl TangentArc {
    /// Creates a new `TangentArc` operation.
    ///
    /// # Arguments
    ///
    /// * `radius` - Turn radius (must be positive)
    /// * `angle_degrees` - Sweep of the new arc, in `(0, 360]`
    /// * `counter_clockwise` - Rotational sense of the new arc
    #[must_use]
    pub fn new(radius: f64, angle_degrees: f64, counter_clockwise: bool) -> Self {
        Self {
            radius,
            angle_degrees,
            counter_clockwise,
        }
    }

    /// Executes the operation against the predecessor segment.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius or sweep is out of range, or if the
    /// predecessor is degenerate (a zero-length straight or an arc ending
    /// on its own center).
    pub fn execute(&self, previous: &PathSegment) -> Result<ArcSegment> {
        if let Err(err) = self.validate() {
            warn!("Rejected tangent arc parameters: {}", err);
            return Err(err);
        }

        let arc = match previous {
            PathSegment::Straight(straight) => self.after_straight(straight),
            PathSegment::Arc(arc) => self.after_arc(arc),
        }
        .inspect_err(|err| warn!("Cannot continue predecessor {:?}: {}", previous, err))?;

        debug!(
            "Derived tangent arc from ({}, {}) around ({}, {}) to ({}, {})",
            arc.start.x, arc.start.y, arc.center.x, arc.center.y, arc.end.x, arc.end.y
        );
        Ok(arc)
    }

    fn validate(&self) -> Result<()> {
        if !(self.radius.is_finite() && self.radius >= TOLERANCE) {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "radius",
                value: self.radius,
                min: TOLERANCE,
                max: f64::INFINITY,
            }
            .into());
        }
        if !(self.angle_degrees > 0.0 && self.angle_degrees <= 360.0) {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "angle_degrees",
                value: self.angle_degrees,
                min: 0.0,
                max: 360.0,
            }
            .into());
        }
        Ok(())
    }

    /// The center sits on the perpendicular through the straight's end point.
    fn after_straight(&self, previous: &StraightSegment) -> Result<ArcSegment> {
        let start = previous.end;
        // Reversed heading, turned a quarter: points to the right of travel.
        let reversed = unit_vector(&previous.end, &previous.start)?;
        let normal = perpendicular(&reversed);
        let offset = if self.counter_clockwise {
            -self.radius
        } else {
            self.radius
        };
        let center = start + normal * offset;
        Ok(self.arc_from(start, center))
    }

    /// The center sits on the predecessor's radial line through its end point,
    /// on the far side when the rotational sense is kept and on the near side
    /// when it reverses.
    fn after_arc(&self, previous: &ArcSegment) -> Result<ArcSegment> {
        if distance(&previous.center, &previous.end) < TOLERANCE {
            return Err(GeometryError::Degenerate(
                "predecessor arc ends on its center".into(),
            )
            .into());
        }
        let start = previous.end;
        let last_angle = previous.end_angle();
        let reference = if previous.counter_clockwise == self.counter_clockwise {
            last_angle + PI
        } else {
            last_angle
        };
        let center = point_at_angle(&start, self.radius, reference);
        Ok(self.arc_from(start, center))
    }

    fn arc_from(&self, start: Point2, center: Point2) -> ArcSegment {
        let sweep = self.angle_degrees.to_radians();
        let signed = if self.counter_clockwise { sweep } else { -sweep };
        let end = rotate_about(&center, &start, signed);
        ArcSegment::new(start, end, center, self.counter_clockwise)
    }
}

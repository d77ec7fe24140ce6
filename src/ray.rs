#![warn(missing_docs)]
//! Module for handling optical rays
//!
//! A [`Ray`] lives in the meridional plane of the optical system: its position is given by the
//! axial position (`x`, along the optical axis) and the transverse offset (`y`). The propagation
//! direction is stored as the angle (in radians) with respect to the optical axis.
use std::fmt::Display;

use nalgebra::Point2;
use uom::num_traits::Zero;
use uom::si::{f64::Length, length::millimeter};

use crate::{
    error::{LensrayError, LensrayResult},
    raytrace::MotionModel,
};

///Struct that contains all information about an optical ray
#[derive(Debug, Clone, PartialEq)]
pub struct Ray {
    /// Stores the current position of the ray
    pos: Point2<Length>,
    /// Stores the current propagation angle (in radians) with respect to the optical axis
    angle: f64,
    /// Stores the position history of the ray. The first entry is the origin at generation time,
    /// the last entry is always the current position.
    path: Vec<Point2<Length>>,
    /// Position at which the ray last changed its direction
    segment_start: Point2<Length>,
    /// Reason, why the tracing of this ray was stopped
    failure: Option<LensrayError>,
}
impl Ray {
    /// Creates a new [`Ray`] starting at `origin` with the given `angle` (in radians).
    #[must_use]
    pub fn new(origin: Point2<Length>, angle: f64) -> Self {
        let mut path = Vec::<Point2<Length>>::with_capacity(8);
        path.push(origin);
        Self {
            pos: origin,
            angle,
            path,
            segment_start: origin,
            failure: None,
        }
    }
    /// Returns the current position of this [`Ray`].
    #[must_use]
    pub fn origin(&self) -> Point2<Length> {
        self.pos
    }
    /// Returns the axial position of this [`Ray`].
    #[must_use]
    pub fn axial_position(&self) -> Length {
        self.pos.x
    }
    /// Returns the transverse offset of this [`Ray`].
    #[must_use]
    pub fn transverse_offset(&self) -> Length {
        self.pos.y
    }
    /// Returns the position of this [`Ray`] at generation time.
    #[must_use]
    pub fn start(&self) -> Point2<Length> {
        self.path[0]
    }
    /// Returns the propagation angle (in radians) of this [`Ray`].
    #[must_use]
    pub const fn angle(&self) -> f64 {
        self.angle
    }
    /// Returns the position history of this [`Ray`].
    ///
    /// The first point is the origin at generation time. The last point is the current position.
    #[must_use]
    pub fn path(&self) -> &[Point2<Length>] {
        &self.path
    }
    /// Returns the position at which this [`Ray`] last changed its direction.
    ///
    /// This is the generation origin as long as the ray did not interact with any element.
    /// For a lens, this point acts as the object point.
    #[must_use]
    pub fn segment_start(&self) -> Point2<Length> {
        self.segment_start
    }
    /// Change the propagation angle of this [`Ray`] at its current position.
    ///
    /// The current position becomes the new [`segment_start`](Self::segment_start).
    pub fn deflect(&mut self, angle: f64) {
        self.angle = angle;
        self.segment_start = self.pos;
    }
    /// Returns the reason why tracing of this [`Ray`] stopped or `None` for a valid ray.
    #[must_use]
    pub const fn failure(&self) -> Option<&LensrayError> {
        self.failure.as_ref()
    }
    /// Returns true if this [`Ray`] was traced without failure.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.failure.is_none()
    }
    /// Mark this [`Ray`] as failed with the given reason.
    pub fn set_failure(&mut self, failure: LensrayError) {
        self.failure = Some(failure);
    }
    /// Propagate the ray freely along its direction by the given (path) length.
    ///
    /// The motion follows `Δx = distance·cos(angle)` and `Δy = distance·sin(angle)`. A negative
    /// distance is not checked and moves the ray backwards.
    pub fn propagate(&mut self, distance: Length) {
        self.pos.x += distance * self.angle.cos();
        self.pos.y += distance * self.angle.sin();
        self.path.push(self.pos);
    }
    /// Propagate the ray by the given axial distance using the small-angle approximation.
    ///
    /// The motion follows `Δx = distance` and `Δy = distance·angle`.
    pub fn propagate_paraxial(&mut self, distance: Length) {
        self.pos.x += distance;
        self.pos.y += distance * self.angle;
        self.path.push(self.pos);
    }
    /// Propagate the ray exactly onto the plane at the given axial position.
    ///
    /// The required distance is computed in closed form from the current position and angle. The
    /// axial coordinate of the resulting position is set exactly to `axial_position`. Nothing is
    /// added to the path if the ray is already located on the plane.
    ///
    /// # Errors
    ///
    /// This function will return [`LensrayError::NonProgressingStep`] if
    ///   - the plane lies behind the current ray position.
    ///   - the plane position is not finite.
    ///   - the ray does not advance along the optical axis (|angle| >= π/2) while using
    ///     [`MotionModel::Geometric`].
    pub fn propagate_to(&mut self, axial_position: Length, motion: MotionModel) -> LensrayResult<()> {
        let axial_distance = axial_position - self.pos.x;
        if !axial_distance.is_finite() {
            return Err(LensrayError::NonProgressingStep(format!(
                "target plane at {:.6} mm cannot be reached",
                axial_position.get::<millimeter>()
            )));
        }
        if axial_distance < Length::zero() {
            return Err(LensrayError::NonProgressingStep(format!(
                "target plane at {:.6} mm lies behind ray at {:.6} mm",
                axial_position.get::<millimeter>(),
                self.pos.x.get::<millimeter>()
            )));
        }
        if axial_distance.is_zero() {
            return Ok(());
        }
        match motion {
            MotionModel::Geometric => {
                let cos_angle = self.angle.cos();
                if cos_angle <= f64::EPSILON {
                    return Err(LensrayError::NonProgressingStep(format!(
                        "ray with angle {:.6} rad does not advance towards plane at {:.6} mm",
                        self.angle,
                        axial_position.get::<millimeter>()
                    )));
                }
                self.propagate(axial_distance / cos_angle);
            }
            MotionModel::Paraxial => self.propagate_paraxial(axial_distance),
        }
        self.pos.x = axial_position;
        if let Some(last) = self.path.last_mut() {
            last.x = axial_position;
        }
        Ok(())
    }
    /// Returns the transverse offset of the ray path at the given axial position.
    ///
    /// The value is linearly interpolated between the path points. `None` is returned if the path
    /// does not cover the given axial position.
    #[must_use]
    pub fn offset_at(&self, axial_position: Length) -> Option<Length> {
        if self.path.len() == 1 {
            return (self.path[0].x == axial_position).then_some(self.path[0].y);
        }
        self.path.windows(2).find_map(|segment| {
            let (p0, p1) = (segment[0], segment[1]);
            let (low, high) = if p0.x <= p1.x { (p0.x, p1.x) } else { (p1.x, p0.x) };
            if axial_position < low || axial_position > high {
                return None;
            }
            if p1.x == p0.x {
                return Some(p0.y);
            }
            let t = ((axial_position - p0.x) / (p1.x - p0.x)).value;
            Some(p0.y + (p1.y - p0.y) * t)
        })
    }
}
impl Display for Ray {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "pos: ({:.3} mm, {:.3} mm), angle: {:.6} rad, vertices: {}",
            self.pos.x.get::<millimeter>(),
            self.pos.y.get::<millimeter>(),
            self.angle,
            self.path.len()
        )?;
        if let Some(failure) = &self.failure {
            write!(f, ", failed: {failure}")?;
        }
        Ok(())
    }
}

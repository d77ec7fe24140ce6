#![warn(missing_docs)]
//! A thin lens (ideal paraxial lens)
use std::fmt::Display;

use uom::num_traits::Zero;
use uom::si::{f64::Length, length::millimeter};

use crate::{
    error::{LensrayError, LensrayResult},
    meter,
    ray::Ray,
    raytrace::MotionModel,
};

/// Thin lens (= ideal, aberration-free lens)
///
/// This element models an infinitely thin lens of the given `focal length` located at a fixed
/// axial position. A positive `focal length` corresponds to a focussing (convex) lens while a
/// negative `focal length` represents a defocussing (concave) lens. A focal length of `+∞`
/// denotes a null element without any focussing power.
///
/// Imaging follows the thin-lens relation `1/v = 1/f + 1/u` using the Cartesian sign convention:
/// the object distance `u` is measured from the lens to the object point (negative for objects in
/// front of the lens) and the image distance `v` from the lens to the image point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lens {
    position: Length,
    focal_length: Length,
}
impl Lens {
    /// Create a new thin lens at the given axial `position` with the given `focal_length`.
    ///
    /// # Errors
    /// This function returns an error if
    ///  - the given `position` is not finite.
    ///  - the given `focal_length` is zero, `NaN` or `-∞`.
    pub fn new(position: Length, focal_length: Length) -> LensrayResult<Self> {
        if !position.is_finite() {
            return Err(LensrayError::Configuration(
                "lens position must be finite".into(),
            ));
        }
        if focal_length.is_zero()
            || focal_length.is_nan()
            || (focal_length.is_infinite() && focal_length.is_sign_negative())
        {
            return Err(LensrayError::Configuration(
                "focal length must be != 0.0, not NaN and not -inf".into(),
            ));
        }
        Ok(Self {
            position,
            focal_length,
        })
    }
    /// Create a null element (focal length `+∞`) at the given axial `position`.
    ///
    /// # Errors
    /// This function returns an error if the given `position` is not finite.
    pub fn null(position: Length) -> LensrayResult<Self> {
        Self::new(position, meter!(f64::INFINITY))
    }
    /// Returns the axial position of this [`Lens`].
    #[must_use]
    pub fn position(&self) -> Length {
        self.position
    }
    /// Returns the focal length of this [`Lens`].
    #[must_use]
    pub fn focal_length(&self) -> Length {
        self.focal_length
    }
    /// Returns true if this [`Lens`] has no focussing power (`f = +∞`).
    #[must_use]
    pub fn is_null(&self) -> bool {
        self.focal_length.is_infinite()
    }
    /// Returns the optical power (in diopters, `1/m`) of this [`Lens`].
    #[must_use]
    pub fn optical_power(&self) -> f64 {
        1.0 / self.focal_length.value
    }
    /// Calculate the image distance `v` for a given (signed) object distance `u`.
    ///
    /// For a null element, `+∞` is returned.
    ///
    /// # Errors
    ///
    /// This function will return [`LensrayError::DegenerateImaging`] if
    ///   - the object distance is zero (zero image distance).
    ///   - the object lies in the front focal plane (`u = -f`), which places the image at infinity.
    ///   - the object distance is not finite.
    pub fn image_distance(&self, object_distance: Length) -> LensrayResult<Length> {
        if self.is_null() {
            return Ok(meter!(f64::INFINITY));
        }
        if !object_distance.is_finite() {
            return Err(LensrayError::DegenerateImaging(
                "object distance must be finite".into(),
            ));
        }
        if object_distance.is_zero() {
            return Err(LensrayError::DegenerateImaging(format!(
                "object located on lens plane at {:.6} mm: zero image distance",
                self.position.get::<millimeter>()
            )));
        }
        let power = self.optical_power();
        let inverse_image_distance = power + 1.0 / object_distance.value;
        if inverse_image_distance.abs() <= f64::EPSILON * power.abs()
            || !inverse_image_distance.is_finite()
        {
            return Err(LensrayError::DegenerateImaging(format!(
                "object located in focal plane of lens at {:.6} mm: image at infinity",
                self.position.get::<millimeter>()
            )));
        }
        Ok(meter!(1.0 / inverse_image_distance))
    }
    /// Refract a [`Ray`] located on the lens plane.
    ///
    /// The ray's [`segment_start`](Ray::segment_start) acts as object point. For
    /// [`MotionModel::Geometric`] the outgoing ray is directed towards the conjugate image point
    /// `(lens + v, m·h)` with the magnification `m = v/u` and the object height `h`, which reduces
    /// to `tan(out) = tan(in) - y/f` for the height `y` on the lens plane. For
    /// [`MotionModel::Paraxial`] the slope is linearized to `out = in - y/f`. An object point on
    /// the lens plane (e.g. a preceding lens at the same position) is handled by the same relation.
    /// A null element leaves the ray untouched.
    ///
    /// # Errors
    ///
    /// This function will return [`LensrayError::DegenerateImaging`] if the object point lies in
    /// the front focal plane of the lens or the outgoing angle is undefined.
    pub fn interact(&self, ray: &mut Ray, motion: MotionModel) -> LensrayResult<()> {
        if self.is_null() {
            return Ok(());
        }
        let object_distance = ray.segment_start().x - self.position;
        if !object_distance.is_zero() {
            self.image_distance(object_distance)?;
        }
        let deflection = (ray.transverse_offset() / self.focal_length).value;
        let angle = match motion {
            MotionModel::Geometric => (ray.angle().tan() - deflection).atan(),
            MotionModel::Paraxial => ray.angle() - deflection,
        };
        if !angle.is_finite() {
            return Err(LensrayError::DegenerateImaging(format!(
                "undefined outgoing angle at lens at {:.6} mm",
                self.position.get::<millimeter>()
            )));
        }
        ray.deflect(angle);
        Ok(())
    }
}
impl Display for Lens {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "lens @ {:.3} mm (f = {:.3} mm)",
            self.position.get::<millimeter>(),
            self.focal_length.get::<millimeter>()
        )
    }
}

//! Gaussian beam approximated by a bundle of geometric rays
use std::{f64::consts::PI, fmt::Display};

use nalgebra::Point2;
use uom::num_traits::Zero;
use uom::si::{
    angle::radian,
    f64::{Angle, Length},
    length::{micrometer, millimeter},
};

use super::RayEmitter;
use crate::{
    error::{LensrayError, LensrayResult},
    radian,
    ray::Ray,
    utils::evenly_spaced,
};

/// Source emitting a (geometric approximation of a) Gaussian beam
///
/// The beam is defined by its waist radius `w0` located at the source position and its
/// wavelength `λ`. From those, the Rayleigh range `zR = π·w0²/λ` and the (half) divergence angle
/// `θ = λ/(π·w0)` are derived. No propagation of the complex beam parameter is performed.
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct GaussianBeamSource {
    position: Length,
    waist: Length,
    wavelength: Length,
}
impl GaussianBeamSource {
    /// Create a new [`GaussianBeamSource`] from its waist radius and wavelength.
    ///
    /// # Errors
    ///
    /// This function will return an error if
    ///  - the given `position` is not finite.
    ///  - the given `waist` is <= 0.0 or not finite.
    ///  - the given `wavelength` is <= 0.0 or not finite.
    pub fn new(position: Length, waist: Length, wavelength: Length) -> LensrayResult<Self> {
        if !position.is_finite() {
            return Err(LensrayError::Configuration(
                "source position must be finite".into(),
            ));
        }
        if waist.is_zero() || waist.is_sign_negative() || !waist.is_finite() {
            return Err(LensrayError::Configuration(
                "beam waist must be > 0.0 and finite".into(),
            ));
        }
        if wavelength.is_zero() || wavelength.is_sign_negative() || !wavelength.is_finite() {
            return Err(LensrayError::Configuration(
                "wavelength must be > 0.0 and finite".into(),
            ));
        }
        Ok(Self {
            position,
            waist,
            wavelength,
        })
    }
    /// Create a new [`GaussianBeamSource`] from its divergence angle and wavelength.
    ///
    /// The waist radius is calculated as `w0 = λ/(π·θ)`.
    ///
    /// # Errors
    ///
    /// This function will return an error if
    ///  - the given `divergence` is <= 0.0 or not finite.
    ///  - the resulting parameters are invalid (see [`GaussianBeamSource::new`]).
    pub fn from_divergence(
        position: Length,
        divergence: Angle,
        wavelength: Length,
    ) -> LensrayResult<Self> {
        if divergence.is_zero() || divergence.is_sign_negative() || !divergence.is_finite() {
            return Err(LensrayError::Configuration(
                "divergence angle must be > 0.0 and finite".into(),
            ));
        }
        let waist = wavelength / (PI * divergence.get::<radian>());
        Self::new(position, waist, wavelength)
    }
    /// Returns the waist radius `w0` of this [`GaussianBeamSource`].
    #[must_use]
    pub fn waist(&self) -> Length {
        self.waist
    }
    /// Returns the wavelength of this [`GaussianBeamSource`].
    #[must_use]
    pub fn wavelength(&self) -> Length {
        self.wavelength
    }
    /// Returns the Rayleigh range `zR = π·w0²/λ`.
    #[must_use]
    pub fn rayleigh_range(&self) -> Length {
        (self.waist * self.waist) / self.wavelength * PI
    }
    /// Returns the divergence angle `θ = λ/(π·w0)`.
    #[must_use]
    pub fn divergence(&self) -> Angle {
        radian!((self.wavelength / self.waist).value / PI)
    }
    /// Returns the 1/e² beam radius at the axial position `z`.
    ///
    /// `w(z) = w0·sqrt(1 + ((z - z0)/zR)²)` with the source position `z0`.
    #[must_use]
    pub fn beam_radius(&self, z: Length) -> Length {
        let normalized_distance = ((z - self.position) / self.rayleigh_range()).value;
        self.waist * normalized_distance.mul_add(normalized_distance, 1.0).sqrt()
    }
}
impl RayEmitter for GaussianBeamSource {
    fn axial_position(&self) -> Length {
        self.position
    }
    /// Generate `n` rays across the beam.
    ///
    /// The beam radius is evaluated on the source plane itself, which always yields the waist
    /// `w0`. Offsets are evenly spaced over `[-w0, w0]` and each ray gets the angle
    /// `atan(offset·θ/w0)`, mapping the transverse position linearly onto the divergence.
    fn generate_rays(&self, nr_of_rays: usize) -> Vec<Ray> {
        let beam_size = self.beam_radius(self.position);
        let theta = self.divergence().get::<radian>();
        evenly_spaced(-beam_size, beam_size, nr_of_rays)
            .into_iter()
            .map(|offset| {
                let angle = ((offset / beam_size).value * theta).atan();
                Ray::new(Point2::new(self.position, offset), angle)
            })
            .collect()
    }
}
impl Display for GaussianBeamSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "gaussian beam @ {:.3} mm (w0 = {:.3} mm, λ = {:.3} µm)",
            self.position.get::<millimeter>(),
            self.waist.get::<millimeter>(),
            self.wavelength.get::<micrometer>()
        )
    }
}

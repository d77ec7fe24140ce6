//! Extended source with a uniform angular spread
use std::fmt::Display;

use itertools::iproduct;
use nalgebra::Point2;
use uom::si::{
    angle::radian,
    f64::{Angle, Length},
    length::millimeter,
};

use super::RayEmitter;
use crate::{
    error::{LensrayError, LensrayResult},
    ray::Ray,
    utils::evenly_spaced,
};

/// Extended (or point) source with a uniform divergence
///
/// Rays start on the source plane at offsets evenly spaced over `[-size/2, size/2]`. From each
/// start point, rays are emitted with angles evenly spaced over
/// `[-divergence/2, divergence/2]`. A `size` of zero gives a point source.
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct DivergentSource {
    position: Length,
    size: Length,
    divergence: Angle,
}
impl DivergentSource {
    /// Create a new [`DivergentSource`].
    ///
    /// # Errors
    ///
    /// This function will return an error if
    ///  - the given `position` is not finite.
    ///  - the given `size` is negative or not finite.
    ///  - the given `divergence` is negative or not finite.
    pub fn new(position: Length, size: Length, divergence: Angle) -> LensrayResult<Self> {
        if !position.is_finite() {
            return Err(LensrayError::Configuration(
                "source position must be finite".into(),
            ));
        }
        if size.is_sign_negative() || !size.is_finite() {
            return Err(LensrayError::Configuration(
                "source size must be >= 0.0 and finite".into(),
            ));
        }
        if divergence.is_sign_negative() || !divergence.is_finite() {
            return Err(LensrayError::Configuration(
                "divergence angle must be >= 0.0 and finite".into(),
            ));
        }
        Ok(Self {
            position,
            size,
            divergence,
        })
    }
    /// Returns the (full) transverse size of the emitting aperture.
    #[must_use]
    pub fn size(&self) -> Length {
        self.size
    }
    /// Returns the full divergence angle.
    #[must_use]
    pub fn divergence(&self) -> Angle {
        self.divergence
    }
}
impl RayEmitter for DivergentSource {
    fn axial_position(&self) -> Length {
        self.position
    }
    /// Generate `n²` rays: `n` start points crossed with `n` emission angles.
    ///
    /// The rays are ordered by start point first (outer loop) and by angle second.
    fn generate_rays(&self, nr_of_rays: usize) -> Vec<Ray> {
        let offsets = evenly_spaced(-self.size / 2.0, self.size / 2.0, nr_of_rays);
        let half_divergence = self.divergence.get::<radian>() / 2.0;
        let angles = evenly_spaced(-half_divergence, half_divergence, nr_of_rays);
        iproduct!(offsets.iter(), angles.iter())
            .map(|(offset, angle)| Ray::new(Point2::new(self.position, *offset), *angle))
            .collect()
    }
}
impl Display for DivergentSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "divergent source @ {:.3} mm (size = {:.3} mm, divergence = {:.6} rad)",
            self.position.get::<millimeter>(),
            self.size.get::<millimeter>(),
            self.divergence.get::<radian>()
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{millimeter, milliradian, radian};
    use approx::assert_abs_diff_eq;
    #[test]
    fn new() {
        assert!(DivergentSource::new(millimeter!(0.0), millimeter!(1.0), radian!(0.1)).is_ok());
        assert!(DivergentSource::new(millimeter!(0.0), millimeter!(0.0), radian!(0.0)).is_ok());
        assert!(
            DivergentSource::new(millimeter!(f64::NAN), millimeter!(1.0), radian!(0.1)).is_err()
        );
        assert!(
            DivergentSource::new(millimeter!(0.0), millimeter!(-1.0), radian!(0.1)).is_err()
        );
        assert!(
            DivergentSource::new(millimeter!(0.0), millimeter!(f64::INFINITY), radian!(0.1))
                .is_err()
        );
        assert!(
            DivergentSource::new(millimeter!(0.0), millimeter!(1.0), radian!(-0.1)).is_err()
        );
        assert!(
            DivergentSource::new(millimeter!(0.0), millimeter!(1.0), radian!(f64::NAN)).is_err()
        );
    }
    #[test]
    fn generate_rays_count() {
        let src = DivergentSource::new(millimeter!(0.0), millimeter!(2.0), radian!(0.2)).unwrap();
        assert_eq!(src.generate_rays(0).len(), 0);
        assert_eq!(src.generate_rays(1).len(), 1);
        assert_eq!(src.generate_rays(3).len(), 9);
        assert_eq!(src.generate_rays(10).len(), 100);
    }
    #[test]
    fn generate_rays_grid() {
        let src = DivergentSource::new(millimeter!(5.0), millimeter!(2.0), radian!(0.2)).unwrap();
        let rays = src.generate_rays(2);
        let expected = [(-1.0, -0.1), (-1.0, 0.1), (1.0, -0.1), (1.0, 0.1)];
        for (ray, (offset, angle)) in rays.iter().zip(expected) {
            assert_eq!(ray.axial_position(), millimeter!(5.0));
            assert_abs_diff_eq!(
                ray.transverse_offset().get::<millimeter>(),
                offset,
                epsilon = 1e-12
            );
            assert_abs_diff_eq!(ray.angle(), angle, epsilon = 1e-15);
            assert_eq!(ray.path().len(), 1);
        }
    }
    #[test]
    fn generate_rays_single() {
        let src =
            DivergentSource::new(millimeter!(1.0), millimeter!(2.0), milliradian!(200.0)).unwrap();
        let rays = src.generate_rays(1);
        assert_eq!(rays.len(), 1);
        assert_eq!(rays[0].start(), millimeter!(1.0, -1.0));
        assert_abs_diff_eq!(rays[0].angle(), -0.1, epsilon = 1e-15);
    }
    #[test]
    fn generate_rays_point_source_without_divergence() {
        let src = DivergentSource::new(millimeter!(0.0), millimeter!(0.0), radian!(0.0)).unwrap();
        let rays = src.generate_rays(3);
        assert_eq!(rays.len(), 9);
        for ray in &rays {
            assert_eq!(ray.start(), millimeter!(0.0, 0.0));
            assert_eq!(ray.angle(), 0.0);
        }
    }
    #[test]
    fn display() {
        let src = DivergentSource::new(millimeter!(1.0), millimeter!(2.0), radian!(0.5)).unwrap();
        assert_eq!(
            format!("{src}"),
            "divergent source @ 1.000 mm (size = 2.000 mm, divergence = 0.500000 rad)"
        );
    }
}

#![warn(missing_docs)]
//! Light sources generating the initial ray bundle of an [`OpticalSystem`](crate::OpticalSystem)
use std::fmt::Display;

use uom::si::f64::Length;

use crate::ray::Ray;

mod divergent;
mod gaussian;

pub use divergent::DivergentSource;
pub use gaussian::GaussianBeamSource;

/// Trait for all kinds of sources emitting a ray bundle
pub trait RayEmitter {
    /// Returns the axial position of the source plane.
    fn axial_position(&self) -> Length;
    /// Generate a ray bundle controlled by the bundle parameter `nr_of_rays`.
    ///
    /// All rays start on the source plane. The meaning of the bundle parameter (and thus the
    /// final number of rays) depends on the concrete source.
    fn generate_rays(&self, nr_of_rays: usize) -> Vec<Ray>;
}

/// A light source of an [`OpticalSystem`](crate::OpticalSystem)
#[derive(Debug, Clone, PartialEq)]
pub enum LightSource {
    /// Extended source with uniform divergence (see [`DivergentSource`])
    Divergent(DivergentSource),
    /// Geometric approximation of a Gaussian beam (see [`GaussianBeamSource`])
    GaussianBeam(GaussianBeamSource),
}
impl RayEmitter for LightSource {
    fn axial_position(&self) -> Length {
        match self {
            Self::Divergent(src) => src.axial_position(),
            Self::GaussianBeam(src) => src.axial_position(),
        }
    }
    fn generate_rays(&self, nr_of_rays: usize) -> Vec<Ray> {
        match self {
            Self::Divergent(src) => src.generate_rays(nr_of_rays),
            Self::GaussianBeam(src) => src.generate_rays(nr_of_rays),
        }
    }
}
impl From<DivergentSource> for LightSource {
    fn from(src: DivergentSource) -> Self {
        Self::Divergent(src)
    }
}
impl From<GaussianBeamSource> for LightSource {
    fn from(src: GaussianBeamSource) -> Self {
        Self::GaussianBeam(src)
    }
}
impl Display for LightSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Divergent(src) => src.fmt(f),
            Self::GaussianBeam(src) => src.fmt(f),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{millimeter, radian};
    #[test]
    fn from_sources() {
        let divergent =
            DivergentSource::new(millimeter!(1.0), millimeter!(2.0), radian!(0.1)).unwrap();
        let source = LightSource::from(divergent);
        assert_eq!(source, LightSource::Divergent(divergent));
        assert_eq!(source.axial_position(), millimeter!(1.0));
        assert_eq!(source.generate_rays(4).len(), 16);

        let gaussian =
            GaussianBeamSource::new(millimeter!(-3.0), millimeter!(1.0), millimeter!(0.001))
                .unwrap();
        let source = LightSource::from(gaussian);
        assert_eq!(source, LightSource::GaussianBeam(gaussian));
        assert_eq!(source.axial_position(), millimeter!(-3.0));
        assert_eq!(source.generate_rays(4).len(), 4);
    }
    #[test]
    fn display() {
        let source = LightSource::from(
            DivergentSource::new(millimeter!(0.0), millimeter!(0.0), radian!(0.0)).unwrap(),
        );
        assert_eq!(
            format!("{source}"),
            "divergent source @ 0.000 mm (size = 0.000 mm, divergence = 0.000000 rad)"
        );
    }
}

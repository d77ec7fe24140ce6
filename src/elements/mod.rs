#![warn(missing_docs)]
//! Optical elements placed along the optical axis
//!
//! Elements form a closed set of variants. Each element sits at a fixed axial position and
//! transforms the angle of a [`Ray`] that has been propagated onto its plane.
use std::fmt::Display;

use uom::si::f64::Length;

use crate::{error::LensrayResult, ray::Ray, raytrace::MotionModel};

mod lens;

pub use lens::Lens;

/// An element of an [`OpticalSystem`](crate::OpticalSystem)
#[derive(Debug, Clone, PartialEq)]
pub enum OpticalElement {
    /// A thin lens (see [`Lens`])
    Lens(Lens),
}
impl OpticalElement {
    /// Returns the axial position of this element.
    #[must_use]
    pub fn axial_position(&self) -> Length {
        match self {
            Self::Lens(lens) => lens.position(),
        }
    }
    /// Let the given [`Ray`] interact with this element using the given [`MotionModel`].
    ///
    /// # Errors
    ///
    /// This function will return an error if the interaction of the concrete element fails
    /// (see [`Lens::interact`]).
    pub fn interact(&self, ray: &mut Ray, motion: MotionModel) -> LensrayResult<()> {
        match self {
            Self::Lens(lens) => lens.interact(ray, motion),
        }
    }
}
impl From<Lens> for OpticalElement {
    fn from(lens: Lens) -> Self {
        Self::Lens(lens)
    }
}
impl Display for OpticalElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lens(lens) => lens.fmt(f),
        }
    }
}
#[cfg(test)]
mod test {
    use super::*;
    use crate::millimeter;
    #[test]
    fn from_lens() {
        let lens = Lens::new(millimeter!(12.0), millimeter!(50.0)).unwrap();
        let element = OpticalElement::from(lens);
        assert_eq!(element, OpticalElement::Lens(lens));
        assert_eq!(element.axial_position(), millimeter!(12.0));
    }
    #[test]
    fn interact_delegates() {
        let element = OpticalElement::from(Lens::null(millimeter!(0.0)).unwrap());
        let mut ray = Ray::new(millimeter!(0.0, 1.0), 0.2);
        element.interact(&mut ray, MotionModel::Paraxial).unwrap();
        assert_eq!(ray.angle(), 0.2);
    }
    #[test]
    fn display() {
        let element = OpticalElement::from(Lens::new(millimeter!(1.0), millimeter!(2.0)).unwrap());
        assert_eq!(format!("{element}"), "lens @ 1.000 mm (f = 2.000 mm)");
    }
}

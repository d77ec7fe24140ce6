#![warn(missing_docs)]
//! The basic structure representing an optical system
//!
//! An [`OpticalSystem`] consists of a sequence of [`OpticalElement`]s sorted along the optical
//! axis and a single [`LightSource`]. A ray-tracing run generates the ray bundle of the source
//! and propagates each ray from element to element up to the given system extent.
use std::fmt::Display;

use log::{info, warn};
use rayon::prelude::{IntoParallelIterator, ParallelIterator};
use uom::si::{f64::Length, length::millimeter};

use crate::{
    elements::{Lens, OpticalElement},
    error::{LensrayError, LensrayResult},
    ray::Ray,
    raytrace::{MotionModel, RayTraceConfig},
    render::{RayPath, RayScene, RenderSink},
    sources::{LightSource, RayEmitter},
};

/// Overall optical model consisting of a light source and a sequence of optical elements.
///
/// # Example
///
/// ```rust
/// use lensray::{millimeter, radian, OpticalSystem};
/// use lensray::sources::DivergentSource;
///
/// let mut system = OpticalSystem::new();
/// system.add_lens(millimeter!(50.0), millimeter!(25.0)).unwrap();
/// system.set_source(DivergentSource::new(millimeter!(0.0), millimeter!(2.0), radian!(0.1)).unwrap());
/// system.trace_rays(millimeter!(150.0)).unwrap();
/// assert_eq!(system.rays().len(), 100);
/// ```
#[derive(Debug, Clone, Default)]
pub struct OpticalSystem {
    elements: Vec<OpticalElement>,
    source: Option<LightSource>,
    config: RayTraceConfig,
    rays: Vec<Ray>,
}
impl OpticalSystem {
    /// Creates a new (empty) [`OpticalSystem`] with a default [`RayTraceConfig`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
    /// Add an optical element to this [`OpticalSystem`].
    ///
    /// The elements are kept sorted by their axial position. Elements located at the same
    /// position are visited in the order they were added.
    pub fn add_element(&mut self, element: impl Into<OpticalElement>) {
        let element = element.into();
        let position = element.axial_position();
        let idx = self
            .elements
            .partition_point(|e| e.axial_position() <= position);
        self.elements.insert(idx, element);
    }
    /// Add a thin lens with the given `focal_length` at the given axial `position`.
    ///
    /// # Errors
    ///
    /// This function will return an error if the lens parameters are invalid (see [`Lens::new`]).
    pub fn add_lens(&mut self, position: Length, focal_length: Length) -> LensrayResult<()> {
        self.add_element(Lens::new(position, focal_length)?);
        Ok(())
    }
    /// Returns the optical elements of this [`OpticalSystem`] sorted by axial position.
    #[must_use]
    pub fn elements(&self) -> &[OpticalElement] {
        &self.elements
    }
    /// Returns the axial positions of all optical elements in ascending order.
    #[must_use]
    pub fn element_positions(&self) -> Vec<Length> {
        self.elements.iter().map(OpticalElement::axial_position).collect()
    }
    /// Set (or replace) the light source of this [`OpticalSystem`].
    pub fn set_source(&mut self, source: impl Into<LightSource>) {
        self.source = Some(source.into());
    }
    /// Returns a reference to the light source of this [`OpticalSystem`] (if any).
    #[must_use]
    pub const fn source(&self) -> Option<&LightSource> {
        self.source.as_ref()
    }
    /// Returns the ray-tracing configuration of this [`OpticalSystem`].
    #[must_use]
    pub const fn config(&self) -> &RayTraceConfig {
        &self.config
    }
    /// Sets the ray-tracing configuration of this [`OpticalSystem`].
    pub fn set_config(&mut self, config: RayTraceConfig) {
        self.config = config;
    }
    /// Returns all rays of the last ray-tracing run.
    #[must_use]
    pub fn rays(&self) -> &[Ray] {
        &self.rays
    }
    /// Returns an iterator over all rays of the last run which were traced without failure.
    pub fn valid_rays(&self) -> impl Iterator<Item = &Ray> {
        self.rays.iter().filter(|r| r.is_valid())
    }
    /// Returns an iterator over all rays of the last run whose tracing stopped with a failure.
    pub fn failed_rays(&self) -> impl Iterator<Item = &Ray> {
        self.rays.iter().filter(|r| !r.is_valid())
    }
    fn trace_ray(
        ray: &mut Ray,
        elements: &[OpticalElement],
        extent: Length,
        motion: MotionModel,
    ) -> LensrayResult<()> {
        for element in elements {
            ray.propagate_to(element.axial_position(), motion)?;
            element.interact(ray, motion)?;
        }
        ray.propagate_to(extent, motion)
    }
    /// Perform a ray-tracing run up to the axial position `extent`.
    ///
    /// A fresh bundle is generated by the light source and each ray is propagated exactly onto
    /// the plane of each element (in ascending order), interacts with it, and is finally
    /// propagated to `extent`. The rays of a previous run are replaced.
    ///
    /// Failures of a single ray ([`LensrayError::DegenerateImaging`],
    /// [`LensrayError::NonProgressingStep`]) do not abort the run. The ray keeps the path up to
    /// the failure and stores the reason (see [`Ray::failure`]).
    ///
    /// # Errors
    ///
    /// This function will return an error if
    ///   - no light source has been set.
    ///   - the given `extent` is not finite.
    pub fn trace_rays(&mut self, extent: Length) -> LensrayResult<()> {
        let Some(source) = &self.source else {
            return Err(LensrayError::Configuration(
                "no light source defined. Cannot trace rays".into(),
            ));
        };
        if !extent.is_finite() {
            return Err(LensrayError::Configuration(
                "system extent must be finite".into(),
            ));
        }
        let rays = source.generate_rays(self.config.nr_of_rays());
        info!(
            "tracing {} rays through {} element(s) up to {:.3} mm",
            rays.len(),
            self.elements.len(),
            extent.get::<millimeter>()
        );
        let elements = self.elements.as_slice();
        let motion = self.config.motion();
        let trace = |mut ray: Ray| {
            if let Err(e) = Self::trace_ray(&mut ray, elements, extent, motion) {
                ray.set_failure(e);
            }
            ray
        };
        let rays: Vec<Ray> = if self.config.parallel() {
            rays.into_par_iter().map(trace).collect()
        } else {
            rays.into_iter().map(trace).collect()
        };
        for (idx, ray) in rays.iter().enumerate() {
            if let Some(failure) = ray.failure() {
                warn!("ray #{idx} failed: {failure}");
            }
        }
        let nr_of_failed = rays.iter().filter(|r| !r.is_valid()).count();
        info!(
            "ray tracing finished: {} valid, {} failed",
            rays.len() - nr_of_failed,
            nr_of_failed
        );
        self.rays = rays;
        Ok(())
    }
    /// Returns the [`RayScene`] of the last ray-tracing run.
    #[must_use]
    pub fn scene(&self) -> RayScene {
        RayScene {
            paths: self.rays.iter().map(RayPath::from).collect(),
            element_positions: self.element_positions(),
        }
    }
    /// Hand the result of the last ray-tracing run to the given [`RenderSink`].
    ///
    /// Nothing is rendered if no rays have been traced yet.
    ///
    /// # Errors
    ///
    /// This function will return an error if the sink fails.
    pub fn render(&self, sink: &mut dyn RenderSink) -> LensrayResult<()> {
        if self.rays.is_empty() {
            warn!("no rays traced. Nothing to render");
            return Ok(());
        }
        sink.render(&self.scene())
    }
}
impl Display for OpticalSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.source {
            Some(source) => writeln!(f, "source: {source}")?,
            None => writeln!(f, "source: none")?,
        }
        for element in &self.elements {
            writeln!(f, "{element}")?;
        }
        write!(f, "rays: {}", self.rays.len())
    }
}

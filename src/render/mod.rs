#![warn(missing_docs)]
//! Sinks consuming the result of a ray-tracing run
//!
//! An [`OpticalSystem`](crate::OpticalSystem) hands a [`RayScene`] to a [`RenderSink`]. The
//! scene only contains plain geometry: the polyline of every ray and the positions of the
//! optical elements.
use nalgebra::Point2;
use uom::si::f64::Length;

use crate::{error::LensrayResult, ray::Ray};

mod plot;
mod recorder;

pub use plot::{PlotBackend, PlotRenderer};
pub use recorder::CsvRecorder;

/// Polyline of a single traced ray
#[derive(Debug, Clone, PartialEq)]
pub struct RayPath {
    /// vertices of the path (axial position, transverse offset)
    pub points: Vec<Point2<Length>>,
    /// false if tracing of the ray stopped with a failure
    pub valid: bool,
}
impl From<&Ray> for RayPath {
    fn from(ray: &Ray) -> Self {
        Self {
            points: ray.path().to_vec(),
            valid: ray.is_valid(),
        }
    }
}

/// Geometry of a traced optical system handed to a [`RenderSink`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RayScene {
    /// ray paths in the order of ray generation
    pub paths: Vec<RayPath>,
    /// axial positions of the optical elements
    pub element_positions: Vec<Length>,
}
impl RayScene {
    /// Returns true if the scene does not contain any ray path.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
    /// Returns the bounding box `(min, max)` of all path points and element positions.
    ///
    /// Element positions only extend the axial range. Non-finite values are ignored. Returns
    /// `None` if the scene contains no finite point.
    #[must_use]
    pub fn bounds(&self) -> Option<(Point2<Length>, Point2<Length>)> {
        let mut points = self
            .paths
            .iter()
            .flat_map(|path| path.points.iter())
            .filter(|p| p.x.is_finite() && p.y.is_finite());
        let first = points.next()?;
        let (mut min, mut max) = (*first, *first);
        for p in points {
            if p.x < min.x {
                min.x = p.x;
            }
            if p.y < min.y {
                min.y = p.y;
            }
            if p.x > max.x {
                max.x = p.x;
            }
            if p.y > max.y {
                max.y = p.y;
            }
        }
        for pos in self.element_positions.iter().filter(|p| p.is_finite()) {
            if *pos < min.x {
                min.x = *pos;
            }
            if *pos > max.x {
                max.x = *pos;
            }
        }
        Some((min, max))
    }
}

/// Trait for all consumers of a traced [`RayScene`] (plots, recorders, ...)
pub trait RenderSink {
    /// Consume the given [`RayScene`].
    ///
    /// # Errors
    ///
    /// This function will return an error if the sink fails to process the scene (e.g. file i/o).
    fn render(&mut self, scene: &RayScene) -> LensrayResult<()>;
}

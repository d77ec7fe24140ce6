#![warn(missing_docs)]
//! Summary report of a ray-tracing run
use std::{fs, path::Path};

use chrono::{DateTime, Local};
use log::info;
use serde::Serialize;
use uom::si::{f64::Length, length::millimeter};

use crate::{
    elements::OpticalElement,
    error::{LensrayError, LensrayResult},
    get_version,
    ray::Ray,
    raytrace::MotionModel,
    OpticalSystem,
};

#[derive(Serialize, Debug, Clone, PartialEq)]
struct ElementRecord {
    element: String,
    position_mm: f64,
    focal_length_mm: f64,
}
impl From<&OpticalElement> for ElementRecord {
    fn from(element: &OpticalElement) -> Self {
        match element {
            OpticalElement::Lens(lens) => Self {
                element: "lens".into(),
                position_mm: lens.position().get::<millimeter>(),
                focal_length_mm: lens.focal_length().get::<millimeter>(),
            },
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
struct RayRecord {
    start_mm: [f64; 2],
    end_mm: [f64; 2],
    angle_rad: f64,
    vertices: usize,
    failure: Option<String>,
}
impl From<&Ray> for RayRecord {
    fn from(ray: &Ray) -> Self {
        let start = ray.start();
        let end = ray.origin();
        Self {
            start_mm: [start.x.get::<millimeter>(), start.y.get::<millimeter>()],
            end_mm: [end.x.get::<millimeter>(), end.y.get::<millimeter>()],
            angle_rad: ray.angle(),
            vertices: ray.path().len(),
            failure: ray.failure().map(ToString::to_string),
        }
    }
}

#[derive(Serialize, Debug, Clone)]
/// Structure for storing the result of a ray-tracing run of an [`OpticalSystem`].
pub struct TraceReport {
    lensray_version: String,
    trace_timestamp: DateTime<Local>,
    source: Option<String>,
    extent_mm: f64,
    motion: MotionModel,
    nr_of_valid_rays: usize,
    nr_of_failed_rays: usize,
    elements: Vec<ElementRecord>,
    rays: Vec<RayRecord>,
}
impl TraceReport {
    /// Creates a new [`TraceReport`] from the last ray-tracing run of the given [`OpticalSystem`].
    #[must_use]
    pub fn new(system: &OpticalSystem, extent: Length) -> Self {
        let nr_of_failed_rays = system.failed_rays().count();
        Self {
            lensray_version: get_version(),
            trace_timestamp: Local::now(),
            source: system.source().map(ToString::to_string),
            extent_mm: extent.get::<millimeter>(),
            motion: system.config().motion(),
            nr_of_valid_rays: system.rays().len() - nr_of_failed_rays,
            nr_of_failed_rays,
            elements: system.elements().iter().map(ElementRecord::from).collect(),
            rays: system.rays().iter().map(RayRecord::from).collect(),
        }
    }
    /// Returns the number of rays traced without failure.
    #[must_use]
    pub const fn nr_of_valid_rays(&self) -> usize {
        self.nr_of_valid_rays
    }
    /// Returns the number of rays whose tracing stopped with a failure.
    #[must_use]
    pub const fn nr_of_failed_rays(&self) -> usize {
        self.nr_of_failed_rays
    }
    /// Serialize this [`TraceReport`] into a YAML string.
    ///
    /// # Errors
    ///
    /// This function will return an error if the serialization fails.
    pub fn to_yaml_string(&self) -> LensrayResult<String> {
        serde_yaml::to_string(self)
            .map_err(|e| LensrayError::Document(format!("serialization of report failed: {e}")))
    }
    /// Write this [`TraceReport`] as YAML file to the given path.
    ///
    /// # Errors
    ///
    /// This function will return an error if the serialization or writing the file fails.
    pub fn save_to_file(&self, path: &Path) -> LensrayResult<()> {
        fs::write(path, self.to_yaml_string()?).map_err(|e| {
            LensrayError::Document(format!("writing report file {} failed: {e}", path.display()))
        })?;
        info!("trace report written to {}", path.display());
        Ok(())
    }
}

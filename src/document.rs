#![warn(missing_docs)]
//! System description files
//!
//! A [`SystemDocument`] describes a complete optical setup (light source, lenses, system extent
//! and ray-tracing configuration) and can be read from or written to a YAML file. All lengths
//! are given in millimeters and all angles in radians.
//!
//! ```yaml
//! file_version: '1'
//! source:
//!   type: divergent
//!   position: 0.0
//!   size: 2.0
//!   divergence: 0.1
//! elements:
//! - position: 50.0
//!   focal_length: 25.0
//! extent: 150.0
//! config:
//!   nr_of_rays: 10
//!   motion: geometric
//!   parallel: true
//! ```
use std::{fs, path::Path};

use log::warn;
use serde::{Deserialize, Serialize};
use uom::si::f64::Length;

use crate::{
    elements::Lens,
    error::{LensrayError, LensrayResult},
    millimeter, radian,
    raytrace::RayTraceConfig,
    sources::{DivergentSource, GaussianBeamSource, LightSource},
    OpticalSystem,
};

/// Version of the system description file format written by this crate
pub const FILE_VERSION: &str = "1";

/// Description of the light source of a [`SystemDocument`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SourceDescription {
    /// [`DivergentSource`] with position, size (mm) and full divergence angle (rad)
    Divergent {
        /// axial position (mm)
        position: f64,
        /// full transverse size (mm)
        size: f64,
        /// full divergence angle (rad)
        divergence: f64,
    },
    /// [`GaussianBeamSource`] with position, waist radius (mm) and wavelength (mm)
    Gaussian {
        /// axial position (mm)
        position: f64,
        /// waist radius (mm)
        waist: f64,
        /// wavelength (mm)
        wavelength: f64,
    },
    /// [`GaussianBeamSource`] defined by its divergence angle (rad) and wavelength (mm)
    GaussianFromDivergence {
        /// axial position (mm)
        position: f64,
        /// divergence angle (rad)
        divergence: f64,
        /// wavelength (mm)
        wavelength: f64,
    },
}
impl SourceDescription {
    /// Create the [`LightSource`] described by this [`SourceDescription`].
    ///
    /// # Errors
    ///
    /// This function will return an error if the source parameters are invalid.
    pub fn build(&self) -> LensrayResult<LightSource> {
        let source: LightSource = match *self {
            Self::Divergent {
                position,
                size,
                divergence,
            } => DivergentSource::new(
                millimeter!(position),
                millimeter!(size),
                radian!(divergence),
            )?
            .into(),
            Self::Gaussian {
                position,
                waist,
                wavelength,
            } => GaussianBeamSource::new(
                millimeter!(position),
                millimeter!(waist),
                millimeter!(wavelength),
            )?
            .into(),
            Self::GaussianFromDivergence {
                position,
                divergence,
                wavelength,
            } => GaussianBeamSource::from_divergence(
                millimeter!(position),
                radian!(divergence),
                millimeter!(wavelength),
            )?
            .into(),
        };
        Ok(source)
    }
}

/// Description of a thin lens of a [`SystemDocument`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LensDescription {
    /// axial position (mm)
    pub position: f64,
    /// focal length (mm). `.inf` denotes a null element.
    pub focal_length: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// The description of a complete optical setup including the ray-tracing parameters.
pub struct SystemDocument {
    file_version: String,
    source: SourceDescription,
    #[serde(default)]
    elements: Vec<LensDescription>,
    extent: f64,
    #[serde(default)]
    config: RayTraceConfig,
}
impl SystemDocument {
    /// Creates a new [`SystemDocument`] with the given source and extent (mm) but without any lens.
    #[must_use]
    pub fn new(source: SourceDescription, extent: f64) -> Self {
        Self {
            file_version: FILE_VERSION.to_string(),
            source,
            elements: Vec::new(),
            extent,
            config: RayTraceConfig::default(),
        }
    }
    /// Add a lens description to this [`SystemDocument`].
    pub fn add_lens(&mut self, lens: LensDescription) {
        self.elements.push(lens);
    }
    /// Returns the source description of this [`SystemDocument`].
    #[must_use]
    pub const fn source(&self) -> &SourceDescription {
        &self.source
    }
    /// Returns the lens descriptions of this [`SystemDocument`].
    #[must_use]
    pub fn elements(&self) -> &[LensDescription] {
        &self.elements
    }
    /// Returns the system extent of this [`SystemDocument`].
    #[must_use]
    pub fn extent(&self) -> Length {
        millimeter!(self.extent)
    }
    /// Returns the ray-tracing configuration of this [`SystemDocument`].
    #[must_use]
    pub const fn config(&self) -> &RayTraceConfig {
        &self.config
    }
    /// Sets the ray-tracing configuration of this [`SystemDocument`].
    pub fn set_config(&mut self, config: RayTraceConfig) {
        self.config = config;
    }
    /// Create a new [`SystemDocument`] from a YAML file at the given path.
    ///
    /// # Errors
    ///
    /// This function will return an error if
    ///   - the given path is not found or readable.
    ///   - the parsing / deserialization of the file failed.
    pub fn from_file(path: &Path) -> LensrayResult<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            LensrayError::Document(format!("cannot read file {} : {}", path.display(), e))
        })?;
        Self::from_string(&contents)
    }
    /// Create a new [`SystemDocument`] from the given YAML string.
    ///
    /// A mismatching file version only issues warnings.
    ///
    /// # Errors
    ///
    /// This function will return an error if the parsing of the string failed.
    pub fn from_string(file_string: &str) -> LensrayResult<Self> {
        let document: Self = serde_yaml::from_str(file_string)
            .map_err(|e| LensrayError::Document(format!("parsing of system failed: {e}")))?;
        if document.file_version != FILE_VERSION {
            warn!("system file version does not match the used lensray version.");
            warn!(
                "read version '{}' <-> program file version '{}'",
                document.file_version, FILE_VERSION
            );
            warn!("This file might have been written by an older or newer version of lensray. The import might not be correct.");
        }
        Ok(document)
    }
    /// Return the YAML representation of this [`SystemDocument`].
    ///
    /// # Errors
    ///
    /// This function will return an error if the serialization fails.
    pub fn to_yaml_string(&self) -> LensrayResult<String> {
        serde_yaml::to_string(self).map_err(|e| {
            LensrayError::Document(format!("serialization of SystemDocument failed: {e}"))
        })
    }
    /// Save this [`SystemDocument`] to a YAML file with the given path.
    ///
    /// # Errors
    ///
    /// This function will return an error if
    ///   - the serialization of the document failed.
    ///   - the file cannot be written.
    pub fn save_to_file(&self, path: &Path) -> LensrayResult<()> {
        fs::write(path, self.to_yaml_string()?).map_err(|e| {
            LensrayError::Document(format!(
                "writing to file path {} failed: {}",
                path.display(),
                e
            ))
        })
    }
    /// Build the described [`OpticalSystem`] and return it together with the system extent.
    ///
    /// # Errors
    ///
    /// This function will return a [`LensrayError::Configuration`] if
    ///   - the source or one of the lenses has invalid parameters.
    ///   - the extent is not finite.
    pub fn build(&self) -> LensrayResult<(OpticalSystem, Length)> {
        let extent = self.extent();
        if !extent.is_finite() {
            return Err(LensrayError::Configuration(
                "system extent must be finite".into(),
            ));
        }
        let mut system = OpticalSystem::new();
        system.set_source(self.source.build()?);
        for lens in &self.elements {
            system.add_element(Lens::new(
                millimeter!(lens.position),
                millimeter!(lens.focal_length),
            )?);
        }
        system.set_config(self.config.clone());
        Ok((system, extent))
    }
}

//! Configuration of a ray-tracing run
use crate::error::{LensrayError, LensrayResult};
use serde::{Deserialize, Serialize};

/// Motion model used for free propagation of a ray between two planes.
#[derive(Default, Debug, PartialEq, Eq, Copy, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MotionModel {
    #[default]
    /// Full trigonometric motion
    ///
    /// A ray advanced by the path length `d` moves by `d·cos(angle)` along the optical axis and by
    /// `d·sin(angle)` transversally.
    Geometric,
    /// Linearized (small-angle) motion
    ///
    /// A ray advanced by `d` moves by `d` along the optical axis and by `d·angle` transversally.
    /// Lenses linearize their deflection in this mode (`out = in - y/f`), so paraxial motion and
    /// paraxial imaging are consistent.
    Paraxial,
}

fn default_nr_of_rays() -> usize {
    10
}
const fn default_parallel() -> bool {
    true
}

#[derive(PartialEq, Eq, Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RayTraceConfigData")]
/// Configuration data for a ray-tracing run of an [`OpticalSystem`](crate::OpticalSystem).
///
/// The config contains the following info
///   - the bundle parameter `n` handed to the light source (see [`RayEmitter::generate_rays`](crate::sources::RayEmitter::generate_rays))
///   - the motion model for free propagation (see [`MotionModel`])
///   - whether rays are traversed in parallel
pub struct RayTraceConfig {
    nr_of_rays: usize,
    motion: MotionModel,
    parallel: bool,
}
/// Unchecked representation of a [`RayTraceConfig`] as read from a document
#[derive(Deserialize)]
struct RayTraceConfigData {
    #[serde(default = "default_nr_of_rays")]
    nr_of_rays: usize,
    #[serde(default)]
    motion: MotionModel,
    #[serde(default = "default_parallel")]
    parallel: bool,
}
impl TryFrom<RayTraceConfigData> for RayTraceConfig {
    type Error = LensrayError;

    fn try_from(data: RayTraceConfigData) -> LensrayResult<Self> {
        let mut config = Self {
            motion: data.motion,
            parallel: data.parallel,
            ..Self::default()
        };
        config.set_nr_of_rays(data.nr_of_rays)?;
        Ok(config)
    }
}
impl Default for RayTraceConfig {
    /// Create a default config for a ray tracing run with the following parameters:
    ///   - bundle parameter: `10`
    ///   - motion model: [`MotionModel::Geometric`]
    ///   - parallel traversal: `true`
    fn default() -> Self {
        Self {
            nr_of_rays: default_nr_of_rays(),
            motion: MotionModel::default(),
            parallel: default_parallel(),
        }
    }
}
impl RayTraceConfig {
    /// Returns the bundle parameter handed to the light source.
    #[must_use]
    pub const fn nr_of_rays(&self) -> usize {
        self.nr_of_rays
    }
    /// Sets the bundle parameter handed to the light source.
    ///
    /// # Errors
    ///
    /// This function will return an error if `nr_of_rays` is zero.
    pub fn set_nr_of_rays(&mut self, nr_of_rays: usize) -> LensrayResult<()> {
        if nr_of_rays == 0 {
            return Err(LensrayError::Configuration(
                "number of rays must be > 0".into(),
            ));
        }
        self.nr_of_rays = nr_of_rays;
        Ok(())
    }
    /// Returns the motion model of this config.
    #[must_use]
    pub const fn motion(&self) -> MotionModel {
        self.motion
    }
    /// Sets the motion model of this config.
    pub fn set_motion(&mut self, motion: MotionModel) {
        self.motion = motion;
    }
    /// Returns true if rays are traversed in parallel.
    #[must_use]
    pub const fn parallel(&self) -> bool {
        self.parallel
    }
    /// Enable or disable parallel traversal of the ray bundle.
    pub fn set_parallel(&mut self, parallel: bool) {
        self.parallel = parallel;
    }
}

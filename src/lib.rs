//! This is the documentation for the **lensray** software package: paraxial ray tracing of a
//! meridional ray bundle through a sequence of ideal thin lenses.
//!
//! A light source ([`sources::DivergentSource`] or [`sources::GaussianBeamSource`]) generates a
//! bundle of [`Ray`]s which is propagated through the [`Lens`]es of an [`OpticalSystem`] up to a
//! given system extent. The resulting ray paths can be handed to a [`render::RenderSink`] (e.g. a
//! plot or a csv recorder) or summarized in a [`TraceReport`].
#![allow(clippy::module_name_repetitions)]

pub mod console;
pub mod document;
pub mod elements;
pub mod error;
pub mod optical_system;
pub mod ray;
pub mod raytrace;
pub mod render;
pub mod report;
pub mod sources;
pub mod utils;

pub use document::SystemDocument;
pub use elements::{Lens, OpticalElement};
pub use optical_system::OpticalSystem;
pub use ray::Ray;
pub use raytrace::{MotionModel, RayTraceConfig};
pub use report::TraceReport;

/// Return the version information of the currently built lensray executable.
#[must_use]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

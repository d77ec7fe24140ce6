//! Plot of all ray paths of a traced optical system
use std::path::{Path, PathBuf};

use log::info;
use plotters::{
    coord::Shift,
    prelude::{
        BitMapBackend, ChartBuilder, DrawingArea, DrawingBackend, IntoDrawingArea, SVGBackend,
    },
    series::LineSeries,
    style::{Color, BLACK, BLUE, RED, WHITE},
};
use strum::{Display, EnumIter, EnumString};
use uom::si::{f64::Length, length::millimeter};

use super::{RayScene, RenderSink};
use crate::error::{LensrayError, LensrayResult};

/// Drawing backend used by a [`PlotRenderer`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum PlotBackend {
    /// `SVGBackend`. Used to create .svg
    #[default]
    Svg,
    /// `BitMapBackend`. Used to create .png
    Png,
}
impl PlotBackend {
    /// Returns the file extension matching this [`PlotBackend`].
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Png => "png",
        }
    }
}

fn render_error<E: std::fmt::Display>(e: E) -> LensrayError {
    LensrayError::Render(format!("plotting failed: {e}"))
}

fn to_mm(length: Length) -> f64 {
    length.get::<millimeter>()
}

/// Axis range covering `min..max` plus a small margin. Degenerated ranges are widened to 1 mm.
fn padded_range(min: f64, max: f64) -> std::ops::Range<f64> {
    let span = max - min;
    if span < f64::EPSILON * max.abs().max(1.0) {
        return (min - 0.5)..(max + 0.5);
    }
    (min - 0.05 * span)..(max + 0.05 * span)
}

/// [`RenderSink`] drawing all ray paths of a [`RayScene`] into an image file
///
/// Valid rays are drawn in blue, failed rays in red. Each optical element is marked by a black
/// vertical line at its axial position.
#[derive(Debug, Clone)]
pub struct PlotRenderer {
    path: PathBuf,
    backend: PlotBackend,
    fig_size: (u32, u32),
}
impl PlotRenderer {
    /// Create a new [`PlotRenderer`] writing to the given file path using the given backend.
    #[must_use]
    pub fn new(path: &Path, backend: PlotBackend) -> Self {
        Self {
            path: path.to_path_buf(),
            backend,
            fig_size: (1000, 600),
        }
    }
    /// Returns the output file path of this [`PlotRenderer`].
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
    /// Returns the [`PlotBackend`] of this [`PlotRenderer`].
    #[must_use]
    pub const fn backend(&self) -> PlotBackend {
        self.backend
    }
    /// Sets the figure size (in pixels) of this [`PlotRenderer`].
    ///
    /// # Errors
    ///
    /// This function will return an error if one of the dimensions is zero.
    pub fn set_fig_size(&mut self, fig_size: (u32, u32)) -> LensrayResult<()> {
        if fig_size.0 == 0 || fig_size.1 == 0 {
            return Err(LensrayError::Render("figure size must be > 0".into()));
        }
        self.fig_size = fig_size;
        Ok(())
    }
    fn draw<DB: DrawingBackend>(
        root: &DrawingArea<DB, Shift>,
        scene: &RayScene,
    ) -> LensrayResult<()> {
        let (min, max) = scene
            .bounds()
            .ok_or_else(|| LensrayError::Render("scene does not contain any point".into()))?;
        root.fill(&WHITE).map_err(render_error)?;
        let x_range = padded_range(to_mm(min.x), to_mm(max.x));
        let y_range = padded_range(to_mm(min.y), to_mm(max.y));
        let (y_low, y_high) = (y_range.start, y_range.end);
        let mut chart = ChartBuilder::on(root)
            .caption("Optical System Ray Tracing", ("sans-serif", 30))
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(x_range, y_range)
            .map_err(render_error)?;
        chart
            .configure_mesh()
            .x_desc("Position (x) [mm]")
            .y_desc("Position (y) [mm]")
            .draw()
            .map_err(render_error)?;
        for ray_path in &scene.paths {
            let color = if ray_path.valid { BLUE } else { RED };
            chart
                .draw_series(LineSeries::new(
                    ray_path
                        .points
                        .iter()
                        .filter(|p| p.x.is_finite() && p.y.is_finite())
                        .map(|p| (to_mm(p.x), to_mm(p.y))),
                    color.stroke_width(1),
                ))
                .map_err(render_error)?;
        }
        for position in scene.element_positions.iter().filter(|p| p.is_finite()) {
            let x = to_mm(*position);
            chart
                .draw_series(LineSeries::new(
                    vec![(x, y_low), (x, y_high)],
                    BLACK.stroke_width(2),
                ))
                .map_err(render_error)?;
        }
        root.present().map_err(render_error)?;
        Ok(())
    }
}
impl RenderSink for PlotRenderer {
    fn render(&mut self, scene: &RayScene) -> LensrayResult<()> {
        match self.backend {
            PlotBackend::Svg => {
                let root = SVGBackend::new(&self.path, self.fig_size).into_drawing_area();
                Self::draw(&root, scene)?;
            }
            PlotBackend::Png => {
                let root = BitMapBackend::new(&self.path, self.fig_size).into_drawing_area();
                Self::draw(&root, scene)?;
            }
        }
        info!("ray plot written to {}", self.path.display());
        Ok(())
    }
}

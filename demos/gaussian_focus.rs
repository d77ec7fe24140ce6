use std::path::Path;

use lensray::{
    degree,
    error::LensrayResult,
    millimeter,
    render::{PlotBackend, PlotRenderer},
    sources::GaussianBeamSource,
    OpticalSystem, TraceReport,
};
use uom::si::length::millimeter;

fn main() -> LensrayResult<()> {
    let source =
        GaussianBeamSource::from_divergence(millimeter!(0.0), degree!(4.0), millimeter!(0.599))?;
    println!("{source}");
    println!(
        "Rayleigh range: {:.3} mm",
        source.rayleigh_range().get::<millimeter>()
    );
    let mut system = OpticalSystem::new();
    system.set_source(source);
    system.add_lens(millimeter!(30.0), millimeter!(0.3))?;
    let extent = millimeter!(200.0);
    system.trace_rays(extent)?;
    println!("{system}");
    for ray in system.rays() {
        println!("{ray}");
    }
    let report = TraceReport::new(&system, extent);
    println!(
        "{} valid / {} failed rays",
        report.nr_of_valid_rays(),
        report.nr_of_failed_rays()
    );
    system.render(&mut PlotRenderer::new(
        Path::new("./gaussian_focus.svg"),
        PlotBackend::Svg,
    ))
}

use clap::Parser;
use env_logger::Env;
use lensray::{
    console::{show_intro, Args, PartialArgs},
    error::{LensrayError, LensrayResult},
    render::{CsvRecorder, PlotRenderer},
    SystemDocument, TraceReport,
};
use log::info;
use std::path::{Path, PathBuf};

fn output_file(directory: &Path, stem: &str, extension: &str) -> PathBuf {
    directory.join(format!("{stem}.{extension}"))
}

fn main() -> LensrayResult<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    //parse CLI arguments
    let args = Args::try_from(PartialArgs::parse())?;
    show_intro();

    //read system description from file
    info!("reading system description {}", args.file_path.display());
    let document = SystemDocument::from_file(&args.file_path)?;
    let (mut system, mut extent) = document.build()?;
    if let Some(e) = args.extent {
        extent = e;
    }
    if let Some(nr_of_rays) = args.nr_of_rays {
        let mut config = system.config().clone();
        config.set_nr_of_rays(nr_of_rays)?;
        system.set_config(config);
    }
    info!("{system}");

    //trace the system
    system.trace_rays(extent)?;

    //write plot, path record and report
    let stem = args
        .file_path
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| LensrayError::Console("cannot extract file stem".into()))?;
    let dir = &args.output_directory;
    system.render(&mut PlotRenderer::new(
        &output_file(dir, stem, args.plot_backend.extension()),
        args.plot_backend,
    ))?;
    system.render(&mut CsvRecorder::new(&output_file(dir, stem, "csv")))?;
    let report_stem = format!("{stem}_report");
    TraceReport::new(&system, extent).save_to_file(&output_file(dir, &report_stem, "yaml"))
}

//! Handling the lensray CLI
//!
//! This module handles the command line parsing as well as basic information (e.g. version information).
use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use clap::{builder::Str, Parser};
use uom::si::f64::Length;

use crate::{
    error::{LensrayError, LensrayResult},
    get_version, millimeter,
    render::PlotBackend,
};

/// Command line arguments for the lensray application.
#[derive(Debug, Clone, PartialEq)]
pub struct Args {
    /// file path of the system description, which should be read in
    pub file_path: PathBuf,
    /// destination directory of the plot, the path record and the report
    pub output_directory: PathBuf,
    /// system extent overriding the value of the system description
    pub extent: Option<Length>,
    /// bundle parameter overriding the value of the system description
    pub nr_of_rays: Option<usize>,
    /// backend of the ray plot
    pub plot_backend: PlotBackend,
}

#[derive(Parser, Debug)]
#[command(author, version = Str::from(get_version()), about, long_about = None)]
pub struct PartialArgs {
    /// file path of the system description (.yaml) to read in
    #[arg(short, long)]
    file: String,

    /// destination directory of the output files. if not defined, same directory as the system description is used
    #[arg(short, long)]
    output_dir: Option<String>,

    /// system extent in mm (overrides the value of the system description)
    #[arg(short, long)]
    extent: Option<f64>,

    /// bundle parameter of the light source (overrides the value of the system description)
    #[arg(short, long)]
    rays: Option<usize>,

    /// image format of the ray plot (svg or png)
    #[arg(long, default_value = "svg")]
    format: String,
}

/// Checks if the passed file path points to an existing `.yaml` / `.yml` file.
fn file_path_is_valid(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .is_some_and(|ext| ext == "yaml" || ext == "yml")
}

fn eval_file_path_input(file_path: &str) -> LensrayResult<PathBuf> {
    let path = PathBuf::from(file_path);
    if file_path_is_valid(&path) {
        Ok(path)
    } else {
        Err(LensrayError::Console(format!(
            "'{file_path}' is not an existing .yaml file"
        )))
    }
}

/// Evaluates the output directory. An empty or missing input selects the parent directory of
/// the system description.
fn eval_output_directory_input(output_dir: Option<&str>, file_path: &Path) -> LensrayResult<PathBuf> {
    match output_dir {
        Some(dir) if !dir.is_empty() => {
            let path = PathBuf::from(dir);
            if path.is_dir() {
                Ok(path)
            } else {
                Err(LensrayError::Console(format!(
                    "output directory '{dir}' does not exist"
                )))
            }
        }
        _ => Ok(file_path
            .parent()
            .map_or_else(PathBuf::new, Path::to_path_buf)),
    }
}

fn eval_extent_input(extent: Option<f64>) -> LensrayResult<Option<Length>> {
    match extent {
        Some(e) if !e.is_finite() => Err(LensrayError::Console(
            "extent must be a finite number".into(),
        )),
        Some(e) => Ok(Some(millimeter!(e))),
        None => Ok(None),
    }
}

fn eval_rays_input(rays: Option<usize>) -> LensrayResult<Option<usize>> {
    match rays {
        Some(0) => Err(LensrayError::Console("number of rays must be > 0".into())),
        rays => Ok(rays),
    }
}

fn eval_format_input(format: &str) -> LensrayResult<PlotBackend> {
    PlotBackend::from_str(&format.to_lowercase()).map_err(|_| {
        LensrayError::Console(format!(
            "unknown plot format '{format}'. Use 'svg' or 'png'"
        ))
    })
}

impl TryFrom<PartialArgs> for Args {
    type Error = LensrayError;

    fn try_from(part_args: PartialArgs) -> LensrayResult<Self> {
        let file_path = eval_file_path_input(&part_args.file)?;
        let output_directory =
            eval_output_directory_input(part_args.output_dir.as_deref(), &file_path)?;
        Ok(Self {
            output_directory,
            extent: eval_extent_input(part_args.extent)?,
            nr_of_rays: eval_rays_input(part_args.rays)?,
            plot_backend: eval_format_input(&part_args.format)?,
            file_path,
        })
    }
}

/// Creates the lensray intro banner.
#[must_use]
fn create_intro() -> String {
    let title = format!(
        "{: ^79}\n",
        "lensray - paraxial ray tracing through ideal lenses"
    );
    let version = format!("{: ^79}\n", "version ".to_owned() + &get_version());
    let rule = "=".repeat(79);
    format!("{rule}\n{title}{version}{rule}")
}

/// Show the lensray banner and version information.
pub fn show_intro() {
    println!("{}", create_intro());
}

#[cfg(test)]
mod test {
    use super::*;
    use assert_matches::assert_matches;
    use std::fs::File;

    fn partial_args(file: &str) -> PartialArgs {
        PartialArgs {
            file: file.to_string(),
            output_dir: None,
            extent: None,
            rays: None,
            format: "svg".into(),
        }
    }
    #[test]
    fn file_path_is_valid_test() {
        let dir = tempfile::tempdir().unwrap();
        let yaml = dir.path().join("system.yaml");
        File::create(&yaml).unwrap();
        let yml = dir.path().join("system.yml");
        File::create(&yml).unwrap();
        let txt = dir.path().join("system.txt");
        File::create(&txt).unwrap();
        assert!(file_path_is_valid(&yaml));
        assert!(file_path_is_valid(&yml));
        assert!(!file_path_is_valid(&txt));
        assert!(!file_path_is_valid(&dir.path().join("nonexistent.yaml")));
        assert!(!file_path_is_valid(dir.path()));
    }
    #[test]
    fn eval_output_directory_input_test() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("system.yaml");
        assert_eq!(
            eval_output_directory_input(None, &file).unwrap(),
            dir.path().to_path_buf()
        );
        assert_eq!(
            eval_output_directory_input(Some(""), &file).unwrap(),
            dir.path().to_path_buf()
        );
        let dir_str = dir.path().to_str().unwrap();
        assert_eq!(
            eval_output_directory_input(Some(dir_str), &file).unwrap(),
            dir.path().to_path_buf()
        );
        assert_matches!(
            eval_output_directory_input(Some("./this_dir_does_not_exist"), &file),
            Err(LensrayError::Console(_))
        );
    }
    #[test]
    fn eval_extent_input_test() {
        assert_eq!(eval_extent_input(None).unwrap(), None);
        assert_eq!(
            eval_extent_input(Some(150.0)).unwrap(),
            Some(millimeter!(150.0))
        );
        assert!(eval_extent_input(Some(f64::NAN)).is_err());
        assert!(eval_extent_input(Some(f64::INFINITY)).is_err());
    }
    #[test]
    fn eval_rays_input_test() {
        assert_eq!(eval_rays_input(None).unwrap(), None);
        assert_eq!(eval_rays_input(Some(5)).unwrap(), Some(5));
        assert!(eval_rays_input(Some(0)).is_err());
    }
    #[test]
    fn eval_format_input_test() {
        assert_eq!(eval_format_input("svg").unwrap(), PlotBackend::Svg);
        assert_eq!(eval_format_input("PNG").unwrap(), PlotBackend::Png);
        assert_matches!(eval_format_input("pdf"), Err(LensrayError::Console(_)));
    }
    #[test]
    fn try_from_partial_args() {
        let dir = tempfile::tempdir().unwrap();
        let yaml = dir.path().join("system.yaml");
        File::create(&yaml).unwrap();
        let mut part_args = partial_args(yaml.to_str().unwrap());
        part_args.rays = Some(3);
        part_args.format = "png".into();
        let args = Args::try_from(part_args).unwrap();
        assert_eq!(args.file_path, yaml);
        assert_eq!(args.output_directory, dir.path().to_path_buf());
        assert_eq!(args.extent, None);
        assert_eq!(args.nr_of_rays, Some(3));
        assert_eq!(args.plot_backend, PlotBackend::Png);
        assert_matches!(
            Args::try_from(partial_args("./nonexistent.yaml")),
            Err(LensrayError::Console(_))
        );
    }
    #[test]
    fn parse_command_line() {
        let part_args =
            PartialArgs::try_parse_from(["lensray", "-f", "system.yaml", "-r", "4", "-e", "12.5"])
                .unwrap();
        assert_eq!(part_args.file, "system.yaml");
        assert_eq!(part_args.rays, Some(4));
        assert_eq!(part_args.extent, Some(12.5));
        assert_eq!(part_args.format, "svg");
        assert!(part_args.output_dir.is_none());
        assert!(PartialArgs::try_parse_from(["lensray"]).is_err());
    }
    #[test]
    fn create_intro_test() {
        let intro = create_intro();
        assert!(intro.contains("lensray - paraxial ray tracing through ideal lenses"));
        assert!(intro.contains(&get_version()));
    }
}

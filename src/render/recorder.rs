//! Recorder writing all ray paths into a csv file
use std::path::{Path, PathBuf};

use log::info;
use serde::Serialize;
use uom::si::length::millimeter;

use super::{RayScene, RenderSink};
use crate::error::{LensrayError, LensrayResult};

#[derive(Serialize)]
struct PathRecord {
    ray: usize,
    vertex: usize,
    axial_mm: f64,
    transverse_mm: f64,
    valid: bool,
}

/// [`RenderSink`] writing one csv record per path vertex
///
/// The file has the columns `ray, vertex, axial_mm, transverse_mm, valid`. Rays and vertices
/// are numbered in the order of ray generation and propagation.
#[derive(Debug, Clone)]
pub struct CsvRecorder {
    path: PathBuf,
}
impl CsvRecorder {
    /// Create a new [`CsvRecorder`] writing to the given file path.
    #[must_use]
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }
    /// Returns the output file path of this [`CsvRecorder`].
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}
impl RenderSink for CsvRecorder {
    fn render(&mut self, scene: &RayScene) -> LensrayResult<()> {
        let mut writer = csv::Writer::from_path(&self.path).map_err(|e| {
            LensrayError::Render(format!("could not create csv file: {e}"))
        })?;
        for (ray, ray_path) in scene.paths.iter().enumerate() {
            for (vertex, point) in ray_path.points.iter().enumerate() {
                writer
                    .serialize(PathRecord {
                        ray,
                        vertex,
                        axial_mm: point.x.get::<millimeter>(),
                        transverse_mm: point.y.get::<millimeter>(),
                        valid: ray_path.valid,
                    })
                    .map_err(|e| LensrayError::Render(format!("could not write record: {e}")))?;
            }
        }
        writer
            .flush()
            .map_err(|e| LensrayError::Render(format!("could not write csv file: {e}")))?;
        info!("ray paths written to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{millimeter, render::RayPath};
    use approx::assert_abs_diff_eq;
    use tempfile::NamedTempFile;
    #[test]
    fn render() {
        let path = NamedTempFile::new().unwrap();
        let mut recorder = CsvRecorder::new(path.path());
        assert_eq!(recorder.path(), path.path());
        let scene = RayScene {
            paths: vec![
                RayPath {
                    points: vec![millimeter!(0.0, 1.0), millimeter!(10.0, 1.5)],
                    valid: true,
                },
                RayPath {
                    points: vec![millimeter!(0.0, -1.0)],
                    valid: false,
                },
            ],
            element_positions: vec![millimeter!(10.0)],
        };
        recorder.render(&scene).unwrap();
        let mut reader = csv::Reader::from_path(path.path()).unwrap();
        assert_eq!(
            reader.headers().unwrap().iter().collect::<Vec<_>>(),
            vec!["ray", "vertex", "axial_mm", "transverse_mm", "valid"]
        );
        let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(records.len(), 3);
        let expected = [
            ("0", "0", 0.0, 1.0, "true"),
            ("0", "1", 10.0, 1.5, "true"),
            ("1", "0", 0.0, -1.0, "false"),
        ];
        for (record, (ray, vertex, axial, transverse, valid)) in records.iter().zip(expected) {
            assert_eq!(&record[0], ray);
            assert_eq!(&record[1], vertex);
            assert_abs_diff_eq!(record[2].parse::<f64>().unwrap(), axial, epsilon = 1e-12);
            assert_abs_diff_eq!(record[3].parse::<f64>().unwrap(), transverse, epsilon = 1e-12);
            assert_eq!(&record[4], valid);
        }
    }
    #[test]
    fn render_invalid_path() {
        let dir = tempfile::tempdir().unwrap();
        let mut recorder = CsvRecorder::new(&dir.path().join("missing").join("paths.csv"));
        assert!(matches!(
            recorder.render(&RayScene::default()),
            Err(LensrayError::Render(_))
        ));
    }
}

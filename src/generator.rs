use std::path::{Path, PathBuf};

use crate::config::DEFAULT_OUTPUT_DIR;
use crate::detection::DetectionPipeline;
use crate::error::{Error, Result};
use crate::models::Coordinate;
use crate::render::save_path_image;
use crate::route::{exclude_outliers, leftmost_point, nearest_neighbor_path};

/// Result of one successful run over a map image
#[derive(Debug, Clone)]
pub struct GeneratedPath {
    /// Markers found before outlier exclusion
    pub detected: usize,
    /// Markers dropped by the dead-zone filter
    pub excluded: usize,
    pub path: Vec<Coordinate>,
    /// The annotated image that was written
    pub output: PathBuf,
}

/// Detect, filter, route and render one map screenshot
#[derive(Debug, Clone)]
pub struct PathGenerator {
    pub detector: DetectionPipeline,
    pub output_dir: PathBuf,
}

impl PathGenerator {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            detector: DetectionPipeline::new(),
            output_dir: output_dir.into(),
        }
    }

    pub fn with_detector(mut self, detector: DetectionPipeline) -> Self {
        self.detector = detector;
        self
    }

    /// Build the route for the markers on `image_path`, labelled `label`.
    ///
    /// `Error::NoMarkers` and `Error::ImageDecode` mean there was nothing to
    /// route; no file is written in either case.
    pub fn generate(&self, image_path: &Path, label: &str) -> Result<GeneratedPath> {
        let all_points = self.detector.detect_file(image_path)?;
        tracing::info!("detected {} circles on {}", all_points.len(), image_path.display());
        if all_points.is_empty() {
            return Err(Error::NoMarkers);
        }

        let filtered = exclude_outliers(&all_points);
        let excluded = all_points.len() - filtered.len();
        tracing::info!("filtered {} outlier points", excluded);

        let start = leftmost_point(&filtered).ok_or(Error::NoMarkers)?;
        let path = nearest_neighbor_path(start, &filtered);

        let output = save_path_image(image_path, &path, label, &self.output_dir)?;
        tracing::info!("path visualization saved to {}", output.display());

        Ok(GeneratedPath {
            detected: all_points.len(),
            excluded,
            path,
            output,
        })
    }
}

impl Default for PathGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT_DIR)
    }
}

pub mod preprocessing;
pub mod hough;
pub mod steps;

use image::{DynamicImage, ImageReader};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::{CLOSE_RADIUS, HoughParams, HsvBand};
use crate::error::{Error, Result};
use crate::models::{Circle, Coordinate};
use crate::pipeline::Pipeline;
use steps::{CloseStep, HoughCircleStep, HsvMaskStep};

/// Red marker circle detector
#[derive(Debug, Clone)]
pub struct DetectionPipeline {
    // Detection parameters
    pub bands: Vec<HsvBand>,
    pub close_radius: u8,
    pub hough: HoughParams,
    /// Where to dump intermediate images, if anywhere
    pub debug_out: Option<PathBuf>,
}

impl DetectionPipeline {
    pub fn new() -> Self {
        Self {
            bands: HsvBand::red().to_vec(),
            close_radius: CLOSE_RADIUS,
            hough: HoughParams::default(),
            debug_out: None,
        }
    }

    pub fn with_debug(mut self, dir: impl Into<PathBuf>) -> Self {
        self.debug_out = Some(dir.into());
        self
    }

    /// Build the step pipeline: color mask, closing, Hough transform
    pub fn build(&self) -> Result<Pipeline> {
        let pipeline = Pipeline::new()
            .add_step(Arc::new(HsvMaskStep {
                bands: self.bands.clone(),
            }))
            .add_step(Arc::new(CloseStep {
                radius: self.close_radius,
            }))
            .add_step(Arc::new(HoughCircleStep { params: self.hough }));

        match &self.debug_out {
            Some(dir) => pipeline.with_debug(dir),
            None => Ok(pipeline),
        }
    }

    /// Run the full detection pipeline on an image
    pub fn detect(&self, img: &DynamicImage) -> Result<Vec<Circle>> {
        let results = self.build()?.run(img.clone())?;
        let circles: Vec<Circle> = results.iter().filter_map(|item| item.circle).collect();

        for (i, circle) in circles.iter().enumerate() {
            tracing::debug!(
                "circle {}: center=({:.1}, {:.1}) radius={:.1} votes={}",
                i + 1,
                circle.center_x,
                circle.center_y,
                circle.radius,
                circle.votes
            );
        }

        Ok(circles)
    }

    /// Marker centers, rounded to pixels, strongest detection first
    pub fn detect_markers(&self, img: &DynamicImage) -> Result<Vec<Coordinate>> {
        Ok(self.detect(img)?.iter().map(Circle::coordinate).collect())
    }

    /// Load an image and detect its markers
    pub fn detect_file(&self, path: &Path) -> Result<Vec<Coordinate>> {
        let img = load_image(path)?;
        tracing::debug!("image loaded: {}x{}", img.width(), img.height());
        self.detect_markers(&img)
    }
}

impl Default for DetectionPipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Open and decode an image, mapping every failure to `Error::ImageDecode`
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    let decode_error = |source| Error::ImageDecode {
        path: path.to_path_buf(),
        source,
    };
    ImageReader::open(path)
        .map_err(|e| decode_error(image::ImageError::IoError(e)))?
        .with_guessed_format()
        .map_err(|e| decode_error(image::ImageError::IoError(e)))?
        .decode()
        .map_err(decode_error)
}

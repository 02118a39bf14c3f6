use image::DynamicImage;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::models::Circle;

/// Data that flows through the pipeline
/// Each PipelineData is either the whole working image or one detected circle
#[derive(Clone)]
pub struct PipelineData {
    /// The working image (color, mask, or a crop around a circle)
    pub image: DynamicImage,

    /// Reference to the original image (shared efficiently via Arc)
    pub original: Arc<DynamicImage>,

    /// The circle this item represents (None means full image)
    pub circle: Option<Circle>,
}

impl PipelineData {
    /// Create PipelineData for a full image
    pub fn from_image(image: DynamicImage) -> Self {
        let original = Arc::new(image.clone());
        Self {
            image,
            original,
            circle: None,
        }
    }

    /// Create PipelineData for a detected circle
    pub fn from_circle(image: DynamicImage, original: Arc<DynamicImage>, circle: Circle) -> Self {
        Self {
            image,
            original,
            circle: Some(circle),
        }
    }

    /// Same item with a new working image
    pub fn with_image(&self, image: DynamicImage) -> Self {
        Self {
            image,
            original: self.original.clone(),
            circle: self.circle,
        }
    }
}

/// Debug configuration for pipeline execution
#[derive(Clone, Debug)]
pub struct DebugConfig {
    /// Root directory for debug outputs
    pub output_dir: PathBuf,
}

impl DebugConfig {
    /// Write every item of a step into `<NN>_<step_name>/<MM>.png`
    fn save_step(&self, step_idx: usize, step_name: &str, data: &[PipelineData]) -> Result<()> {
        let step_dir_name = format!("{:02}_{}", step_idx, step_name.to_lowercase().replace(' ', "_"));
        let step_dir = self.output_dir.join(&step_dir_name);
        std::fs::create_dir_all(&step_dir)?;

        for (idx, item) in data.iter().enumerate() {
            item.image.save(step_dir.join(format!("{:02}.png", idx + 1)))?;
        }

        tracing::debug!("saved {} debug images to {}/", data.len(), step_dir_name);
        Ok(())
    }
}

/// Trait that all pipeline steps must implement
pub trait PipelineStep: Send + Sync {
    /// Process data and return transformed data
    /// Steps can split data (1 → many), filter (many → fewer), or transform (many → many)
    fn process(&self, data: Vec<PipelineData>) -> Result<Vec<PipelineData>>;

    /// Human-readable name for this step (used in logs and debug directories)
    fn name(&self) -> &str;
}

/// Composable pipeline builder
#[derive(Clone, Default)]
pub struct Pipeline {
    steps: Vec<Arc<dyn PipelineStep>>,
    debug: Option<DebugConfig>,
}

impl Pipeline {
    /// Create a new empty pipeline
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable debug mode with output directory
    /// The directory must be empty or non-existent
    pub fn with_debug(mut self, output_dir: impl AsRef<Path>) -> Result<Self> {
        let output_dir = output_dir.as_ref().to_path_buf();
        if output_dir.exists() {
            if std::fs::read_dir(&output_dir)?.next().is_some() {
                return Err(Error::DebugDirNotEmpty(output_dir));
            }
        } else {
            std::fs::create_dir_all(&output_dir)?;
        }

        self.debug = Some(DebugConfig { output_dir });
        Ok(self)
    }

    /// Add a processing step to the pipeline
    pub fn add_step(mut self, step: Arc<dyn PipelineStep>) -> Self {
        self.steps.push(step);
        self
    }

    /// Run all steps sequentially on an input image
    pub fn run(&self, input: DynamicImage) -> Result<Vec<PipelineData>> {
        self.run_partial(input, self.steps.len())
    }

    /// Run the pipeline but stop after `num_steps` steps (useful for debugging)
    pub fn run_partial(&self, input: DynamicImage, num_steps: usize) -> Result<Vec<PipelineData>> {
        let mut data = vec![PipelineData::from_image(input)];

        if let Some(debug) = &self.debug {
            debug.save_step(0, "input", &data)?;
        }

        for (step_idx, step) in self.steps.iter().take(num_steps).enumerate() {
            tracing::debug!("running step: {} (processing {} items)", step.name(), data.len());

            data = step.process(data)?;

            if let Some(debug) = &self.debug {
                debug.save_step(step_idx + 1, step.name(), &data)?;
            }

            tracing::debug!("  → {} items", data.len());
        }

        Ok(data)
    }
}

pub mod config;
pub mod detection;
pub mod error;
pub mod generator;
pub mod hunt;
pub mod models;
pub mod pipeline;
pub mod render;
pub mod report;
pub mod route;

pub use detection::DetectionPipeline;
pub use error::{Error, Result};
pub use generator::{GeneratedPath, PathGenerator};
pub use hunt::{Catalog, Expansion, HuntMark};
pub use models::{Circle, Coordinate};
pub use pipeline::{DebugConfig, Pipeline, PipelineData, PipelineStep};

use anyhow::Result;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

use crate::frame::Frame;
use crate::params::{EdgeKind, FilterKind, ProcessingParams};
use crate::processing::steps::*;

/// Debug configuration for pipeline execution
#[derive(Clone, Debug)]
pub struct DebugConfig {
    /// Root directory for debug outputs
    pub output_dir: PathBuf,
}

/// Context available to all pipeline steps
#[derive(Clone, Debug, Default)]
pub struct PipelineContext {
    pub verbose: bool,
    pub debug: Option<DebugConfig>,
}

impl PipelineContext {
    fn debug_dir(&self) -> Option<&Path> {
        self.debug.as_ref().map(|d| d.output_dir.as_path())
    }
}

/// Trait that all pipeline steps must implement
pub trait PipelineStep: Send + Sync {
    /// Transform one frame into the next
    fn process(&self, frame: Frame, context: &PipelineContext) -> Result<Frame>;

    /// Human-readable name for this step (used in logs and debug dumps)
    fn name(&self) -> &str;
}

/// Composable pipeline builder
pub struct Pipeline {
    steps: Vec<Arc<dyn PipelineStep>>,
    context: PipelineContext,
}

impl Pipeline {
    /// Create a new empty pipeline
    pub fn new() -> Self {
        Self {
            steps: Vec::new(),
            context: PipelineContext::default(),
        }
    }

    /// The fixed denoise → edge sequence behind "Apply". `None` stages are
    /// left out, so None/None yields an empty pipeline.
    pub fn from_params(params: &ProcessingParams) -> Self {
        let k = params.effective_kernel_size();
        let mut pipeline = Self::new();

        pipeline = match params.filter {
            FilterKind::None => pipeline,
            FilterKind::Gaussian => {
                pipeline.add_step(Arc::new(GaussianBlurStep { kernel_size: k }))
            }
            FilterKind::Median => pipeline.add_step(Arc::new(MedianBlurStep { kernel_size: k })),
        };

        match params.edge {
            EdgeKind::None => pipeline,
            EdgeKind::Sobel => pipeline.add_step(Arc::new(SobelStep { kernel_size: k })),
            EdgeKind::Canny => pipeline.add_step(Arc::new(CannyStep {
                low_threshold: params.canny_low,
                high_threshold: params.canny_high,
            })),
            EdgeKind::Laplacian => pipeline.add_step(Arc::new(LaplacianStep)),
        }
    }

    /// Enable verbose output
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.context.verbose = verbose;
        self
    }

    /// Enable debug mode with output directory
    /// The directory must be empty or non-existent
    pub fn with_debug(mut self, output_dir: PathBuf) -> Result<Self> {
        if output_dir.exists() {
            let entries = std::fs::read_dir(&output_dir)?;
            if entries.count() > 0 {
                return Err(anyhow::anyhow!(
                    "Debug directory is not empty: {}",
                    output_dir.display()
                ));
            }
        } else {
            std::fs::create_dir_all(&output_dir)?;
        }

        self.context.debug = Some(DebugConfig { output_dir });

        Ok(self)
    }

    /// Add a processing step to the pipeline
    pub fn add_step(mut self, step: Arc<dyn PipelineStep>) -> Self {
        self.steps.push(step);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Step names in execution order
    pub fn step_names(&self) -> Vec<&str> {
        self.steps.iter().map(|s| s.name()).collect()
    }

    /// Run every step in order over `input`
    pub fn run(&self, input: Frame) -> Result<Frame> {
        if let Some(dir) = self.context.debug_dir() {
            save_debug_frame(dir, "00_input", &input)?;
            debug!("saved 00_input/01.png");
        }

        let mut frame = input;
        for (step_idx, step) in self.steps.iter().enumerate() {
            let (w, h) = frame.dimensions();
            if self.context.verbose {
                info!(step = step.name(), width = w, height = h, "running step");
            } else {
                debug!(step = step.name(), width = w, height = h, "running step");
            }

            frame = step.process(frame, &self.context)?;

            if let Some(dir) = self.context.debug_dir() {
                let step_dir_name = format!(
                    "{:02}_{}",
                    step_idx + 1,
                    step.name().to_lowercase().replace(' ', "_")
                );
                save_debug_frame(dir, &step_dir_name, &frame)?;
                debug!("saved {}/01.png", step_dir_name);
            }
        }

        Ok(frame)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

fn save_debug_frame(root: &Path, step_dir_name: &str, frame: &Frame) -> Result<()> {
    let step_dir = root.join(step_dir_name);
    std::fs::create_dir_all(&step_dir)?;
    let output_path = step_dir.join("01.png");
    frame
        .to_dynamic_8bit()
        .save(&output_path)
        .map_err(|e| anyhow::anyhow!("Failed to save debug image: {}", e))
}

use crate::frame::Frame;
use crate::pipeline::{PipelineContext, PipelineStep};
use crate::processing::filters;
use anyhow::Result;
use tracing::debug;

/// Apply Gaussian blur
pub struct GaussianBlurStep {
    /// Odd side length of the square kernel
    pub kernel_size: u32,
}

impl PipelineStep for GaussianBlurStep {
    fn process(&self, frame: Frame, _context: &PipelineContext) -> Result<Frame> {
        Ok(filters::gaussian_blur(frame, self.kernel_size))
    }

    fn name(&self) -> &str {
        "Gaussian Blur"
    }
}

/// Apply median blur
pub struct MedianBlurStep {
    pub kernel_size: u32,
}

impl PipelineStep for MedianBlurStep {
    fn process(&self, frame: Frame, _context: &PipelineContext) -> Result<Frame> {
        if frame.is_gradient() {
            debug!("median blur saturates float input to 8-bit");
        }
        Ok(filters::median_blur(frame, self.kernel_size))
    }

    fn name(&self) -> &str {
        "Median Blur"
    }
}

/// Horizontal Sobel derivative on the grayscale image
pub struct SobelStep {
    /// Aperture, same value as the blur kernel size
    pub kernel_size: u32,
}

impl PipelineStep for SobelStep {
    fn process(&self, frame: Frame, _context: &PipelineContext) -> Result<Frame> {
        let gradient = filters::sobel_x(&frame, self.kernel_size);
        debug!("sobel output is unnormalized float; previews and saves saturate it");
        Ok(gradient)
    }

    fn name(&self) -> &str {
        "Sobel"
    }
}

/// Detect edges using Canny
pub struct CannyStep {
    pub low_threshold: u8,
    pub high_threshold: u8,
}

impl PipelineStep for CannyStep {
    fn process(&self, frame: Frame, _context: &PipelineContext) -> Result<Frame> {
        Ok(filters::canny_edges(
            &frame,
            self.low_threshold,
            self.high_threshold,
        ))
    }

    fn name(&self) -> &str {
        "Canny"
    }
}

/// Second derivative edge response on the grayscale image
pub struct LaplacianStep;

impl PipelineStep for LaplacianStep {
    fn process(&self, frame: Frame, _context: &PipelineContext) -> Result<Frame> {
        let response = filters::laplacian(&frame);
        debug!("laplacian output is unnormalized float; previews and saves saturate it");
        Ok(response)
    }

    fn name(&self) -> &str {
        "Laplacian"
    }
}

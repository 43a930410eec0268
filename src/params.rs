use std::fmt;

/// Largest kernel size the UI offers
pub const MAX_KERNEL_SIZE: u32 = 15;

/// Smoothing filter applied before edge detection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum FilterKind {
    #[default]
    None,
    Gaussian,
    Median,
}

impl FilterKind {
    pub const ALL: [FilterKind; 3] = [FilterKind::None, FilterKind::Gaussian, FilterKind::Median];
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FilterKind::None => "None",
            FilterKind::Gaussian => "Gaussian",
            FilterKind::Median => "Median",
        };
        f.write_str(name)
    }
}

/// Edge operator applied after the smoothing filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum EdgeKind {
    #[default]
    None,
    Sobel,
    Canny,
    Laplacian,
}

impl EdgeKind {
    pub const ALL: [EdgeKind; 4] = [
        EdgeKind::None,
        EdgeKind::Sobel,
        EdgeKind::Canny,
        EdgeKind::Laplacian,
    ];
}

impl fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EdgeKind::None => "None",
            EdgeKind::Sobel => "Sobel",
            EdgeKind::Canny => "Canny",
            EdgeKind::Laplacian => "Laplacian",
        };
        f.write_str(name)
    }
}

/// Everything one press of "Apply" needs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessingParams {
    pub filter: FilterKind,
    pub edge: EdgeKind,
    /// Raw slider value; see [`ProcessingParams::effective_kernel_size`]
    pub kernel_size: u32,
    pub canny_low: u8,
    pub canny_high: u8,
}

impl ProcessingParams {
    pub fn new(filter: FilterKind, edge: EdgeKind) -> Self {
        Self {
            filter,
            edge,
            ..Self::default()
        }
    }

    pub fn with_kernel_size(mut self, kernel_size: u32) -> Self {
        self.kernel_size = kernel_size;
        self
    }

    pub fn with_canny_thresholds(mut self, low: u8, high: u8) -> Self {
        self.canny_low = low;
        self.canny_high = high;
        self
    }

    /// Kernel size actually used by the filters and the Sobel aperture
    pub fn effective_kernel_size(&self) -> u32 {
        effective_kernel_size(self.kernel_size)
    }
}

impl Default for ProcessingParams {
    fn default() -> Self {
        Self {
            filter: FilterKind::None,
            edge: EdgeKind::None,
            kernel_size: 1,
            canny_low: 0,
            canny_high: 0,
        }
    }
}

/// Clamp into `[1, MAX_KERNEL_SIZE]` and bump even sizes to the next odd one.
pub fn effective_kernel_size(kernel_size: u32) -> u32 {
    let k = kernel_size.clamp(1, MAX_KERNEL_SIZE);
    if k % 2 == 0 { k + 1 } else { k }
}

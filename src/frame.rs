use image::{DynamicImage, GrayImage, ImageBuffer, Luma, Rgb, RgbImage};

/// Single-channel floating point image produced by the derivative operators
pub type GradientImage = ImageBuffer<Luma<f64>, Vec<f64>>;

/// In-memory image held by the editor session.
///
/// Decoded files always become [`Frame::Color`]. Canny produces
/// [`Frame::Gray`], Sobel and Laplacian produce [`Frame::Gradient`] whose
/// samples are signed and unbounded.
#[derive(Debug, Clone, PartialEq)]
pub enum Frame {
    Gray(GrayImage),
    Color(RgbImage),
    Gradient(GradientImage),
}

impl Frame {
    /// Promote any decoded image to 3-channel 8-bit color
    pub fn from_dynamic(image: DynamicImage) -> Self {
        Frame::Color(image.to_rgb8())
    }

    pub fn width(&self) -> u32 {
        self.dimensions().0
    }

    pub fn height(&self) -> u32 {
        self.dimensions().1
    }

    pub fn dimensions(&self) -> (u32, u32) {
        match self {
            Frame::Gray(img) => img.dimensions(),
            Frame::Color(img) => img.dimensions(),
            Frame::Gradient(img) => img.dimensions(),
        }
    }

    pub fn channels(&self) -> u8 {
        match self {
            Frame::Color(_) => 3,
            Frame::Gray(_) | Frame::Gradient(_) => 1,
        }
    }

    pub fn is_single_channel(&self) -> bool {
        self.channels() == 1
    }

    pub fn is_gradient(&self) -> bool {
        matches!(self, Frame::Gradient(_))
    }

    pub fn is_empty(&self) -> bool {
        let (w, h) = self.dimensions();
        w == 0 || h == 0
    }

    /// 8-bit luma view of the frame (BT.601 weights). Gradients are saturated.
    pub fn to_luma8(&self) -> GrayImage {
        match self {
            Frame::Gray(img) => img.clone(),
            Frame::Color(img) => GrayImage::from_fn(img.width(), img.height(), |x, y| {
                Luma([bt601_luma(img.get_pixel(x, y))])
            }),
            Frame::Gradient(img) => saturate_to_gray(img),
        }
    }

    /// Floating point luma, the input of the derivative operators
    pub fn to_luma_f64(&self) -> GradientImage {
        match self {
            Frame::Gradient(img) => img.clone(),
            other => {
                let gray = other.to_luma8();
                GradientImage::from_fn(gray.width(), gray.height(), |x, y| {
                    Luma([gray.get_pixel(x, y)[0] as f64])
                })
            }
        }
    }

    /// Encodable representation (used for saving and debug dumps)
    pub fn to_dynamic_8bit(&self) -> DynamicImage {
        match self {
            Frame::Gray(img) => DynamicImage::ImageLuma8(img.clone()),
            Frame::Color(img) => DynamicImage::ImageRgb8(img.clone()),
            Frame::Gradient(img) => DynamicImage::ImageLuma8(saturate_to_gray(img)),
        }
    }
}

/// `0.299 R + 0.587 G + 0.114 B` in 14-bit fixed point, rounded
fn bt601_luma(p: &Rgb<u8>) -> u8 {
    const R: u32 = 4899;
    const G: u32 = 9617;
    const B: u32 = 1868;
    let [r, g, b] = p.0;
    ((r as u32 * R + g as u32 * G + b as u32 * B + (1 << 13)) >> 14) as u8
}

/// Round and clamp every sample into `[0, 255]`. NaN maps to 0.
pub fn saturate_to_gray(img: &GradientImage) -> GrayImage {
    GrayImage::from_fn(img.width(), img.height(), |x, y| {
        Luma([img.get_pixel(x, y)[0].round().clamp(0.0, 255.0) as u8])
    })
}

/// Stretch the sample range linearly onto `[0, 255]`.
/// A constant image maps to all zeros.
pub fn normalize_to_gray(img: &GradientImage) -> GrayImage {
    let (min, max) = img
        .pixels()
        .map(|p| p[0])
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });

    let range = max - min;
    if !range.is_finite() || range <= 0.0 {
        return GrayImage::new(img.width(), img.height());
    }

    GrayImage::from_fn(img.width(), img.height(), |x, y| {
        let v = (img.get_pixel(x, y)[0] - min) / range * 255.0;
        Luma([v.round().clamp(0.0, 255.0) as u8])
    })
}

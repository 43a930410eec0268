use image::imageops::{self, FilterType};
use image::{DynamicImage, RgbaImage};

use crate::frame::{Frame, normalize_to_gray, saturate_to_gray};

/// Display-ready buffers for the two preview panes
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Preview {
    pub original: Option<RgbaImage>,
    pub processed: Option<RgbaImage>,
}

/// Expand to RGBA and stretch to exactly `width` × `height`.
///
/// Returns `None` when either the frame or the target is zero-sized.
pub fn render_frame(
    frame: &Frame,
    width: u32,
    height: u32,
    normalize_gradient: bool,
) -> Option<RgbaImage> {
    if frame.is_empty() || width == 0 || height == 0 {
        return None;
    }

    let rgba = match frame {
        Frame::Gray(img) => DynamicImage::ImageLuma8(img.clone()).to_rgba8(),
        Frame::Color(img) => DynamicImage::ImageRgb8(img.clone()).to_rgba8(),
        Frame::Gradient(img) => {
            let gray = if normalize_gradient {
                normalize_to_gray(img)
            } else {
                saturate_to_gray(img)
            };
            DynamicImage::ImageLuma8(gray).to_rgba8()
        }
    };

    if rgba.dimensions() == (width, height) {
        return Some(rgba);
    }
    Some(imageops::resize(&rgba, width, height, FilterType::CatmullRom))
}

use edgelab::{EditorConfig, EditorSession, Frame};
use image::{ImageBuffer, Rgb, RgbImage};
use tempfile::NamedTempFile;

/// Writes `img` to a temp PNG and returns the temp file.
/// The file will be automatically cleaned up when dropped.
pub fn write_test_png(img: &RgbImage) -> NamedTempFile {
    let file = tempfile::Builder::new()
        .suffix(".png")
        .tempfile()
        .expect("Failed to create temp image file");
    img.save_with_format(file.path(), image::ImageFormat::Png)
        .expect("Failed to save test image");
    file
}

/// Uniform black image
pub fn black_image(width: u32, height: u32) -> RgbImage {
    ImageBuffer::from_pixel(width, height, Rgb([0u8, 0u8, 0u8]))
}

/// Black left half, white right half
pub fn vertical_edge_image(width: u32, height: u32) -> RgbImage {
    ImageBuffer::from_fn(width, height, |x, _| {
        if x < width / 2 {
            Rgb([0u8, 0u8, 0u8])
        } else {
            Rgb([255u8, 255u8, 255u8])
        }
    })
}

/// Deterministic pseudo-random color noise
pub fn noise_image(width: u32, height: u32) -> RgbImage {
    let mut state = 0x2545_f491_u32;
    ImageBuffer::from_fn(width, height, |_, _| {
        let mut next = || {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            (state & 0xff) as u8
        };
        Rgb([next(), next(), next()])
    })
}

/// Session with `img` installed as the loaded image
pub fn session_with(img: RgbImage) -> EditorSession {
    let mut session = EditorSession::new(EditorConfig::default());
    session.set_image(Frame::Color(img));
    session
}

/// Every filter/edge combination the UI can produce
pub fn all_param_combinations() -> Vec<edgelab::ProcessingParams> {
    let mut combos = Vec::new();
    for filter in edgelab::FilterKind::ALL {
        for edge in edgelab::EdgeKind::ALL {
            combos.push(
                edgelab::ProcessingParams::new(filter, edge)
                    .with_kernel_size(3)
                    .with_canny_thresholds(50, 150),
            );
        }
    }
    combos
}

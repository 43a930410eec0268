use image::{GrayImage, Luma, RgbImage};
use imageproc::edges::canny;
use imageproc::filter::median_filter;
use tracing::debug;

use crate::frame::{Frame, GradientImage, saturate_to_gray};
use crate::kernels;

/// Gaussian blur with a square `ksize` × `ksize` kernel. 8-bit frames are
/// filtered in `f64` and rounded back, so flat regions keep their value.
pub fn gaussian_blur(frame: Frame, ksize: u32) -> Frame {
    if ksize <= 1 {
        return frame;
    }
    let kernel = kernels::gaussian_kernel(ksize);
    let blur = |plane: &GradientImage| kernels::correlate_separable(plane, &kernel, &kernel);

    match frame {
        Frame::Gray(img) => {
            let plane = GradientImage::from_fn(img.width(), img.height(), |x, y| {
                Luma([img.get_pixel(x, y)[0] as f64])
            });
            let blurred = saturate_to_gray(&blur(&plane));
            Frame::Gray(blurred)
        }
        Frame::Color(img) => {
            let mut out = RgbImage::new(img.width(), img.height());
            for c in 0..3 {
                let plane = GradientImage::from_fn(img.width(), img.height(), |x, y| {
                    Luma([img.get_pixel(x, y)[c] as f64])
                });
                let blurred: GrayImage = saturate_to_gray(&blur(&plane));
                for (x, y, p) in blurred.enumerate_pixels() {
                    out.get_pixel_mut(x, y)[c] = p[0];
                }
            }
            Frame::Color(out)
        }
        Frame::Gradient(img) => Frame::Gradient(blur(&img)),
    }
}

/// Median blur over a `ksize` × `ksize` window. Float frames are saturated
/// to 8-bit first.
pub fn median_blur(frame: Frame, ksize: u32) -> Frame {
    let radius = ksize / 2;
    if radius == 0 {
        return frame;
    }

    match frame {
        Frame::Gray(img) => Frame::Gray(median_filter(&img, radius, radius)),
        Frame::Color(img) => Frame::Color(median_filter(&img, radius, radius)),
        Frame::Gradient(img) => {
            Frame::Gray(median_filter(&saturate_to_gray(&img), radius, radius))
        }
    }
}

/// Horizontal first derivative of the luma channel, aperture `ksize`
pub fn sobel_x(frame: &Frame, ksize: u32) -> Frame {
    let luma = frame.to_luma_f64();
    let (kx, ky) = kernels::sobel_kernels(ksize, 1, 0);
    debug!(ksize, taps_x = kx.len(), taps_y = ky.len(), "sobel kernels");
    Frame::Gradient(kernels::correlate_separable(&luma, &kx, &ky))
}

/// Binary (0/255) Canny edge map. The smaller threshold is the low one, and
/// a gradient must exceed a threshold to pass it.
///
/// Color frames are reduced to luma before the gradient is taken, rather
/// than using the strongest per-channel gradient.
pub fn canny_edges(frame: &Frame, threshold1: u8, threshold2: u8) -> Frame {
    let low = strictly_above(threshold1.min(threshold2));
    let high = strictly_above(threshold1.max(threshold2));
    Frame::Gray(canny(&frame.to_luma8(), low, high))
}

/// Smallest `f32` greater than `t`. `canny` compares with `>=`; a zero
/// threshold would otherwise let zero-magnitude pixels through.
fn strictly_above(t: u8) -> f32 {
    f32::from_bits((t as f32).to_bits() + 1)
}

/// Laplacian of the luma channel
pub fn laplacian(frame: &Frame) -> Frame {
    Frame::Gradient(kernels::laplacian(&frame.to_luma_f64()))
}

//! Convolution kernels and a separable correlation over float images.
//!
//! - Gaussian kernels follow the usual size-to-sigma rule
//!   `sigma = 0.3 * ((k - 1) * 0.5 - 1) + 0.8`, with the exact binomial
//!   tables for sizes up to 7.
//! - Sobel kernels are built from binomial smoothing and repeated
//!   differencing, so any odd aperture works. Aperture 1 means the 3-tap
//!   `[-1 0 1]` derivative without cross smoothing.
//! - Borders are reflected without repeating the edge sample
//!   (`gfedcb|abcdefgh|gfedcba`).
use image::Luma;

use crate::frame::GradientImage;

const SMALL_GAUSSIAN_TABLES: [&[f64]; 4] = [
    &[1.0],
    &[0.25, 0.5, 0.25],
    &[0.0625, 0.25, 0.375, 0.25, 0.0625],
    &[0.03125, 0.109375, 0.21875, 0.28125, 0.21875, 0.109375, 0.03125],
];

/// Sigma implied by a Gaussian kernel of side `ksize`
pub fn gaussian_sigma(ksize: u32) -> f64 {
    0.3 * ((ksize as f64 - 1.0) * 0.5 - 1.0) + 0.8
}

/// Normalized 1D Gaussian kernel of odd length `ksize`
pub fn gaussian_kernel(ksize: u32) -> Vec<f64> {
    let ksize = ksize.max(1) | 1;
    if ksize <= 7 {
        return SMALL_GAUSSIAN_TABLES[(ksize / 2) as usize].to_vec();
    }

    let sigma = gaussian_sigma(ksize);
    let scale = -0.5 / (sigma * sigma);
    let center = (ksize / 2) as f64;
    let raw: Vec<f64> = (0..ksize)
        .map(|i| {
            let x = i as f64 - center;
            (scale * x * x).exp()
        })
        .collect();
    let sum: f64 = raw.iter().sum();
    raw.into_iter().map(|v| v / sum).collect()
}

/// 1D derivative kernel of the given order and odd length.
///
/// Order 0 is the binomial smoothing row, order 1 the first difference.
pub fn derivative_kernel(ksize: u32, order: u32) -> Vec<f64> {
    let ksize = ksize as usize;
    match (ksize, order) {
        (1, _) => return vec![1.0],
        (3, 0) => return vec![1.0, 2.0, 1.0],
        (3, 1) => return vec![-1.0, 0.0, 1.0],
        (3, _) => return vec![1.0, -2.0, 1.0],
        _ => {}
    }

    let order = order as usize;
    let mut kernel = vec![0i64; ksize + 1];
    kernel[0] = 1;

    // Binomial smoothing: convolve with [1 1] (ksize - order - 1) times.
    for _ in 0..ksize.saturating_sub(order + 1) {
        let mut old = kernel[0];
        for j in 1..=ksize {
            let new = kernel[j] + kernel[j - 1];
            kernel[j - 1] = old;
            old = new;
        }
    }

    // Differencing: convolve with [-1 1] `order` times.
    for _ in 0..order {
        let mut old = -kernel[0];
        for j in 1..=ksize {
            let new = kernel[j - 1] - kernel[j];
            kernel[j - 1] = old;
            old = new;
        }
    }

    kernel.truncate(ksize);
    kernel.into_iter().map(|v| v as f64).collect()
}

/// Horizontal and vertical Sobel kernels for derivative orders `(dx, dy)`.
pub fn sobel_kernels(ksize: u32, dx: u32, dy: u32) -> (Vec<f64>, Vec<f64>) {
    let ksize_x = if ksize == 1 && dx > 0 { 3 } else { ksize };
    let ksize_y = if ksize == 1 && dy > 0 { 3 } else { ksize };
    (derivative_kernel(ksize_x, dx), derivative_kernel(ksize_y, dy))
}

#[inline]
fn reflect101(mut i: isize, n: usize) -> usize {
    if n <= 1 {
        return 0;
    }
    let last = n as isize - 1;
    loop {
        if i < 0 {
            i = -i;
        } else if i > last {
            i = 2 * last - i;
        } else {
            return i as usize;
        }
    }
}

/// Correlate `src` with `kx` along rows, then with `ky` along columns.
pub fn correlate_separable(src: &GradientImage, kx: &[f64], ky: &[f64]) -> GradientImage {
    let (w, h) = src.dimensions();
    let (wu, hu) = (w as usize, h as usize);
    if wu == 0 || hu == 0 {
        return GradientImage::new(w, h);
    }

    let data = src.as_raw();
    let rx = (kx.len() / 2) as isize;
    let ry = (ky.len() / 2) as isize;

    let mut rows = vec![0.0f64; wu * hu];
    for y in 0..hu {
        let row = &data[y * wu..(y + 1) * wu];
        for x in 0..wu {
            rows[y * wu + x] = kx
                .iter()
                .enumerate()
                .map(|(j, k)| k * row[reflect101(x as isize + j as isize - rx, wu)])
                .sum();
        }
    }

    let mut out = GradientImage::new(w, h);
    for (x, y, px) in out.enumerate_pixels_mut() {
        let (xu, yu) = (x as usize, y as isize);
        let v: f64 = ky
            .iter()
            .enumerate()
            .map(|(j, k)| k * rows[reflect101(yu + j as isize - ry, hu) * wu + xu])
            .sum();
        *px = Luma([v]);
    }
    out
}

/// 4-neighbour Laplacian (`d2/dx2 + d2/dy2`, aperture 1)
pub fn laplacian(src: &GradientImage) -> GradientImage {
    let second = [1.0, -2.0, 1.0];
    let identity = [1.0];
    let dxx = correlate_separable(src, &second, &identity);
    let dyy = correlate_separable(src, &identity, &second);

    let mut out = dxx;
    for (px, other) in out.pixels_mut().zip(dyy.pixels()) {
        px[0] += other[0];
    }
    out
}

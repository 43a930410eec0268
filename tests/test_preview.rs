mod common;

use common::*;
use edgelab::GradientImage;
use edgelab::preview::render_frame;
use image::{GrayImage, Luma};

#[test]
fn test_preview_is_empty_before_load() {
    let session = EditorSession::new(EditorConfig::default());
    let preview = session.render_preview();
    assert!(preview.original.is_none());
    assert!(preview.processed.is_none());
}

#[test]
fn test_preview_has_fixed_size_for_both_panes() -> anyhow::Result<()> {
    let mut session = session_with(noise_image(123, 45));
    let params =
        ProcessingParams::new(FilterKind::None, EdgeKind::Canny).with_canny_thresholds(10, 20);
    session.apply(&params)?;

    let preview = session.render_preview();
    let original = preview.original.expect("original preview");
    let processed = preview.processed.expect("processed preview");
    assert_eq!(original.dimensions(), (400, 300));
    assert_eq!(processed.dimensions(), (400, 300));
    Ok(())
}

#[test]
fn test_single_channel_preview_is_expanded_to_gray_rgb() {
    let gray = GrayImage::from_pixel(8, 6, Luma([77]));
    let rgba = render_frame(&Frame::Gray(gray), 8, 6, false).expect("non-empty frame");
    assert!(rgba.pixels().all(|p| p.0 == [77, 77, 77, 255]));
}

#[test]
fn test_gradient_preview_saturates_unless_normalized() {
    let samples = [-500.0, 0.0, 100.0, 1000.0];
    let gradient = GradientImage::from_fn(4, 1, |x, _| Luma([samples[x as usize]]));
    let frame = Frame::Gradient(gradient);

    let clipped = render_frame(&frame, 4, 1, false).expect("non-empty frame");
    let clipped: Vec<u8> = clipped.pixels().map(|p| p[0]).collect();
    assert_eq!(clipped, vec![0, 0, 100, 255]);

    let stretched = render_frame(&frame, 4, 1, true).expect("non-empty frame");
    let stretched: Vec<u8> = stretched.pixels().map(|p| p[0]).collect();
    assert_eq!(stretched[0], 0);
    assert_eq!(stretched[3], 255);
    assert!(stretched[1] > 0 && stretched[1] < stretched[2]);
}

#[test]
fn test_degenerate_sizes_render_nothing() {
    let empty = Frame::Gray(GrayImage::new(0, 0));
    assert!(render_frame(&empty, 400, 300, false).is_none());

    let tiny = Frame::Gray(GrayImage::new(2, 2));
    assert!(render_frame(&tiny, 0, 300, false).is_none());
}

#[test]
fn test_custom_preview_size_is_respected() {
    let config = EditorConfig {
        preview_width: 64,
        preview_height: 48,
        ..EditorConfig::default()
    };
    let mut session = EditorSession::new(config);
    session.set_image(Frame::Color(black_image(10, 10)));

    let preview = session.render_preview();
    assert_eq!(preview.processed.map(|p| p.dimensions()), Some((64, 48)));
}

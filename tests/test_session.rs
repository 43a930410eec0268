//! Integration tests for the editor session: load, apply, undo, reset, save.

mod common;

use common::*;
use image::GenericImageView;

#[test]
fn test_load_sets_both_slots_and_clears_history() -> anyhow::Result<()> {
    let file = write_test_png(&vertical_edge_image(40, 30));
    let mut session = EditorSession::new(EditorConfig::default());
    assert!(session.original().is_none());
    assert!(session.processed().is_none());

    assert_eq!(session.load(file.path())?, Outcome::Changed);
    session.apply(&ProcessingParams::new(FilterKind::Gaussian, EdgeKind::None))?;
    assert_eq!(session.undo_depth(), 1);

    assert_eq!(session.load(file.path())?, Outcome::Changed);
    assert_eq!(session.undo_depth(), 0);
    assert_eq!(session.original(), session.processed());

    let original = session.original().expect("image loaded");
    assert_eq!(original.dimensions(), (40, 30));
    assert_eq!(original.channels(), 3);
    Ok(())
}

#[test]
fn test_load_with_empty_path_is_noop() -> anyhow::Result<()> {
    let mut session = EditorSession::new(EditorConfig::default());
    assert_eq!(session.load("")?, Outcome::NoOp);
    assert!(!session.is_loaded());
    Ok(())
}

#[test]
fn test_load_failure_keeps_previous_image() -> anyhow::Result<()> {
    let mut session = session_with(vertical_edge_image(10, 10));
    session.apply(&ProcessingParams::new(FilterKind::Median, EdgeKind::None).with_kernel_size(3))?;
    let before = session.processed().cloned();

    let garbage = tempfile::Builder::new().suffix(".png").tempfile()?;
    std::fs::write(garbage.path(), b"definitely not a png")?;

    let result = session.load(garbage.path());
    assert!(
        matches!(result, Err(EditorError::Decode { .. })),
        "Should report a decode error, got: {:?}",
        result
    );
    assert_eq!(session.processed().cloned(), before);
    assert_eq!(session.undo_depth(), 1);

    let missing = session.load("/nonexistent/dir/image.png");
    assert!(matches!(missing, Err(EditorError::Decode { .. })));
    Ok(())
}

#[test]
fn test_operations_without_image_are_noops() -> anyhow::Result<()> {
    let mut session = EditorSession::new(EditorConfig::default());
    let params = ProcessingParams::new(FilterKind::Gaussian, EdgeKind::Canny);

    assert_eq!(session.apply(&params)?, Outcome::NoOp);
    assert_eq!(session.undo(), Outcome::NoOp);
    assert_eq!(session.reset(), Outcome::NoOp);

    let dir = tempfile::TempDir::new()?;
    let target = dir.path().join("out.jpg");
    assert_eq!(session.save(&target)?, Outcome::NoOp);
    assert!(!target.exists());

    assert_eq!(session.undo_depth(), 0);
    assert!(session.original().is_none());
    Ok(())
}

#[test]
fn test_apply_always_pushes_exactly_one_snapshot() -> anyhow::Result<()> {
    let mut session = session_with(noise_image(24, 18));

    for (i, params) in all_param_combinations().iter().enumerate() {
        let before = session.undo_depth();
        assert_eq!(session.apply(params)?, Outcome::Changed);
        assert_eq!(
            session.undo_depth(),
            before + 1,
            "apply #{i} with {params:?} should push one snapshot"
        );
    }
    Ok(())
}

#[test]
fn test_apply_none_none_keeps_pixels() -> anyhow::Result<()> {
    let mut session = session_with(noise_image(16, 16));
    session.apply(&ProcessingParams::default())?;
    assert_eq!(session.undo_depth(), 1);
    assert_eq!(session.processed(), session.original());
    Ok(())
}

#[test]
fn test_undo_restores_pre_apply_image() -> anyhow::Result<()> {
    let mut session = session_with(noise_image(32, 32));
    let first = ProcessingParams::new(FilterKind::Median, EdgeKind::None).with_kernel_size(5);
    session.apply(&first)?;
    let before = session.processed().cloned().expect("image loaded");

    let second = ProcessingParams::new(FilterKind::Gaussian, EdgeKind::Sobel).with_kernel_size(3);
    session.apply(&second)?;
    assert!(session.processed().is_some_and(Frame::is_gradient));
    assert_eq!(session.undo_depth(), 2);

    assert_eq!(session.undo(), Outcome::Changed);
    assert_eq!(session.undo_depth(), 1);
    assert_eq!(session.processed(), Some(&before));

    assert_eq!(session.undo(), Outcome::Changed);
    assert_eq!(session.processed(), session.original());
    Ok(())
}

#[test]
fn test_undo_on_empty_history_changes_nothing() {
    let mut session = session_with(noise_image(8, 8));
    let before = session.processed().cloned();

    assert_eq!(session.undo(), Outcome::NoOp);
    assert_eq!(session.processed().cloned(), before);
    assert_eq!(session.undo_depth(), 0);
}

#[test]
fn test_reset_restores_original_and_clears_history() -> anyhow::Result<()> {
    let mut session = session_with(noise_image(20, 20));
    for params in all_param_combinations() {
        session.apply(&params)?;
    }
    assert_ne!(session.processed(), session.original());

    assert_eq!(session.reset(), Outcome::Changed);
    assert_eq!(session.processed(), session.original());
    assert_eq!(session.undo_depth(), 0);

    let after_reset = session.processed().cloned();
    assert_eq!(session.undo(), Outcome::NoOp);
    assert_eq!(session.processed().cloned(), after_reset);
    Ok(())
}

#[test]
fn test_undo_depth_cap_drops_oldest() -> anyhow::Result<()> {
    let config = EditorConfig::default().with_max_undo_depth(Some(2));
    let mut session = EditorSession::new(config);
    session.set_image(Frame::Color(noise_image(16, 16)));

    let blur = ProcessingParams::new(FilterKind::Gaussian, EdgeKind::None).with_kernel_size(3);
    session.apply(&blur)?;
    let after_first = session.processed().cloned();
    session.apply(&blur)?;
    session.apply(&blur)?;
    assert_eq!(session.undo_depth(), 2);

    assert_eq!(session.undo(), Outcome::Changed);
    assert_eq!(session.undo(), Outcome::Changed);
    assert_eq!(session.undo(), Outcome::NoOp);
    // The snapshot of the untouched original was discarded.
    assert_eq!(session.processed().cloned(), after_first);
    Ok(())
}

#[test]
fn test_zero_undo_depth_still_keeps_last_apply() -> anyhow::Result<()> {
    let config = EditorConfig::default().with_max_undo_depth(Some(0));
    let mut session = EditorSession::new(config);
    session.set_image(Frame::Color(noise_image(8, 8)));

    session.apply(&ProcessingParams::new(FilterKind::Median, EdgeKind::None).with_kernel_size(3))?;
    assert_eq!(session.undo_depth(), 1);
    assert_eq!(session.undo(), Outcome::Changed);
    assert_eq!(session.processed(), session.original());
    Ok(())
}

#[test]
fn test_save_writes_processed_image() -> anyhow::Result<()> {
    let mut session = session_with(vertical_edge_image(50, 40));
    let params =
        ProcessingParams::new(FilterKind::None, EdgeKind::Canny).with_canny_thresholds(50, 150);
    session.apply(&params)?;

    let dir = tempfile::TempDir::new()?;
    let target = dir.path().join("edges.jpg");
    assert_eq!(session.save(&target)?, Outcome::Changed);

    let written = image::open(&target)?;
    assert_eq!(written.dimensions(), (50, 40));
    Ok(())
}

#[test]
fn test_save_gradient_saturates_to_gray() -> anyhow::Result<()> {
    let mut session = session_with(vertical_edge_image(20, 10));
    session.apply(&ProcessingParams::new(FilterKind::None, EdgeKind::Sobel).with_kernel_size(3))?;

    let dir = tempfile::TempDir::new()?;
    let target = dir.path().join("sobel.png");
    session.save(&target)?;

    let written = image::open(&target)?;
    assert!(matches!(written, image::DynamicImage::ImageLuma8(_)));
    let gray = written.to_luma8();
    assert_eq!(gray.get_pixel(10, 5)[0], 255);
    assert_eq!(gray.get_pixel(0, 5)[0], 0);
    Ok(())
}

#[test]
fn test_save_to_unknown_format_reports_encode_error() -> anyhow::Result<()> {
    let session = session_with(black_image(4, 4));
    let dir = tempfile::TempDir::new()?;

    let result = session.save(dir.path().join("image.notaformat"));
    assert!(
        matches!(result, Err(EditorError::Encode { .. })),
        "Should report an encode error, got: {:?}",
        result
    );

    assert_eq!(session.save("")?, Outcome::NoOp);
    Ok(())
}

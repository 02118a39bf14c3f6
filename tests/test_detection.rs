mod common;

use common::*;
use huntpath::DetectionPipeline;
use huntpath::Error;
use image::DynamicImage;

#[test]
fn detects_every_marker() -> anyhow::Result<()> {
    let mut markers = spawn_points();
    markers.push(legend_point());
    let img = DynamicImage::ImageRgb8(make_map(&markers));

    let found = DetectionPipeline::new().detect_markers(&img)?;

    assert_eq!(found.len(), markers.len());
    for expected in &markers {
        assert!(
            found.iter().any(|f| near(f, expected)),
            "marker {expected} not found in {found:?}"
        );
    }
    Ok(())
}

#[test]
fn blank_map_has_no_markers() -> anyhow::Result<()> {
    let img = DynamicImage::ImageRgb8(make_map(&[]));
    assert!(DetectionPipeline::new().detect_markers(&img)?.is_empty());
    Ok(())
}

#[test]
fn non_red_discs_are_ignored() -> anyhow::Result<()> {
    let mut img = make_map(&[]);
    imageproc::drawing::draw_filled_circle_mut(&mut img, (500, 500), 20, image::Rgb([30, 200, 40]));
    imageproc::drawing::draw_filled_circle_mut(&mut img, (200, 300), 20, image::Rgb([40, 60, 220]));

    let found = DetectionPipeline::new().detect_markers(&DynamicImage::ImageRgb8(img))?;
    assert!(found.is_empty());
    Ok(())
}

#[test]
fn unreadable_file_is_a_decode_error() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    let path = dir.path().join("broken.png");
    std::fs::write(&path, b"definitely not a png")?;

    let err = DetectionPipeline::new().detect_file(&path).unwrap_err();
    assert!(matches!(err, Error::ImageDecode { .. }));
    assert!(err.is_no_markers());

    let missing = DetectionPipeline::new()
        .detect_file(&dir.path().join("missing.png"))
        .unwrap_err();
    assert!(matches!(missing, Error::ImageDecode { .. }));
    Ok(())
}

#[test]
fn debug_out_keeps_intermediate_images() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    let debug_dir = dir.path().join("debug");
    let img = DynamicImage::ImageRgb8(make_map(&spawn_points()[..2]));

    let circles = DetectionPipeline::new().with_debug(&debug_dir).detect(&img)?;

    assert_eq!(circles.len(), 2);
    assert!(debug_dir.join("00_input/01.png").exists());
    assert!(debug_dir.join("01_hsv_red_mask/01.png").exists());
    assert!(debug_dir.join("02_morphological_close/01.png").exists());
    assert!(debug_dir.join("03_hough_circles/01.png").exists());
    assert!(debug_dir.join("03_hough_circles/02.png").exists());
    Ok(())
}

//! End-to-end batch tests against temporary directories.
//!
//! Run with: `cargo test -p logomark-processing --test batch_test`

use image::{ColorType, DynamicImage, GenericImageView, Rgba, RgbaImage};
use indicatif::ProgressBar;
use logomark_core::{AppError, BatchConfig, NoOpNotifier, Orientation};
use logomark_processing::run_batch;
use logomark_processing::test_helpers::{
    create_test_image, create_test_psd, encode_jpeg, encode_png, with_exif_orientation,
    write_image,
};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

fn brand_logo() -> RgbaImage {
    RgbaImage::from_fn(60, 20, |x, _| {
        if x < 30 {
            Rgba([220, 30, 30, 255])
        } else {
            Rgba([30, 30, 220, 255])
        }
    })
}

fn workspace_with_psd_logo() -> (tempfile::TempDir, BatchConfig) {
    let dir = tempfile::tempdir().unwrap();
    let config = BatchConfig::rooted_at(dir.path());
    fs::create_dir_all(&config.input_dir).unwrap();
    fs::write(&config.logo_path, create_test_psd(&brand_logo())).unwrap();
    (dir, config)
}

fn workspace_with_png_logo() -> (tempfile::TempDir, BatchConfig) {
    let dir = tempfile::tempdir().unwrap();
    let mut config = BatchConfig::rooted_at(dir.path());
    config.logo_path = dir.path().join("logo.png");
    fs::create_dir_all(&config.input_dir).unwrap();
    fs::write(
        &config.logo_path,
        encode_png(&DynamicImage::ImageRgba8(brand_logo())),
    )
    .unwrap();
    (dir, config)
}

fn output_names(dir: &Path) -> BTreeSet<String> {
    fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect()
}

fn names(list: &[&str]) -> BTreeSet<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_three_images_and_raw_file_with_psd_logo() {
    let (_dir, config) = workspace_with_psd_logo();
    write_image(&config.input_dir.join("beach.jpg"), &create_test_image(400, 300));
    write_image(&config.input_dir.join("tower.png"), &create_test_image(300, 400));
    write_image(&config.input_dir.join("tile.png"), &create_test_image(256, 256));
    fs::write(config.input_dir.join("IMG_0001.CR2"), b"raw sensor data").unwrap();

    let report = run_batch(&config, &NoOpNotifier, &ProgressBar::hidden()).unwrap();

    assert_eq!(report.cleanup.removed, vec!["IMG_0001.CR2"]);
    assert!(!config.input_dir.join("IMG_0001.CR2").exists());

    assert_eq!(report.conversion.total, 3);
    assert_eq!(report.conversion.converted_count(), 3);
    assert!(report.conversion.failed.is_empty());
    assert!(report.conversion.converted.iter().all(|c| c.watermarked));
    assert_eq!(
        output_names(&config.output_dir),
        names(&["1.png", "2.png", "3.png"])
    );

    for converted in &report.conversion.converted {
        let saved = image::open(&converted.output).unwrap();
        assert_eq!(saved.color(), ColorType::Rgb8);

        let expected = match converted.source.as_str() {
            "beach.jpg" => ((400, 300), Orientation::Landscape),
            "tower.png" => ((300, 400), Orientation::Portrait),
            "tile.png" => ((256, 256), Orientation::Square),
            other => panic!("unexpected source {}", other),
        };
        assert_eq!(saved.dimensions(), expected.0);
        assert_eq!(converted.orientation, expected.1);
    }
}

#[test]
fn test_failed_file_leaves_gap_in_numbering() {
    let (_dir, config) = workspace_with_png_logo();
    write_image(&config.input_dir.join("a.png"), &create_test_image(120, 90));
    write_image(&config.input_dir.join("b.png"), &create_test_image(90, 120));
    fs::write(config.input_dir.join("readme.txt"), b"not an image").unwrap();

    let report = run_batch(&config, &NoOpNotifier, &ProgressBar::hidden()).unwrap();

    assert_eq!(report.conversion.total, 3);
    assert_eq!(report.conversion.converted_count(), 2);
    assert_eq!(report.conversion.failed_count(), 1);

    let failed = &report.conversion.failed[0];
    assert_eq!(failed.source, "readme.txt");

    let expected: BTreeSet<String> = (1..=3)
        .filter(|i| *i != failed.index)
        .map(|i| format!("{}.png", i))
        .collect();
    assert_eq!(output_names(&config.output_dir), expected);
}

#[test]
fn test_exif_rotated_jpeg_is_upright_in_output() {
    let (_dir, config) = workspace_with_png_logo();
    let jpeg = with_exif_orientation(&encode_jpeg(&create_test_image(320, 180)), 8);
    fs::write(config.input_dir.join("phone.jpg"), jpeg).unwrap();

    let report = run_batch(&config, &NoOpNotifier, &ProgressBar::hidden()).unwrap();

    let converted = &report.conversion.converted[0];
    assert_eq!(converted.orientation, Orientation::Portrait);
    let saved = image::open(config.output_dir.join("1.png")).unwrap();
    assert_eq!(saved.dimensions(), (180, 320));
}

#[test]
fn test_missing_logo_creates_no_outputs() {
    let (_dir, config) = workspace_with_psd_logo();
    fs::remove_file(&config.logo_path).unwrap();
    write_image(&config.input_dir.join("a.png"), &create_test_image(64, 48));

    let result = run_batch(&config, &NoOpNotifier, &ProgressBar::hidden());

    match result {
        Err(AppError::LogoMissing(path)) => assert_eq!(path, config.logo_path),
        other => panic!("expected LogoMissing, got {:?}", other),
    }
    assert!(!config.output_dir.exists());
}

#[test]
fn test_logo_lands_bottom_left() {
    let (_dir, config) = workspace_with_png_logo();
    write_image(&config.input_dir.join("wide.png"), &create_test_image(600, 400));

    run_batch(&config, &NoOpNotifier, &ProgressBar::hidden()).unwrap();

    // 60x20 logo scaled by min(600 * 0.3 / 60, 400 * 0.3 / 20) = 3 -> 180x60 at (10, 330)
    let saved = image::open(config.output_dir.join("1.png")).unwrap().to_rgb8();
    let red_half = saved.get_pixel(40, 360);
    let blue_half = saved.get_pixel(160, 360);
    assert!(red_half[0] > red_half[2], "{:?}", red_half);
    assert!(blue_half[2] > blue_half[0], "{:?}", blue_half);
    // 80% opacity lets the white background show through
    assert!(red_half[1] > 30, "{:?}", red_half);

    assert_eq!(saved.get_pixel(5, 360).0, [255, 255, 255]);
    assert_eq!(saved.get_pixel(40, 395).0, [255, 255, 255]);
    assert_eq!(saved.get_pixel(300, 200).0, [255, 255, 255]);
}

//! Test fixtures and helper functions for creating test data
//!
//! Images are generated in-process so tests never depend on binary files in
//! the repository.

use image::{DynamicImage, ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};
use std::io::Cursor;
use std::path::Path;

/// Create a solid RGB test image
pub fn create_test_image(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb([255, 255, 255])))
}

/// Create a solid RGBA logo
pub fn create_test_logo(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 255]))
}

pub fn encode_png(img: &DynamicImage) -> Vec<u8> {
    encode(img, ImageFormat::Png)
}

pub fn encode_jpeg(img: &DynamicImage) -> Vec<u8> {
    // JPEG has no alpha channel
    encode(&DynamicImage::ImageRgb8(img.to_rgb8()), ImageFormat::Jpeg)
}

fn encode(img: &DynamicImage, format: ImageFormat) -> Vec<u8> {
    let mut buffer = Vec::new();
    let mut cursor = Cursor::new(&mut buffer);
    img.write_to(&mut cursor, format)
        .expect("in-memory encoding should not fail");
    buffer
}

/// Insert an EXIF APP1 segment carrying only an Orientation tag right after
/// the JPEG SOI marker.
pub fn with_exif_orientation(jpeg: &[u8], orientation: u16) -> Vec<u8> {
    assert!(
        jpeg.len() >= 2 && jpeg[0] == 0xFF && jpeg[1] == 0xD8,
        "not a JPEG stream"
    );

    let mut tiff = Vec::with_capacity(26);
    // Little-endian TIFF header, IFD0 at offset 8
    tiff.extend_from_slice(b"II");
    tiff.extend_from_slice(&42u16.to_le_bytes());
    tiff.extend_from_slice(&8u32.to_le_bytes());
    // IFD0 with a single SHORT entry
    tiff.extend_from_slice(&1u16.to_le_bytes());
    tiff.extend_from_slice(&0x0112u16.to_le_bytes());
    tiff.extend_from_slice(&3u16.to_le_bytes());
    tiff.extend_from_slice(&1u32.to_le_bytes());
    tiff.extend_from_slice(&orientation.to_le_bytes());
    tiff.extend_from_slice(&[0, 0]);
    // No next IFD
    tiff.extend_from_slice(&0u32.to_le_bytes());

    let mut payload = b"Exif\0\0".to_vec();
    payload.extend_from_slice(&tiff);

    let segment_len = (payload.len() + 2) as u16;
    let mut out = Vec::with_capacity(jpeg.len() + payload.len() + 4);
    out.extend_from_slice(&jpeg[..2]);
    out.extend_from_slice(&[0xFF, 0xE1]);
    out.extend_from_slice(&segment_len.to_be_bytes());
    out.extend_from_slice(&payload);
    out.extend_from_slice(&jpeg[2..]);
    out
}

/// Build a minimal single-composite PSD (8-bit RGBA, raw image data, no layers)
pub fn create_test_psd(logo: &RgbaImage) -> Vec<u8> {
    let (width, height) = logo.dimensions();
    let channels: u16 = 4;

    let mut out = Vec::new();

    // File header
    out.extend_from_slice(b"8BPS");
    out.extend_from_slice(&1u16.to_be_bytes());
    out.extend_from_slice(&[0u8; 6]);
    out.extend_from_slice(&channels.to_be_bytes());
    out.extend_from_slice(&height.to_be_bytes());
    out.extend_from_slice(&width.to_be_bytes());
    out.extend_from_slice(&8u16.to_be_bytes());
    out.extend_from_slice(&3u16.to_be_bytes());

    // Color mode data and image resources, both empty
    out.extend_from_slice(&0u32.to_be_bytes());
    out.extend_from_slice(&0u32.to_be_bytes());

    // Layer and mask information: zero layers, no global mask
    let mut layer_and_mask = Vec::new();
    layer_and_mask.extend_from_slice(&2u32.to_be_bytes());
    layer_and_mask.extend_from_slice(&0i16.to_be_bytes());
    layer_and_mask.extend_from_slice(&0u32.to_be_bytes());
    out.extend_from_slice(&(layer_and_mask.len() as u32).to_be_bytes());
    out.extend_from_slice(&layer_and_mask);

    // Merged image data, raw planar channels
    out.extend_from_slice(&0u16.to_be_bytes());
    for channel in 0..channels as usize {
        out.extend(logo.pixels().map(|p| p[channel]));
    }

    out
}

/// Write an image file, choosing the format from the extension
pub fn write_image(path: &Path, img: &DynamicImage) {
    let format = ImageFormat::from_path(path).expect("fixture path needs a known extension");
    let bytes = match format {
        ImageFormat::Jpeg => encode_jpeg(img),
        other => encode(img, other),
    };
    std::fs::write(path, bytes).expect("fixture write should succeed");
}

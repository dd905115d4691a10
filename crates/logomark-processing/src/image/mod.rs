//! Image processing module
//!
//! - EXIF orientation correction (orientation)
//! - Logo decoding from layered PSD documents (logo)
//! - Scaled, semi-transparent logo overlay (watermark)

pub mod logo;
pub mod orientation;
pub mod watermark;

pub use logo::{LogoError, LogoLoader};
pub use orientation::{ImageOrientation, Rotation};
pub use watermark::{Watermark, WatermarkError};

use ::image::GenericImageView;
use logomark_core::Orientation;

/// Classify a decoded image by its current dimensions
pub fn classify(img: &::image::DynamicImage) -> Orientation {
    let (width, height) = img.dimensions();
    Orientation::classify(width, height)
}

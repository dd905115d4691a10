//! Logo loading from layered PSD documents
//!
//! Only the flattened composite of the document is used; individual layers are
//! ignored. Files without the PSD signature are decoded as ordinary raster
//! images so a PNG logo works as well.

use image::RgbaImage;
use psd::Psd;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

const PSD_SIGNATURE: &[u8; 4] = b"8BPS";

#[derive(Debug, thiserror::Error)]
pub enum LogoError {
    #[error("Failed to read logo file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse PSD document: {0}")]
    Psd(String),

    #[error("Failed to decode logo image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Composite has {actual} bytes, expected {expected} for {width}x{height} RGBA")]
    InvalidDimensions {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    #[error("Logo has no pixels")]
    Empty,
}

pub struct LogoLoader;

impl LogoLoader {
    /// Load a logo from disk as RGBA
    pub fn load(path: &Path) -> Result<RgbaImage, LogoError> {
        let data = std::fs::read(path)?;
        let logo = Self::from_bytes(&data)?;

        tracing::debug!(
            path = %path.display(),
            width = logo.width(),
            height = logo.height(),
            "Loaded logo"
        );

        Ok(logo)
    }

    /// Decode a logo from memory, dispatching on the PSD signature
    pub fn from_bytes(data: &[u8]) -> Result<RgbaImage, LogoError> {
        let logo = if Self::is_psd(data) {
            Self::decode_psd(data)?
        } else {
            image::load_from_memory(data)?.to_rgba8()
        };

        if logo.width() == 0 || logo.height() == 0 {
            return Err(LogoError::Empty);
        }

        Ok(logo)
    }

    pub fn is_psd(data: &[u8]) -> bool {
        data.starts_with(PSD_SIGNATURE)
    }

    fn decode_psd(data: &[u8]) -> Result<RgbaImage, LogoError> {
        // The parser indexes into its input and panics on truncated sections.
        // The process panic hook is left alone, so such a document still
        // prints the panic message to stderr before the error is returned.
        let parsed = panic::catch_unwind(AssertUnwindSafe(|| Psd::from_bytes(data)))
            .map_err(|_| LogoError::Psd("malformed document".to_string()))?
            .map_err(|e| LogoError::Psd(e.to_string()))?;

        let (width, height) = (parsed.width(), parsed.height());
        let composite = panic::catch_unwind(AssertUnwindSafe(|| parsed.rgba()))
            .map_err(|_| LogoError::Psd("malformed composite image data".to_string()))?;

        let expected = width as usize * height as usize * 4;
        let actual = composite.len();
        RgbaImage::from_raw(width, height, composite).ok_or(LogoError::InvalidDimensions {
            width,
            height,
            expected,
            actual,
        })
    }
}

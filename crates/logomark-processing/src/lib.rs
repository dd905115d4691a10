//! Logomark processing library
//!
//! The batch pipeline: raw-file cleanup, EXIF orientation correction, aspect
//! classification, PSD logo loading, logo overlay and sequential PNG output.

pub mod batch;
pub mod cleanup;
pub mod image;
pub mod pipeline;
pub mod test_helpers;

pub use batch::run_batch;
pub use cleanup::{is_unwanted, remove_unwanted_files};
pub use pipeline::{BatchConverter, ConvertError};

pub use crate::image::{
    classify, ImageOrientation, LogoError, LogoLoader, Rotation, Watermark, WatermarkError,
};

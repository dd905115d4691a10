//! Per-image conversion driver
//!
//! Each entry of the input directory goes through the same chain:
//! 1. Read and decode
//! 2. EXIF orientation correction
//! 3. Aspect classification
//! 4. Logo overlay (degrades to the unmodified image on failure)
//! 5. Save as `{index}.png`, RGB without alpha
//!
//! Indices are 1-based positions in the directory listing. A file that fails
//! still consumes its index, so the output numbering can have gaps.

use crate::image::{classify, ImageOrientation, Watermark};
use image::{DynamicImage, ImageFormat, ImageReader, RgbaImage};
use indicatif::ProgressBar;
use logomark_core::{
    AppError, BatchConfig, ConversionReport, ConvertedFile, FailedFile, WatermarkSettings,
};
use std::fs;
use std::io::{self, Cursor};
use std::path::{Path, PathBuf};

/// Failure of a single input file; the batch continues with the next one
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to decode image: {0}")]
    Decode(#[source] image::ImageError),

    #[error("Failed to save {}: {source}", .path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

pub struct BatchConverter<'a> {
    input_dir: &'a Path,
    output_dir: &'a Path,
    logo: &'a RgbaImage,
    settings: &'a WatermarkSettings,
}

impl<'a> BatchConverter<'a> {
    pub fn new(config: &'a BatchConfig, logo: &'a RgbaImage) -> Self {
        Self {
            input_dir: &config.input_dir,
            output_dir: &config.output_dir,
            logo,
            settings: &config.watermark,
        }
    }

    /// Output path for a 1-based index
    pub fn output_path(&self, index: usize) -> PathBuf {
        self.output_dir.join(format!("{}.png", index))
    }

    /// Entries of the input directory in listing order
    pub fn list_inputs(&self) -> Result<Vec<PathBuf>, AppError> {
        let read_dir = fs::read_dir(self.input_dir).map_err(|source| AppError::DirectoryRead {
            path: self.input_dir.to_path_buf(),
            source,
        })?;

        let mut entries = Vec::new();
        for entry in read_dir {
            match entry {
                Ok(entry) => entries.push(entry.path()),
                Err(e) => tracing::warn!(error = %e, "Failed to read directory entry"),
            }
        }
        Ok(entries)
    }

    /// Convert every entry of the input directory.
    ///
    /// `progress` gets its length set to the number of entries and advances by
    /// one per entry whatever the outcome.
    pub fn convert_directory(&self, progress: &ProgressBar) -> Result<ConversionReport, AppError> {
        fs::create_dir_all(self.output_dir).map_err(|source| AppError::OutputDirCreate {
            path: self.output_dir.to_path_buf(),
            source,
        })?;

        let inputs = self.list_inputs()?;
        let mut report = ConversionReport {
            total: inputs.len(),
            ..ConversionReport::default()
        };

        progress.set_length(inputs.len() as u64);

        for (index, path) in (1..).zip(inputs.iter()) {
            let source = display_name(path);

            match self.convert_file(index, path) {
                Ok(converted) => {
                    tracing::info!(
                        index = index,
                        "Converted: {} -> {}",
                        source,
                        display_name(&converted.output)
                    );
                    report.converted.push(converted);
                }
                Err(e) => {
                    tracing::error!(index = index, error = %e, "Failed to process {}", source);
                    report.failed.push(FailedFile {
                        index,
                        source,
                        error: e.to_string(),
                    });
                }
            }

            progress.inc(1);
        }

        Ok(report)
    }

    /// Decode, orient, watermark and save a single file as `{index}.png`
    pub fn convert_file(&self, index: usize, path: &Path) -> Result<ConvertedFile, ConvertError> {
        let file_name = display_name(path);

        let data = fs::read(path).map_err(|source| ConvertError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let img = decode(&data)?;

        let img = ImageOrientation::apply_exif_orientation(img, &data);
        let orientation = classify(&img);
        tracing::info!(
            file = %file_name,
            orientation = %orientation,
            "{}: {}",
            file_name,
            orientation
        );

        let (img, watermarked) =
            Watermark::apply_or_original(img, self.logo, orientation, self.settings);

        let output = self.output_path(index);
        DynamicImage::ImageRgb8(img.to_rgb8())
            .save_with_format(&output, ImageFormat::Png)
            .map_err(|source| ConvertError::Save {
                path: output.clone(),
                source,
            })?;

        Ok(ConvertedFile {
            index,
            source: file_name,
            output,
            orientation,
            watermarked,
        })
    }
}

fn decode(data: &[u8]) -> Result<DynamicImage, ConvertError> {
    ImageReader::new(Cursor::new(data))
        .with_guessed_format()
        .map_err(|e| ConvertError::Decode(image::ImageError::IoError(e)))?
        .decode()
        .map_err(ConvertError::Decode)
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

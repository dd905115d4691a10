//! Outcome records for a batch run

use std::path::PathBuf;

use super::Orientation;

/// Result of removing raw-photo files from the input directory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanupReport {
    /// File names that were deleted
    pub removed: Vec<String>,
    /// File names that matched but could not be deleted, with the error text
    pub failed: Vec<(String, String)>,
}

/// One image written to the output directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedFile {
    /// 1-based position in the input listing
    pub index: usize,
    pub source: String,
    pub output: PathBuf,
    pub orientation: Orientation,
    /// `false` when the logo overlay failed and the image was saved unmodified
    pub watermarked: bool,
}

/// One input entry that could not be converted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedFile {
    /// The index this entry consumed; it is never reused
    pub index: usize,
    pub source: String,
    pub error: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionReport {
    /// Number of directory entries considered
    pub total: usize,
    pub converted: Vec<ConvertedFile>,
    pub failed: Vec<FailedFile>,
}

impl ConversionReport {
    pub fn converted_count(&self) -> usize {
        self.converted.len()
    }

    pub fn failed_count(&self) -> usize {
        self.failed.len()
    }

    /// Converted files that kept their original pixels because the overlay failed
    pub fn unwatermarked_count(&self) -> usize {
        self.converted.iter().filter(|c| !c.watermarked).count()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub cleanup: CleanupReport,
    pub conversion: ConversionReport,
}

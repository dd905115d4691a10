pub mod orientation;
pub mod report;

pub use orientation::Orientation;
pub use report::{BatchReport, CleanupReport, ConversionReport, ConvertedFile, FailedFile};

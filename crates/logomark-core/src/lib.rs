//! Logomark Core Library
//!
//! This crate provides configuration, error types, domain models and hook
//! traits shared by the processing pipeline, the infrastructure adapters and
//! the command-line binary.

pub mod config;
pub mod constants;
pub mod error;
pub mod hooks;
pub mod models;

// Re-export commonly used types
pub use config::{BatchConfig, NotificationConfig, WatermarkSettings};
pub use error::AppError;
pub use hooks::{NoOpNotifier, Notification, Notifier, NotifyError};
pub use models::{
    BatchReport, CleanupReport, ConversionReport, ConvertedFile, FailedFile, Orientation,
};

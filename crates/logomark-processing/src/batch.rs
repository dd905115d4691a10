//! Batch orchestration: pre-flight checks, cleanup, logo loading, conversion
//! and the completion notification.

use crate::cleanup::remove_unwanted_files;
use crate::image::LogoLoader;
use crate::pipeline::BatchConverter;
use indicatif::ProgressBar;
use logomark_core::{AppError, BatchConfig, BatchReport, Notification, Notifier};

/// Run one batch conversion.
///
/// Stops with an error, before touching anything, when the configuration is
/// invalid or the input directory or the logo file is missing. A logo that
/// exists but cannot be decoded stops the batch after cleanup and before any
/// image is converted. Per-file failures never stop the batch; they are
/// recorded in the report.
///
/// The notifier is called once, after every entry has been processed. A
/// notification that cannot be delivered is logged and does not fail the run.
#[tracing::instrument(skip_all, fields(input = %config.input_dir.display()))]
pub fn run_batch(
    config: &BatchConfig,
    notifier: &dyn Notifier,
    progress: &ProgressBar,
) -> Result<BatchReport, AppError> {
    config
        .validate()
        .map_err(|e| AppError::Config(e.to_string()))?;
    if !config.input_dir.exists() {
        return Err(AppError::InputDirMissing(config.input_dir.clone()));
    }
    if !config.logo_path.exists() {
        return Err(AppError::LogoMissing(config.logo_path.clone()));
    }

    let cleanup = remove_unwanted_files(&config.input_dir, &config.unwanted_extensions).map_err(
        |source| AppError::DirectoryRead {
            path: config.input_dir.clone(),
            source,
        },
    )?;

    let logo = LogoLoader::load(&config.logo_path).map_err(|e| AppError::LogoLoad {
        path: config.logo_path.clone(),
        source: e.into(),
    })?;

    let conversion = BatchConverter::new(config, &logo).convert_directory(progress)?;
    progress.finish();

    if config.notification.enabled {
        let notification = Notification {
            title: config.notification.title.clone(),
            message: config.notification.message.clone(),
            timeout_secs: config.notification.timeout_secs,
        };
        if let Err(e) = notifier.notify(&notification) {
            tracing::warn!(notifier = notifier.name(), error = %e, "Failed to send notification");
        }
    }

    tracing::info!(
        deleted = cleanup.removed.len(),
        converted = conversion.converted_count(),
        failed = conversion.failed_count(),
        "Conversion finished!"
    );

    Ok(BatchReport {
        cleanup,
        conversion,
    })
}

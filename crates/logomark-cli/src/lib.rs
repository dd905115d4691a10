use indicatif::{ProgressBar, ProgressStyle};
use logomark_core::{AppError, BatchReport, NoOpNotifier, NotificationConfig, Notifier};
use logomark_infra::DesktopNotifier;

const PROGRESS_TEMPLATE: &str = "{msg}: {percent:>3}%|{wide_bar}| {pos}/{len} [{elapsed_precise}<{eta_precise}]";

/// Console progress bar for the conversion loop. Its length is set once the
/// input directory has been listed.
pub fn progress_bar() -> ProgressBar {
    let style = ProgressStyle::with_template(PROGRESS_TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_bar());
    let bar = ProgressBar::new(0).with_style(style);
    bar.set_message("Processing images");
    bar
}

/// Desktop notifier when notifications are enabled and a session bus is
/// reachable, otherwise a no-op.
pub fn notifier_for(config: &NotificationConfig) -> Box<dyn Notifier> {
    select_notifier(config, DesktopNotifier::is_available)
}

fn select_notifier<F>(config: &NotificationConfig, bus_available: F) -> Box<dyn Notifier>
where
    F: FnOnce() -> bool,
{
    if !config.enabled {
        return Box::new(NoOpNotifier);
    }
    if !bus_available() {
        tracing::warn!("Desktop notifications unavailable, continuing without them");
        return Box::new(NoOpNotifier);
    }
    Box::new(DesktopNotifier::new())
}

/// Extra hint logged after a failed run: whether the batch stopped before
/// touching any file.
pub fn failure_hint(err: &anyhow::Error) -> Option<&'static str> {
    let app_error = err.downcast_ref::<AppError>()?;
    if app_error.is_preflight() {
        Some("No files were deleted or written")
    } else {
        None
    }
}

/// One-line summary printed after a run
pub fn summary_line(report: &BatchReport) -> String {
    let conversion = &report.conversion;
    let mut line = format!(
        "{} of {} images converted, {} raw files deleted",
        conversion.converted_count(),
        conversion.total,
        report.cleanup.removed.len()
    );
    if conversion.failed_count() > 0 {
        line.push_str(&format!(", {} failed", conversion.failed_count()));
    }
    if conversion.unwatermarked_count() > 0 {
        line.push_str(&format!(
            ", {} saved without logo",
            conversion.unwatermarked_count()
        ));
    }
    line
}

//! logomark: watermark every image in the input directory with a logo.
//!
//! Configuration comes from the environment (or `.env`); see `BatchConfig::from_env`.

use anyhow::Context;
use logomark_cli::{failure_hint, notifier_for, progress_bar, summary_line};
use logomark_core::BatchConfig;
use logomark_infra::init_tracing;
use logomark_processing::run_batch;
use std::process::ExitCode;

fn main() -> ExitCode {
    init_tracing();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{:#}", e);
            if let Some(hint) = failure_hint(&e) {
                tracing::info!("{}", hint);
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<()> {
    let config = BatchConfig::from_env().context("Invalid configuration")?;
    let notifier = notifier_for(&config.notification);
    let progress = progress_bar();

    let report = run_batch(&config, &*notifier, &progress).context("Batch conversion failed")?;

    tracing::info!("{}", summary_line(&report));
    Ok(())
}

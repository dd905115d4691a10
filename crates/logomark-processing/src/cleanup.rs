//! Removal of raw-photo files from the input directory

use logomark_core::CleanupReport;
use std::fs;
use std::io;
use std::path::Path;

/// Whether a file name ends with one of the unwanted extensions (case-insensitive).
///
/// `extensions` are expected lowercase and include the leading dot.
pub fn is_unwanted(file_name: &str, extensions: &[String]) -> bool {
    let lower = file_name.to_lowercase();
    extensions.iter().any(|ext| lower.ends_with(ext.as_str()))
}

/// Delete every entry of `dir` (non-recursive) whose name matches `extensions`.
///
/// A file that cannot be deleted is logged and recorded in the report; the scan
/// continues with the next entry. Only a failure to list `dir` itself is
/// returned as an error.
#[tracing::instrument(skip(extensions), fields(dir = %dir.display()))]
pub fn remove_unwanted_files(dir: &Path, extensions: &[String]) -> io::Result<CleanupReport> {
    let mut report = CleanupReport::default();

    for entry in fs::read_dir(dir)? {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read directory entry");
                continue;
            }
        };

        let file_name = entry.file_name().to_string_lossy().into_owned();
        if !is_unwanted(&file_name, extensions) {
            continue;
        }

        match fs::remove_file(entry.path()) {
            Ok(()) => {
                tracing::info!(file = %file_name, "Deleted file: {}", file_name);
                report.removed.push(file_name);
            }
            Err(e) => {
                tracing::warn!(file = %file_name, error = %e, "Failed to delete {}", file_name);
                report.failed.push((file_name, e.to_string()));
            }
        }
    }

    Ok(report)
}

// src/export/mod.rs

pub mod csv;
mod report_file;

pub use self::csv::{export_csv, export_filename};
pub use report_file::save_report;

use crate::ui::messages::success;
use std::path::Path;

/// Shared completion message for exports.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

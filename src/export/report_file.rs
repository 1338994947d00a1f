// src/export/report_file.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Write a finished report as `dir/filename` and return the full path.
///
/// The directory is created when missing. An existing report is replaced
/// only with `force` or after the user answers `y` on stdin.
pub fn save_report(dir: &Path, filename: &str, bytes: &[u8], force: bool) -> AppResult<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(filename);

    if path.exists() && !force {
        warning(format!("Report '{}' already exists.", path.display()));
        print!("Replace it? [y/N]: ");
        io::stdout().flush()?;

        let mut answer = String::new();
        io::stdin().read_line(&mut answer)?;
        if !matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes") {
            return Err(AppError::Export(format!(
                "'{}' not overwritten (use --force to replace it)",
                path.display()
            )));
        }
        info("Replacing the existing report.");
    }

    fs::write(&path, bytes)?;
    Ok(path)
}

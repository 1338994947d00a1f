use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::{notify_export_success, save_report};
use crate::ui::messages::info;
use std::path::Path;

use super::{open_session, resolve_month};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export { month, dir, force } = cmd {
        let month = resolve_month(month)?;
        let session = open_session(cfg, month)?;

        info(format!("Exporting {} to CSV", month.label()));
        let report = session.export()?;

        let out_dir = dir.as_deref().unwrap_or(cfg.export_dir.as_str());
        let path = save_report(Path::new(out_dir), &report.filename, &report.bytes, *force)?;

        notify_export_success("CSV", &path);
    }
    Ok(())
}

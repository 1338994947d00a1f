use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::db::SqliteKv;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (kept if present, unless `--force`)
///  - the SQLite database with its key-value table
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Init { force } = &cli.command {
        let path = cfg.write(*force)?;
        success(format!("Config file : {}", path.display()));

        SqliteKv::open(&cfg.database)?;
        success(format!("Database    : {}", cfg.database));
    }
    Ok(())
}

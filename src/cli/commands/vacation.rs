use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;

use super::{month_of, open_session, parse_date_arg};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Vacation { date } = cmd {
        let date = parse_date_arg(date)?;
        let mut session = open_session(cfg, month_of(date))?;

        if session.toggle_vacation(date)? {
            success(format!("{date} marked as full day off"));
        } else {
            success(format!("{date} is a working day again"));
        }
    }
    Ok(())
}

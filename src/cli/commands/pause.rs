use crate::cli::parser::{Commands, PauseAction};
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::PauseEnd;
use crate::ui::messages::{success, warning};

use super::{month_of, open_session, parse_date_arg, pause_index, user_pause_error};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Pause { action } = cmd else {
        return Ok(());
    };

    match action {
        PauseAction::Add { date, start, end } => {
            let date = parse_date_arg(date)?;
            let mut session = open_session(cfg, month_of(date))?;

            let index = session.add_pause(date)?;
            if let Some(s) = start {
                session.update_pause(date, index, PauseEnd::Start, s)?;
            }
            if let Some(e) = end {
                session.update_pause(date, index, PauseEnd::End, e)?;
            }

            let day = session.day(date);
            let pause = &day.pauses[index];
            success(format!("Pause #{} added on {}: {}", index + 1, date, pause.label()));
        }

        PauseAction::Set {
            date,
            index,
            start,
            end,
        } => {
            let date = parse_date_arg(date)?;
            let i = pause_index(*index)?;
            let mut session = open_session(cfg, month_of(date))?;

            if start.is_none() && end.is_none() {
                warning("Nothing to update: use --start and/or --end.");
                return Ok(());
            }
            if let Some(s) = start {
                session
                    .update_pause(date, i, PauseEnd::Start, s)
                    .map_err(user_pause_error(*index))?;
            }
            if let Some(e) = end {
                session
                    .update_pause(date, i, PauseEnd::End, e)
                    .map_err(user_pause_error(*index))?;
            }

            let day = session.day(date);
            let pause = &day.pauses[i];
            success(format!("Pause #{} on {}: {}", index, date, pause.label()));
        }

        PauseAction::Del { date, index } => {
            let date = parse_date_arg(date)?;
            let i = pause_index(*index)?;
            let mut session = open_session(cfg, month_of(date))?;

            let removed = session
                .remove_pause(date, i)
                .map_err(user_pause_error(*index))?;
            success(format!(
                "Pause #{} removed from {} ({})",
                index,
                date,
                removed.label()
            ));
        }
    }

    Ok(())
}

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::DayField;
use crate::ui::messages::{success, warning};
use crate::utils::time::{format_hours, parse_hours, parse_time};

use super::{month_of, open_session, parse_date_arg};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Set {
        date,
        start,
        end,
        time_off,
    } = cmd
    {
        let date = parse_date_arg(date)?;
        let mut session = open_session(cfg, month_of(date))?;

        let edits = [
            (DayField::Start, start),
            (DayField::End, end),
            (DayField::TimeOff, time_off),
        ];

        let mut touched = false;
        for (field, value) in edits {
            let Some(v) = value else { continue };

            // accepted as typed; unparsable values simply count as zero
            let unparsable = !v.trim().is_empty()
                && match field {
                    DayField::Start | DayField::End => parse_time(v).is_none(),
                    DayField::TimeOff => parse_hours(v).is_none(),
                };
            if unparsable {
                warning(format!("'{v}' is not a valid value for {field:?}; it will count as 0."));
            }

            session.set_field(date, field, v)?;
            touched = true;
        }

        if !touched {
            warning("Nothing to update: use --start, --end or --time-off.");
            return Ok(());
        }

        let day = session.day(date);
        success(format!(
            "{} updated: worked {}h",
            date,
            format_hours(day.worked_hours())
        ));
    }
    Ok(())
}

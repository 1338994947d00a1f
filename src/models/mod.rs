pub mod date_key;
pub mod day_record;
pub mod month;
pub mod pause;
pub mod text;

pub use date_key::DateKey;
pub use day_record::{DayField, DayRecord};
pub use month::MonthRef;
pub use pause::{PauseEnd, PauseInterval};

use chrono::Weekday;

use crate::error::{HoursError, Result};

/// `0 = Sunday .. 6 = Saturday`, the numbering browsers and most clocks use.
pub fn weekday_from_index(day: u8) -> Result<Weekday> {
    let weekday = match day {
        0 => Weekday::Sun,
        1 => Weekday::Mon,
        2 => Weekday::Tue,
        3 => Weekday::Wed,
        4 => Weekday::Thu,
        5 => Weekday::Fri,
        6 => Weekday::Sat,
        _ => return Err(HoursError::DayOutOfRange(day)),
    };
    Ok(weekday)
}

/// How a day is treated when phrasing the next opening.
///
/// Sunday and Saturday differ from the rest because the day after them
/// runs a different schedule.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DayClass {
    Sunday,
    Saturday,
    Weekday,
}

impl DayClass {
    pub fn of(day: Weekday) -> Self {
        match day {
            Weekday::Sun => DayClass::Sunday,
            Weekday::Sat => DayClass::Saturday,
            _ => DayClass::Weekday,
        }
    }

    /// A day whose schedule matches "tomorrow" for this class.
    pub fn tomorrow(&self) -> Weekday {
        match self {
            DayClass::Sunday => Weekday::Mon,
            DayClass::Saturday => Weekday::Sun,
            DayClass::Weekday => Weekday::Mon,
        }
    }
}

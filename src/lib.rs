pub mod badge;
pub mod config;
pub mod error;
pub mod status;
pub mod timing;

use std::sync::OnceLock;

pub use badge::Badge;
pub use error::{HoursError, Result};
pub use status::{NextOpening, StatusResult};
pub use timing::{
    period::ServicePeriod, schedule::WeeklySchedule, time_of_day::TimeOfDay,
};

fn standard_schedule() -> &'static WeeklySchedule {
    static STANDARD: OnceLock<WeeklySchedule> = OnceLock::new();
    STANDARD.get_or_init(WeeklySchedule::standard)
}

/**
Evaluate the posted hours for a day (`0 = Sunday .. 6 = Saturday`) and a
fractional time of day (`15.5` = 15:30).

Inputs outside those ranges are rejected with a `HoursError` rather than
clamped.
*/
pub fn evaluate(day_of_week: u8, time_of_day: f64) -> Result<StatusResult> {
    let day = timing::day::weekday_from_index(day_of_week)?;
    let time = TimeOfDay::from_hours(time_of_day)?;
    Ok(standard_schedule().evaluate(day, time))
}

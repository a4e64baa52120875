use chrono::{DateTime, Local};
use chrono_tz::Tz;

/// Current wall-clock time in the shop's time zone.
pub fn shop_datetime_now(timezone: Tz) -> DateTime<Tz> {
    let local_datetime = Local::now();
    local_datetime.with_timezone(&timezone)
}

pub mod day;
pub mod period;
pub mod schedule;
pub mod shop_datetime_now;
pub mod time_of_day;

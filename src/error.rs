use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum HoursError {
    #[error("day of week {0} is outside 0..=6 (0 = Sunday)")]
    DayOutOfRange(u8),

    #[error("time of day {0} is outside [0, 24)")]
    TimeOutOfRange(f64),

    #[error("{hour:02}:{minute:02} is not a wall-clock time")]
    InvalidClock { hour: u32, minute: u32 },

    #[error("invalid schedule: {0}")]
    InvalidSchedule(String),

    #[error("could not load config: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, HoursError>;

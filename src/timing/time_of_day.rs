use std::fmt;

use chrono::Timelike;
use serde::{Serialize, Serializer};

use crate::error::{HoursError, Result};

pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// Wall-clock time within a day, stored as minutes since midnight.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    /// For schedule constants. Panics at compile time on a bad literal.
    pub(crate) const fn hm(hour: u16, minute: u16) -> Self {
        assert!(hour < 24 && minute < 60);
        Self(hour * 60 + minute)
    }

    pub fn from_hm(hour: u32, minute: u32) -> Result<Self> {
        if hour >= 24 || minute >= 60 {
            return Err(HoursError::InvalidClock { hour, minute });
        }
        Ok(Self((hour * 60 + minute) as u16))
    }

    /**
    Build from fractional hours, e.g. `15.5` for 15:30.

    Anything outside `[0, 24)` (NaN and infinities included) is rejected.
    Sub-minute fractions are floored: the result is the last minute `m` with
    `m / 60 <= hours`, which keeps `>=` against any whole-minute boundary exact.
    */
    pub fn from_hours(hours: f64) -> Result<Self> {
        if !hours.is_finite() || hours < 0.0 || hours >= 24.0 {
            return Err(HoursError::TimeOutOfRange(hours));
        }
        // largest minute m with m / 60 <= hours, so minute / 60 maps back exactly
        let mut minutes = (hours * 60.0).floor();
        if minutes / 60.0 > hours {
            minutes -= 1.0;
        } else if (minutes + 1.0) / 60.0 <= hours {
            minutes += 1.0;
        }
        Ok(Self((minutes as u16).min(MINUTES_PER_DAY - 1)))
    }

    pub fn from_timestamp<T: Timelike>(timestamp: &T) -> Self {
        Self((timestamp.hour() * 60 + timestamp.minute()) as u16)
    }

    pub fn minutes(&self) -> u16 {
        self.0
    }

    pub fn hour(&self) -> u16 {
        self.0 / 60
    }

    pub fn minute(&self) -> u16 {
        self.0 % 60
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

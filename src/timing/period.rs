use serde::Serialize;

use super::time_of_day::TimeOfDay;
use crate::error::{HoursError, Result};

/// One contiguous stretch of service, e.g. lunch.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicePeriod {
    open: TimeOfDay,
    last_order: TimeOfDay,
    close: TimeOfDay,
}

impl ServicePeriod {
    pub const fn new(open: TimeOfDay, last_order: TimeOfDay, close: TimeOfDay) -> Self {
        Self {
            open,
            last_order,
            close,
        }
    }

    pub fn open(&self) -> TimeOfDay {
        self.open
    }

    pub fn last_order(&self) -> TimeOfDay {
        self.last_order
    }

    pub fn close(&self) -> TimeOfDay {
        self.close
    }

    /// `[open, close)`
    pub fn contains(&self, time: TimeOfDay) -> bool {
        self.open <= time && time < self.close
    }

    pub fn is_past_last_order(&self, time: TimeOfDay) -> bool {
        time >= self.last_order
    }

    pub fn validate(&self) -> Result<()> {
        if self.open < self.last_order && self.last_order < self.close {
            return Ok(());
        }
        Err(HoursError::InvalidSchedule(format!(
            "period {}-{} needs open < last order ({}) < close",
            self.open, self.close, self.last_order
        )))
    }
}

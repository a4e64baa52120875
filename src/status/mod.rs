pub mod next_opening;

use serde::Serialize;

use crate::timing::{period::ServicePeriod, time_of_day::TimeOfDay};
pub use next_opening::NextOpening;

/// Outcome of a single evaluation. Recomputed on demand, never stored.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResult {
    is_open: bool,
    is_near_close: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    close_time: Option<TimeOfDay>,
    #[serde(skip_serializing_if = "Option::is_none")]
    last_order_time: Option<TimeOfDay>,
    #[serde(rename = "nextOpeningMessage", skip_serializing_if = "Option::is_none")]
    next_opening: Option<NextOpening>,
}

impl StatusResult {
    pub fn open(period: &ServicePeriod, now: TimeOfDay) -> Self {
        Self {
            is_open: true,
            is_near_close: period.is_past_last_order(now),
            close_time: Some(period.close()),
            last_order_time: Some(period.last_order()),
            next_opening: None,
        }
    }

    pub fn closed(next_opening: NextOpening) -> Self {
        Self {
            is_open: false,
            is_near_close: false,
            close_time: None,
            last_order_time: None,
            next_opening: Some(next_opening),
        }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn is_near_close(&self) -> bool {
        self.is_near_close
    }

    pub fn close_time(&self) -> Option<TimeOfDay> {
        self.close_time
    }

    pub fn last_order_time(&self) -> Option<TimeOfDay> {
        self.last_order_time
    }

    pub fn next_opening(&self) -> Option<NextOpening> {
        self.next_opening
    }

    pub fn next_opening_message(&self) -> Option<String> {
        self.next_opening.map(|next| next.to_string())
    }
}

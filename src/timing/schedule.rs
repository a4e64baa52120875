use chrono::{DateTime, Datelike, Weekday};
use chrono_tz::Tz;
use tracing::trace;

use super::day::DayClass;
use super::period::ServicePeriod;
use super::time_of_day::TimeOfDay;
use crate::error::{HoursError, Result};
use crate::status::{NextOpening, StatusResult};

const SUNDAY: [ServicePeriod; 2] = [
    ServicePeriod::new(TimeOfDay::hm(11, 0), TimeOfDay::hm(15, 0), TimeOfDay::hm(15, 30)),
    ServicePeriod::new(TimeOfDay::hm(17, 0), TimeOfDay::hm(19, 30), TimeOfDay::hm(20, 0)),
];

// Monday to Saturday
const WEEKDAY: [ServicePeriod; 2] = [
    ServicePeriod::new(TimeOfDay::hm(11, 30), TimeOfDay::hm(14, 30), TimeOfDay::hm(15, 0)),
    ServicePeriod::new(TimeOfDay::hm(17, 0), TimeOfDay::hm(22, 0), TimeOfDay::hm(23, 0)),
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeeklySchedule {
    sunday: Vec<ServicePeriod>,
    weekday: Vec<ServicePeriod>,
}

impl WeeklySchedule {
    /**
    Build a schedule from the Sunday and Monday-Saturday period lists.

    Each list must be non-empty, ordered by opening time and free of overlaps,
    and every period must satisfy `open < last order < close`.
    */
    pub fn new(sunday: Vec<ServicePeriod>, weekday: Vec<ServicePeriod>) -> Result<Self> {
        Self::validate_day("sunday", &sunday)?;
        Self::validate_day("weekday", &weekday)?;
        Ok(Self { sunday, weekday })
    }

    /// The shop's posted hours.
    pub fn standard() -> Self {
        Self {
            sunday: SUNDAY.to_vec(),
            weekday: WEEKDAY.to_vec(),
        }
    }

    pub fn periods(&self, day: Weekday) -> &[ServicePeriod] {
        match day {
            Weekday::Sun => &self.sunday,
            _ => &self.weekday,
        }
    }

    pub fn active_period(&self, day: Weekday, time: TimeOfDay) -> Option<&ServicePeriod> {
        self.periods(day).iter().find(|period| period.contains(time))
    }

    /**
    Where the next service starts, seen from a moment when the shop is closed.

    Later today if any period still has to open, otherwise the first opening
    of tomorrow's schedule.
    */
    pub fn next_opening(&self, day: Weekday, time: TimeOfDay) -> NextOpening {
        if let Some(period) = self.periods(day).iter().find(|period| period.open() > time) {
            return NextOpening::Today(period.open());
        }
        let tomorrow = DayClass::of(day).tomorrow();
        NextOpening::Tomorrow(self.first_opening(tomorrow))
    }

    pub fn evaluate(&self, day: Weekday, time: TimeOfDay) -> StatusResult {
        let status = match self.active_period(day, time) {
            Some(period) => StatusResult::open(period, time),
            None => StatusResult::closed(self.next_opening(day, time)),
        };
        trace!(?day, %time, ?status, "evaluated business hours");
        status
    }

    pub fn evaluate_datetime(&self, timestamp: &DateTime<Tz>) -> StatusResult {
        self.evaluate(timestamp.weekday(), TimeOfDay::from_timestamp(timestamp))
    }

    fn first_opening(&self, day: Weekday) -> TimeOfDay {
        // Both lists are non-empty once built.
        self.periods(day)
            .first()
            .map(ServicePeriod::open)
            .unwrap_or(TimeOfDay::hm(0, 0))
    }

    fn validate_day(name: &str, periods: &[ServicePeriod]) -> Result<()> {
        if periods.is_empty() {
            return Err(HoursError::InvalidSchedule(format!("{} has no service periods", name)));
        }
        for period in periods {
            period.validate()?;
        }
        for pair in periods.windows(2) {
            if pair[1].open() < pair[0].close() {
                return Err(HoursError::InvalidSchedule(format!(
                    "{} periods starting {} and {} overlap or are out of order",
                    name,
                    pair[0].open(),
                    pair[1].open()
                )));
            }
        }
        Ok(())
    }
}

impl Default for WeeklySchedule {
    fn default() -> Self {
        Self::standard()
    }
}

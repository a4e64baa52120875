use std::fmt;

use serde::{Serialize, Serializer};

use crate::timing::time_of_day::TimeOfDay;

/// When service resumes after a closed evaluation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NextOpening {
    Today(TimeOfDay),
    Tomorrow(TimeOfDay),
}

impl fmt::Display for NextOpening {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NextOpening::Today(time) => write!(f, "{}から営業", time),
            NextOpening::Tomorrow(time) => write!(f, "明日{}から", time),
        }
    }
}

impl Serialize for NextOpening {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(NextOpening::Today(TimeOfDay::hm(17, 0)).to_string(), "17:00から営業");
        assert_eq!(NextOpening::Tomorrow(TimeOfDay::hm(11, 0)).to_string(), "明日11:00から");
    }
}

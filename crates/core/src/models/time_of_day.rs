use std::{cmp::Ordering, fmt, str::FromStr};

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::{ScheduleError, ScheduleResult};

/// Wall-clock time with minute granularity, stored as minutes since midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    pub fn from_hm(hour: u16, minute: u16) -> ScheduleResult<Self> {
        if hour >= 24 || minute >= 60 {
            return Err(ScheduleError::Validation(format!(
                "Time out of range: {:02}:{:02}",
                hour, minute
            )));
        }
        Ok(Self(hour * 60 + minute))
    }

    pub fn minutes(self) -> u16 {
        self.0
    }

    pub fn hour(self) -> u16 {
        self.0 / 60
    }

    pub fn minute(self) -> u16 {
        self.0 % 60
    }
}

pub fn compare_time(a: TimeOfDay, b: TimeOfDay) -> Ordering {
    a.cmp(&b)
}

/// Half-open interval test: `[a_start, a_end)` and `[b_start, b_end)`
/// intersect. Touching endpoints do not overlap.
pub fn overlaps(a_start: TimeOfDay, a_end: TimeOfDay, b_start: TimeOfDay, b_end: TimeOfDay) -> bool {
    a_start < b_end && b_start < a_end
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimeOfDay {
    type Err = ScheduleError;

    /// Accepts `HH:MM`, or `HH:MM:SS` with zero seconds as returned for
    /// database `TIME` columns. Every field must be exactly two digits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ScheduleError::Validation(format!("Invalid time '{}', expected HH:MM", s));

        let trimmed = s.trim();
        if !is_two_digit_fields(trimmed) {
            return Err(invalid());
        }
        let time = NaiveTime::parse_from_str(trimmed, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M:%S"))
            .map_err(|_| invalid())?;

        TimeOfDay::try_from(time)
    }
}

// chrono's %H and %M also take single digits ("8:5")
fn is_two_digit_fields(text: &str) -> bool {
    let fields: Vec<&str> = text.split(':').collect();
    matches!(fields.len(), 2 | 3)
        && fields
            .iter()
            .all(|field| field.len() == 2 && field.bytes().all(|b| b.is_ascii_digit()))
}

impl TryFrom<NaiveTime> for TimeOfDay {
    type Error = ScheduleError;

    fn try_from(time: NaiveTime) -> Result<Self, Self::Error> {
        if time.second() != 0 || time.nanosecond() != 0 {
            return Err(ScheduleError::Validation(format!(
                "Time {} has sub-minute precision",
                time
            )));
        }
        // hour < 24 and minute < 60 are guaranteed by NaiveTime
        Ok(Self((time.hour() * 60 + time.minute()) as u16))
    }
}

impl From<TimeOfDay> for NaiveTime {
    fn from(time: TimeOfDay) -> Self {
        NaiveTime::from_hms_opt(u32::from(time.hour()), u32::from(time.minute()), 0)
            .unwrap_or_default()
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

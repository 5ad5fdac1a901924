use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::{ScheduleError, ScheduleResult};

/// Teaching days of the week. Sunday is never scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    /// All teaching days in rank order.
    pub const ALL: [Weekday; 6] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    /// Sort key for display ordering, Monday = 0 through Saturday = 5.
    pub fn rank(self) -> u8 {
        match self {
            Weekday::Monday => 0,
            Weekday::Tuesday => 1,
            Weekday::Wednesday => 2,
            Weekday::Thursday => 3,
            Weekday::Friday => 4,
            Weekday::Saturday => 5,
        }
    }

    /// Canonical lowercase English name, as stored and serialized.
    pub fn as_str(self) -> &'static str {
        match self {
            Weekday::Monday => "monday",
            Weekday::Tuesday => "tuesday",
            Weekday::Wednesday => "wednesday",
            Weekday::Thursday => "thursday",
            Weekday::Friday => "friday",
            Weekday::Saturday => "saturday",
        }
    }
}

/// Rank of a weekday given as free text.
///
/// Anything outside the six teaching days, Sunday included, is a
/// [`ScheduleError::Validation`].
pub fn weekday_rank(weekday: &str) -> ScheduleResult<u8> {
    weekday.parse::<Weekday>().map(Weekday::rank)
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Weekday {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        // The academic UI labels days in Portuguese, optionally with "-feira".
        let normalized = normalized.strip_suffix("-feira").unwrap_or(&normalized);

        match normalized {
            "monday" | "mon" | "segunda" => Ok(Weekday::Monday),
            "tuesday" | "tue" | "terça" | "terca" => Ok(Weekday::Tuesday),
            "wednesday" | "wed" | "quarta" => Ok(Weekday::Wednesday),
            "thursday" | "thu" | "quinta" => Ok(Weekday::Thursday),
            "friday" | "fri" | "sexta" => Ok(Weekday::Friday),
            "saturday" | "sat" | "sábado" | "sabado" => Ok(Weekday::Saturday),
            "sunday" | "sun" | "domingo" => Err(ScheduleError::Validation(
                "Sunday is not a teaching day".to_string(),
            )),
            _ => Err(ScheduleError::Validation(format!("Unknown weekday: {}", s))),
        }
    }
}

impl TryFrom<chrono::Weekday> for Weekday {
    type Error = ScheduleError;

    fn try_from(day: chrono::Weekday) -> Result<Self, Self::Error> {
        match day {
            chrono::Weekday::Mon => Ok(Weekday::Monday),
            chrono::Weekday::Tue => Ok(Weekday::Tuesday),
            chrono::Weekday::Wed => Ok(Weekday::Wednesday),
            chrono::Weekday::Thu => Ok(Weekday::Thursday),
            chrono::Weekday::Fri => Ok(Weekday::Friday),
            chrono::Weekday::Sat => Ok(Weekday::Saturday),
            chrono::Weekday::Sun => Err(ScheduleError::Validation(
                "Sunday is not a teaching day".to_string(),
            )),
        }
    }
}

impl Serialize for Weekday {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Weekday {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

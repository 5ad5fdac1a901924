use thiserror::Error;
use uuid::Uuid;

use crate::models::{time_of_day::TimeOfDay, weekday::Weekday};

#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("Invalid time range: start {start} must be before end {end}")]
    InvalidRange { start: TimeOfDay, end: TimeOfDay },

    #[error("Slot conflicts with existing session {start}-{end} on {weekday} (slot {conflicting_id})")]
    OverlapConflict {
        conflicting_id: Uuid,
        weekday: Weekday,
        start: TimeOfDay,
        end: TimeOfDay,
    },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Store error: {0}")]
    Store(#[from] eyre::Report),
}

impl ScheduleError {
    /// True for errors raised before the record store was written to.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ScheduleError::InvalidRange { .. }
                | ScheduleError::OverlapConflict { .. }
                | ScheduleError::Validation(_)
        )
    }
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;

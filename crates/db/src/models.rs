use academico_core::{
    errors::ScheduleError,
    models::{Slot, TimeOfDay},
};
use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbSlot {
    pub id: Uuid,
    pub subject_id: Uuid,
    pub section: Option<String>,
    pub weekday: String,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub room: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<DbSlot> for Slot {
    type Error = ScheduleError;

    fn try_from(row: DbSlot) -> Result<Self, Self::Error> {
        Ok(Slot {
            id: row.id,
            subject_id: row.subject_id,
            section: row.section,
            weekday: row.weekday.parse()?,
            start_time: TimeOfDay::try_from(row.start_time)?,
            end_time: TimeOfDay::try_from(row.end_time)?,
            room: row.room,
        })
    }
}

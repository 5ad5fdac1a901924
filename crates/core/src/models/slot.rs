use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{ScheduleError, ScheduleResult};

use super::{time_of_day::TimeOfDay, weekday::Weekday};

/// A weekly recurring class meeting as held by the record store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub id: Uuid,
    pub subject_id: Uuid,
    pub section: Option<String>,
    pub weekday: Weekday,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
    pub room: Option<String>,
}

/// Submitted fields for a new or edited slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotInput {
    pub subject_id: Uuid,
    #[serde(default)]
    pub section: Option<String>,
    pub weekday: Weekday,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
    #[serde(default)]
    pub room: Option<String>,
}

impl SlotInput {
    /// Rejects ranges where the start is not strictly before the end.
    pub fn check_range(&self) -> ScheduleResult<()> {
        if self.start_time >= self.end_time {
            return Err(ScheduleError::InvalidRange {
                start: self.start_time,
                end: self.end_time,
            });
        }
        Ok(())
    }

    /// Trims free-text labels and turns blank ones into `None`.
    pub fn normalized(mut self) -> Self {
        self.section = trim_label(self.section);
        self.room = trim_label(self.room);
        self
    }

    /// Builds the committed slot once the store has assigned an id.
    pub fn into_slot(self, id: Uuid) -> Slot {
        Slot {
            id,
            subject_id: self.subject_id,
            section: self.section,
            weekday: self.weekday,
            start_time: self.start_time,
            end_time: self.end_time,
            room: self.room,
        }
    }
}

impl From<&Slot> for SlotInput {
    fn from(slot: &Slot) -> Self {
        Self {
            subject_id: slot.subject_id,
            section: slot.section.clone(),
            weekday: slot.weekday,
            start_time: slot.start_time,
            end_time: slot.end_time,
            room: slot.room.clone(),
        }
    }
}

/// Record store query. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotFilter {
    pub subject_id: Option<Uuid>,
    pub section: Option<String>,
    pub weekday: Option<Weekday>,
}

impl SlotFilter {
    pub fn matches(&self, slot: &Slot) -> bool {
        self.subject_id.is_none_or(|id| id == slot.subject_id)
            && self
                .section
                .as_deref()
                .is_none_or(|section| slot.section.as_deref() == Some(section))
            && self.weekday.is_none_or(|day| day == slot.weekday)
    }
}

/// Which field, together with the weekday, scopes the no-overlap rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScopeKey {
    #[default]
    Subject,
    Section,
}

impl ScopeKey {
    /// The store filter selecting every slot that shares the candidate's scope.
    pub fn filter_for(self, candidate: &SlotInput) -> ScheduleResult<SlotFilter> {
        match self {
            ScopeKey::Subject => Ok(SlotFilter {
                subject_id: Some(candidate.subject_id),
                section: None,
                weekday: Some(candidate.weekday),
            }),
            ScopeKey::Section => {
                let section = section_of(candidate)?;
                Ok(SlotFilter {
                    subject_id: None,
                    section: Some(section.to_string()),
                    weekday: Some(candidate.weekday),
                })
            }
        }
    }

    /// True when `slot` falls in the same scope and weekday as `candidate`.
    pub fn shares_scope(self, candidate: &SlotInput, slot: &Slot) -> bool {
        if candidate.weekday != slot.weekday {
            return false;
        }
        match self {
            ScopeKey::Subject => candidate.subject_id == slot.subject_id,
            ScopeKey::Section => {
                candidate.section.is_some() && candidate.section == slot.section
            }
        }
    }
}

fn trim_label(label: Option<String>) -> Option<String> {
    label
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty())
}

fn section_of(candidate: &SlotInput) -> ScheduleResult<&str> {
    candidate
        .section
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| {
            ScheduleError::Validation("Section is required when slots are scoped by section".to_string())
        })
}

impl fmt::Display for ScopeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScopeKey::Subject => f.write_str("subject"),
            ScopeKey::Section => f.write_str("section"),
        }
    }
}

impl FromStr for ScopeKey {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "subject" => Ok(ScopeKey::Subject),
            "section" | "turma" => Ok(ScopeKey::Section),
            other => Err(ScheduleError::Validation(format!("Unknown scope key: {}", other))),
        }
    }
}

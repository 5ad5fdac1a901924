//! # Slot Validation
//!
//! Decides whether a candidate slot may be committed. Validation always runs
//! against the freshly fetched slot set for the candidate's scope; the sets
//! involved are a single class's weekly sessions, so no index is kept.

use serde::Serialize;
use uuid::Uuid;

use crate::{
    errors::{ScheduleError, ScheduleResult},
    models::{ScopeKey, Slot, SlotInput, time_of_day::overlaps},
};

/// Checks `candidate` against `existing` under the given scope.
///
/// Slots outside the candidate's scope and weekday are ignored, as is the
/// slot identified by `exclude_id` (the slot being edited).
///
/// # Errors
///
/// * `ScheduleError::InvalidRange` - start is not before end; checked first
/// * `ScheduleError::Validation` - section scope without a section
/// * `ScheduleError::OverlapConflict` - first existing slot that overlaps
pub fn validate_slot(
    candidate: &SlotInput,
    existing: &[Slot],
    scope: ScopeKey,
    exclude_id: Option<Uuid>,
) -> ScheduleResult<()> {
    candidate.check_range()?;

    if scope == ScopeKey::Section && candidate.section.is_none() {
        return Err(ScheduleError::Validation(
            "Section is required when slots are scoped by section".to_string(),
        ));
    }

    let conflict = existing
        .iter()
        .filter(|slot| Some(slot.id) != exclude_id)
        .filter(|slot| scope.shares_scope(candidate, slot))
        .find(|slot| {
            overlaps(
                candidate.start_time,
                candidate.end_time,
                slot.start_time,
                slot.end_time,
            )
        });

    match conflict {
        Some(slot) => Err(ScheduleError::OverlapConflict {
            conflicting_id: slot.id,
            weekday: slot.weekday,
            start: slot.start_time,
            end: slot.end_time,
        }),
        None => Ok(()),
    }
}

/// Two stored slots that violate the no-overlap rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConflictPair {
    pub first: Slot,
    pub second: Slot,
}

/// Finds every pair in `slots` that already breaks the no-overlap rule.
///
/// The store does not enforce the rule, so rows written out of band can
/// conflict. Pairs are reported once, in the order the slots were given.
pub fn find_conflicts(slots: &[Slot], scope: ScopeKey) -> Vec<ConflictPair> {
    let mut pairs = Vec::new();
    for (i, first) in slots.iter().enumerate() {
        let as_input = SlotInput::from(first);
        for second in &slots[i + 1..] {
            if scope.shares_scope(&as_input, second)
                && overlaps(
                    first.start_time,
                    first.end_time,
                    second.start_time,
                    second.end_time,
                )
            {
                pairs.push(ConflictPair {
                    first: first.clone(),
                    second: second.clone(),
                });
            }
        }
    }
    pairs
}

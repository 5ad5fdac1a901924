//! # Slot Manager
//!
//! Orchestrates validate-then-write against a [`SlotStore`]. A candidate is
//! committed only after validation against the current scope set passes and
//! the store write succeeds; any failure leaves nothing persisted.
//!
//! The manager holds no slot state between calls. Concurrent writers to the
//! same scope can still race between the read and the write, since nothing
//! here locks the store.

use std::sync::Arc;

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::{
    errors::ScheduleResult,
    models::{ScopeKey, Slot, SlotFilter, SlotInput},
    ordering::{TimetableDay, group_by_weekday, sort_slots},
    store::SlotStore,
    validation::{ConflictPair, find_conflicts, validate_slot},
};

#[derive(Clone)]
pub struct ScheduleSlotManager {
    store: Arc<dyn SlotStore>,
    scope: ScopeKey,
}

impl ScheduleSlotManager {
    /// Creates a manager checking overlaps within `scope` and the weekday.
    pub fn new(store: Arc<dyn SlotStore>, scope: ScopeKey) -> Self {
        Self { store, scope }
    }

    pub fn scope(&self) -> ScopeKey {
        self.scope
    }

    pub async fn create_slot(&self, input: SlotInput) -> ScheduleResult<Slot> {
        let input = input.normalized();
        self.check_candidate(&input, None).await?;

        let slot = self.store.create_slot(input).await?;
        info!(
            "Slot created: id={}, subject={}, {} {}-{}",
            slot.id, slot.subject_id, slot.weekday, slot.start_time, slot.end_time
        );
        Ok(slot)
    }

    /// Re-validates an edit against every other slot in scope, excluding
    /// the slot being replaced.
    pub async fn update_slot(&self, id: Uuid, input: SlotInput) -> ScheduleResult<Slot> {
        let input = input.normalized();
        self.check_candidate(&input, Some(id)).await?;

        let slot = self.store.update_slot(id, input).await?;
        info!(
            "Slot updated: id={}, subject={}, {} {}-{}",
            slot.id, slot.subject_id, slot.weekday, slot.start_time, slot.end_time
        );
        Ok(slot)
    }

    pub async fn delete_slot(&self, id: Uuid) -> ScheduleResult<()> {
        self.store.delete_slot(id).await?;
        info!("Slot deleted: id={}", id);
        Ok(())
    }

    /// Slots matching `filter`, sorted by weekday then start time.
    pub async fn list_ordered_slots(&self, filter: SlotFilter) -> ScheduleResult<Vec<Slot>> {
        let mut slots = self.store.list_slots(filter).await?;
        sort_slots(&mut slots);
        Ok(slots)
    }

    pub async fn weekly_timetable(&self, filter: SlotFilter) -> ScheduleResult<Vec<TimetableDay>> {
        let slots = self.store.list_slots(filter).await?;
        Ok(group_by_weekday(slots))
    }

    /// Stored pairs that already violate the no-overlap rule.
    pub async fn find_conflicts(&self, filter: SlotFilter) -> ScheduleResult<Vec<ConflictPair>> {
        let slots = self.list_ordered_slots(filter).await?;
        let pairs = find_conflicts(&slots, self.scope);
        if !pairs.is_empty() {
            warn!("Found {} conflicting slot pairs in store", pairs.len());
        }
        Ok(pairs)
    }

    async fn check_candidate(&self, input: &SlotInput, exclude_id: Option<Uuid>) -> ScheduleResult<()> {
        // Fail on the range before touching the store
        input.check_range()?;

        let filter = self.scope.filter_for(input)?;
        let existing = self.store.list_slots(filter).await?;
        debug!(
            "Validating candidate against {} slots in {} scope",
            existing.len(),
            self.scope
        );

        validate_slot(input, &existing, self.scope, exclude_id).inspect_err(|e| {
            warn!("Slot rejected: {}", e);
        })
    }
}

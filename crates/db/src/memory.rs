//! In-memory record store for tests and database-less local runs.

use academico_core::{
    errors::{ScheduleError, ScheduleResult},
    models::{Slot, SlotFilter, SlotInput},
    store::SlotStore,
};
use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Keeps slots in insertion order, which is the order `list_slots` returns.
#[derive(Debug, Default)]
pub struct MemorySlotStore {
    slots: RwLock<Vec<Slot>>,
}

impl MemorySlotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store with existing rows, bypassing validation the same way
    /// an out-of-band database write would.
    pub fn with_slots(slots: Vec<Slot>) -> Self {
        Self {
            slots: RwLock::new(slots),
        }
    }
}

#[async_trait]
impl SlotStore for MemorySlotStore {
    async fn list_slots(&self, filter: SlotFilter) -> ScheduleResult<Vec<Slot>> {
        let slots = self.slots.read().await;
        Ok(slots.iter().filter(|s| filter.matches(s)).cloned().collect())
    }

    async fn create_slot(&self, input: SlotInput) -> ScheduleResult<Slot> {
        let slot = input.into_slot(Uuid::new_v4());
        self.slots.write().await.push(slot.clone());
        tracing::debug!("Created in-memory slot: id={}", slot.id);
        Ok(slot)
    }

    async fn update_slot(&self, id: Uuid, input: SlotInput) -> ScheduleResult<Slot> {
        let mut slots = self.slots.write().await;
        let existing = slots
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| ScheduleError::NotFound(format!("Slot with ID {} not found", id)))?;
        *existing = input.into_slot(id);
        Ok(existing.clone())
    }

    async fn delete_slot(&self, id: Uuid) -> ScheduleResult<()> {
        let mut slots = self.slots.write().await;
        let before = slots.len();
        slots.retain(|s| s.id != id);
        if slots.len() == before {
            return Err(ScheduleError::NotFound(format!("Slot with ID {} not found", id)));
        }
        Ok(())
    }
}

//! # Record Store boundary
//!
//! The durable home of slot records. Implementations assign ids and persist
//! rows; they do not enforce the no-overlap rule, which belongs to
//! [`crate::manager::ScheduleSlotManager`].

use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    errors::ScheduleResult,
    models::{Slot, SlotFilter, SlotInput},
};

/// CRUD access to slot records.
///
/// Failures are reported as `ScheduleError::Store` (connectivity, constraint
/// violations) or `ScheduleError::NotFound` for unknown ids.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SlotStore: Send + Sync {
    /// Slots matching `filter`, in the store's own order.
    async fn list_slots(&self, filter: SlotFilter) -> ScheduleResult<Vec<Slot>>;

    async fn create_slot(&self, input: SlotInput) -> ScheduleResult<Slot>;

    async fn update_slot(&self, id: Uuid, input: SlotInput) -> ScheduleResult<Slot>;

    async fn delete_slot(&self, id: Uuid) -> ScheduleResult<()>;
}

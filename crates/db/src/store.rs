//! PostgreSQL-backed record store.

use academico_core::{
    errors::{ScheduleError, ScheduleResult},
    models::{Slot, SlotFilter, SlotInput},
    store::SlotStore,
};
use async_trait::async_trait;
use uuid::Uuid;

use crate::{DbPool, repositories};

#[derive(Clone)]
pub struct PgSlotStore {
    pool: DbPool,
}

impl PgSlotStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SlotStore for PgSlotStore {
    async fn list_slots(&self, filter: SlotFilter) -> ScheduleResult<Vec<Slot>> {
        repositories::slot::get_slots(&self.pool, &filter)
            .await?
            .into_iter()
            .map(Slot::try_from)
            .collect()
    }

    async fn create_slot(&self, input: SlotInput) -> ScheduleResult<Slot> {
        let row = repositories::slot::create_slot(&self.pool, &input).await?;
        Slot::try_from(row)
    }

    async fn update_slot(&self, id: Uuid, input: SlotInput) -> ScheduleResult<Slot> {
        let row = repositories::slot::update_slot(&self.pool, id, &input)
            .await?
            .ok_or_else(|| ScheduleError::NotFound(format!("Slot with ID {} not found", id)))?;
        Slot::try_from(row)
    }

    async fn delete_slot(&self, id: Uuid) -> ScheduleResult<()> {
        if !repositories::slot::delete_slot(&self.pool, id).await? {
            return Err(ScheduleError::NotFound(format!("Slot with ID {} not found", id)));
        }
        Ok(())
    }
}

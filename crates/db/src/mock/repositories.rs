use academico_core::{
    errors::ScheduleResult,
    models::{Slot, SlotFilter, SlotInput},
    store::SlotStore,
};
use async_trait::async_trait;
use mockall::mock;
use uuid::Uuid;

// Mock record store for testing
mock! {
    pub SlotStore {}

    #[async_trait]
    impl SlotStore for SlotStore {
        async fn list_slots(&self, filter: SlotFilter) -> ScheduleResult<Vec<Slot>>;

        async fn create_slot(&self, input: SlotInput) -> ScheduleResult<Slot>;

        async fn update_slot(&self, id: Uuid, input: SlotInput) -> ScheduleResult<Slot>;

        async fn delete_slot(&self, id: Uuid) -> ScheduleResult<()>;
    }
}

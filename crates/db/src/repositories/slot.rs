use crate::models::DbSlot;
use academico_core::models::{SlotFilter, SlotInput};
use chrono::{NaiveTime, Utc};
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_slot(pool: &Pool<Postgres>, input: &SlotInput) -> Result<DbSlot> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!(
        "Creating slot: id={}, subject={}, weekday={}",
        id, input.subject_id, input.weekday
    );

    let slot = sqlx::query_as::<_, DbSlot>(
        r#"
        INSERT INTO class_slots (id, subject_id, section, weekday, start_time, end_time, room, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING id, subject_id, section, weekday, start_time, end_time, room, created_at
        "#,
    )
    .bind(id)
    .bind(input.subject_id)
    .bind(input.section.as_deref())
    .bind(input.weekday.as_str())
    .bind(NaiveTime::from(input.start_time))
    .bind(NaiveTime::from(input.end_time))
    .bind(input.room.as_deref())
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(slot)
}

/// Slots matching `filter` in insertion order.
pub async fn get_slots(pool: &Pool<Postgres>, filter: &SlotFilter) -> Result<Vec<DbSlot>> {
    let slots = sqlx::query_as::<_, DbSlot>(
        r#"
        SELECT id, subject_id, section, weekday, start_time, end_time, room, created_at
        FROM class_slots
        WHERE ($1::uuid IS NULL OR subject_id = $1)
          AND ($2::text IS NULL OR section = $2)
          AND ($3::text IS NULL OR weekday = $3)
        ORDER BY created_at ASC, id ASC
        "#,
    )
    .bind(filter.subject_id)
    .bind(filter.section.as_deref())
    .bind(filter.weekday.map(|day| day.as_str()))
    .fetch_all(pool)
    .await?;

    Ok(slots)
}

/// Replaces every editable field of a slot. `None` when no row has `id`.
pub async fn update_slot(
    pool: &Pool<Postgres>,
    id: Uuid,
    input: &SlotInput,
) -> Result<Option<DbSlot>> {
    tracing::debug!("Updating slot: id={}", id);

    let slot = sqlx::query_as::<_, DbSlot>(
        r#"
        UPDATE class_slots
        SET subject_id = $2, section = $3, weekday = $4, start_time = $5, end_time = $6, room = $7
        WHERE id = $1
        RETURNING id, subject_id, section, weekday, start_time, end_time, room, created_at
        "#,
    )
    .bind(id)
    .bind(input.subject_id)
    .bind(input.section.as_deref())
    .bind(input.weekday.as_str())
    .bind(NaiveTime::from(input.start_time))
    .bind(NaiveTime::from(input.end_time))
    .bind(input.room.as_deref())
    .fetch_optional(pool)
    .await?;

    Ok(slot)
}

/// Returns whether a row was removed.
pub async fn delete_slot(pool: &Pool<Postgres>, id: Uuid) -> Result<bool> {
    tracing::debug!("Deleting slot: id={}", id);

    let result = sqlx::query(
        r#"
        DELETE FROM class_slots
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

// Overlaps are checked by the slot manager, not by a table constraint.
// Section and room are free text with no length cap, same as the in-memory store.
const CREATE_CLASS_SLOTS: &str = r#"
    CREATE TABLE IF NOT EXISTS class_slots (
        id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
        subject_id UUID NOT NULL,
        section TEXT NULL,
        weekday VARCHAR(16) NOT NULL,
        start_time TIME NOT NULL,
        end_time TIME NOT NULL,
        room TEXT NULL,
        created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
        CONSTRAINT valid_time_range CHECK (end_time > start_time),
        CONSTRAINT valid_weekday CHECK (
            weekday IN ('monday', 'tuesday', 'wednesday', 'thursday', 'friday', 'saturday')
        )
    );
"#;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Create class_slots table
    sqlx::query(CREATE_CLASS_SLOTS).execute(pool).await?;

    // Create indexes
    for statement in [
        "CREATE INDEX IF NOT EXISTS idx_class_slots_subject_weekday ON class_slots(subject_id, weekday)",
        "CREATE INDEX IF NOT EXISTS idx_class_slots_section_weekday ON class_slots(section, weekday)",
    ] {
        sqlx::query(statement).execute(pool).await?;
    }

    info!("Database schema initialized successfully.");
    Ok(())
}

use std::sync::Arc;

use academico_api::config::{ApiConfig, StoreKind};
use academico_core::store::SlotStore;
use academico_db::{create_pool, memory::MemorySlotStore, schema::initialize_database, store::PgSlotStore};
use color_eyre::eyre::{Result, eyre};
use dotenv::dotenv;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = ApiConfig::from_env()?;

    let store: Arc<dyn SlotStore> = match config.store {
        StoreKind::Postgres => {
            let database_url = config
                .database_url
                .as_deref()
                .ok_or_else(|| eyre!("DATABASE_URL environment variable must be set"))?;

            // Create database connection pool
            let db_pool = create_pool(database_url).await?;

            // Initialize database schema
            initialize_database(&db_pool).await?;

            Arc::new(PgSlotStore::new(db_pool))
        }
        StoreKind::Memory => Arc::new(MemorySlotStore::new()),
    };

    // Start API server
    academico_api::start_server(config, store).await?;

    Ok(())
}

// Startup wiring: pick the store adapter and seed it before the server starts.

use crate::modules::activities::adapters::outbound::activity_store::{ActivityStore, StoreError};
use crate::modules::activities::adapters::outbound::activity_store_in_memory::InMemoryActivityStore;
use crate::modules::activities::adapters::outbound::activity_store_sqlite::SqliteActivityStore;
use crate::modules::activities::core::seed::initial_activities;
use crate::modules::activities::use_cases::seed_activities::handler::{
    SeedActivitiesHandler, SeedOutcome,
};
use crate::shell::config::{Config, StoreBackend};
use std::sync::Arc;

pub async fn build_store(config: &Config) -> Result<Arc<dyn ActivityStore>, StoreError> {
    match config.store {
        StoreBackend::Memory => {
            tracing::warn!("using the in-memory activity store, data is lost on restart");
            Ok(Arc::new(InMemoryActivityStore::new()))
        }
        StoreBackend::Sqlite => {
            tracing::info!(url = %config.database_url, "connecting to sqlite activity store");
            let max_connections = config.max_connections.get();
            let store = SqliteActivityStore::connect(&config.database_url, max_connections).await?;
            Ok(Arc::new(store))
        }
    }
}

/// Seeds the store. Failures are logged and swallowed unless `strict` is set.
pub async fn seed_store(
    store: Arc<dyn ActivityStore>,
    strict: bool,
) -> anyhow::Result<Option<SeedOutcome>> {
    let seeder = SeedActivitiesHandler::new(store, initial_activities());
    match seeder.handle().await {
        Ok(outcome) => Ok(Some(outcome)),
        Err(err) if strict => {
            Err(anyhow::Error::new(err).context("error initializing the activity store"))
        }
        Err(err) => {
            tracing::error!(error = %err, "error initializing the activity store");
            Ok(None)
        }
    }
}

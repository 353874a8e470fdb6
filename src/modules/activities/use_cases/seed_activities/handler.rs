// Startup initialisation of the activity collection.
//
// Responsibilities
// - Make sure the unique name index exists. Safe to run on every start.
// - Insert the fixed seed set, one document at a time, but only into an empty collection.
//
// The caller decides whether a failure is fatal; see the shell entry point.

use crate::modules::activities::adapters::outbound::activity_store::{ActivityStore, StoreError};
use crate::modules::activities::core::activity::Activity;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    Seeded(usize),
    AlreadyPopulated(u64),
}

pub struct SeedActivitiesHandler<TStore>
where
    TStore: ActivityStore + ?Sized + 'static,
{
    store: Arc<TStore>,
    seed: Vec<Activity>,
}

impl<TStore> SeedActivitiesHandler<TStore>
where
    TStore: ActivityStore + ?Sized + 'static,
{
    pub fn new(store: Arc<TStore>, seed: Vec<Activity>) -> Self {
        Self { store, seed }
    }

    pub async fn handle(&self) -> Result<SeedOutcome, StoreError> {
        self.store.ensure_unique_name_index().await?;

        let existing = self.store.count().await?;
        if existing > 0 {
            tracing::info!(existing, "activity store already populated");
            return Ok(SeedOutcome::AlreadyPopulated(existing));
        }

        for activity in &self.seed {
            self.store.insert_one(activity.clone()).await?;
        }
        tracing::info!(inserted = self.seed.len(), "seeded activity store");
        Ok(SeedOutcome::Seeded(self.seed.len()))
    }
}

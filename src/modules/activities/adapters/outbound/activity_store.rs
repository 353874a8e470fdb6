// Outbound port for activity persistence.
//
// Purpose
// - Describe what the use cases need from a document store without naming one.
//
// Boundaries
// - Adapters implement this trait: in memory for tests and local runs, SQLite for deployments.
// - `update_participants` must be atomic per document and report how many documents changed.

use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::core::participant_update::ParticipantUpdate;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("duplicate key: an activity named {name:?} already exists")]
    DuplicateKey { name: String },

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait ActivityStore: Send + Sync {
    async fn ensure_unique_name_index(&self) -> Result<(), StoreError>;

    async fn count(&self) -> Result<u64, StoreError>;

    async fn insert_one(&self, activity: Activity) -> Result<(), StoreError>;

    async fn find_by_name(&self, name: &str) -> Result<Option<Activity>, StoreError>;

    /// All activities in store order.
    async fn find_all(&self) -> Result<Vec<Activity>, StoreError>;

    /// Returns the number of modified documents (0 or 1).
    async fn update_participants(
        &self,
        name: &str,
        update: &ParticipantUpdate,
    ) -> Result<u64, StoreError>;
}

// In memory implementation of the ActivityStore port.
//
// Purpose
// - Support handler tests and local development without a database.
//
// Responsibilities
// - Keep documents in insertion order.
// - Enforce the unique name index once it has been created.
// - Apply participant updates under a single write lock.

use crate::modules::activities::adapters::outbound::activity_store::{ActivityStore, StoreError};
use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::core::participant_update::ParticipantUpdate;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryActivityStore {
    documents: RwLock<Vec<Activity>>,
    unique_name_index: AtomicBool,
    delay_update_ms: AtomicU64,
    is_offline: bool,
}

impl InMemoryActivityStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    /// Delays every participant update, widening the gap between a handler's
    /// read and its write.
    pub fn set_delay_update_ms(&self, ms: u64) {
        self.delay_update_ms.store(ms, Ordering::SeqCst);
    }

    fn check_online(&self) -> Result<(), StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend("Activity store offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl ActivityStore for InMemoryActivityStore {
    async fn ensure_unique_name_index(&self) -> Result<(), StoreError> {
        self.check_online()?;
        let guard = self.documents.read().await;
        for (i, activity) in guard.iter().enumerate() {
            if guard[..i].iter().any(|a| a.name == activity.name) {
                return Err(StoreError::DuplicateKey {
                    name: activity.name.clone(),
                });
            }
        }
        self.unique_name_index.store(true, Ordering::SeqCst);
        Ok(())
    }

    async fn count(&self) -> Result<u64, StoreError> {
        self.check_online()?;
        Ok(self.documents.read().await.len() as u64)
    }

    async fn insert_one(&self, activity: Activity) -> Result<(), StoreError> {
        self.check_online()?;
        let mut guard = self.documents.write().await;
        if self.unique_name_index.load(Ordering::SeqCst)
            && guard.iter().any(|a| a.name == activity.name)
        {
            return Err(StoreError::DuplicateKey {
                name: activity.name,
            });
        }
        guard.push(activity);
        Ok(())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Activity>, StoreError> {
        self.check_online()?;
        let guard = self.documents.read().await;
        Ok(guard.iter().find(|a| a.name == name).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Activity>, StoreError> {
        self.check_online()?;
        Ok(self.documents.read().await.clone())
    }

    async fn update_participants(
        &self,
        name: &str,
        update: &ParticipantUpdate,
    ) -> Result<u64, StoreError> {
        self.check_online()?;
        let delay = self.delay_update_ms.load(Ordering::SeqCst);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }

        let mut guard = self.documents.write().await;
        let Some(activity) = guard.iter_mut().find(|a| a.name == name) else {
            return Ok(0);
        };
        Ok(u64::from(update.apply(&mut activity.participants)))
    }
}

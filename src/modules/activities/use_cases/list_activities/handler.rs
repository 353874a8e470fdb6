use crate::modules::activities::adapters::outbound::activity_store::{ActivityStore, StoreError};
use crate::modules::activities::core::activity::Activity;
use std::sync::Arc;

pub struct ListActivitiesHandler<TStore>
where
    TStore: ActivityStore + ?Sized + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> ListActivitiesHandler<TStore>
where
    TStore: ActivityStore + ?Sized + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self) -> Result<Vec<Activity>, StoreError> {
        self.store.find_all().await
    }
}

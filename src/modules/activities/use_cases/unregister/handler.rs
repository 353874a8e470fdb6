use crate::modules::activities::adapters::outbound::activity_store::ActivityStore;
use crate::modules::activities::core::decision::Decision;
use crate::modules::activities::use_cases::application_error::ApplicationError;
use crate::modules::activities::use_cases::unregister::decide::decide_unregister;
use std::sync::Arc;

pub struct UnregisterHandler<TStore>
where
    TStore: ActivityStore + ?Sized + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> UnregisterHandler<TStore>
where
    TStore: ActivityStore + ?Sized + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        activity_name: &str,
        email: &str,
    ) -> Result<String, ApplicationError> {
        let activity = self
            .store
            .find_by_name(activity_name)
            .await?
            .ok_or(ApplicationError::ActivityNotFound)?;

        let update = match decide_unregister(&activity, email) {
            Decision::Accepted { update } => update,
            Decision::Rejected { reason } => {
                tracing::debug!(activity_name, email, %reason, "unregister rejected");
                return Err(reason.into());
            }
        };

        let modified = self
            .store
            .update_participants(activity_name, &update)
            .await?;
        if modified == 0 {
            tracing::warn!(activity_name, email, "unregister modified nothing");
            return Err(ApplicationError::NotApplied("Failed to unregister"));
        }

        tracing::info!(activity_name, email, "unregistered");
        Ok(format!("Unregistered {email} from {activity_name}"))
    }
}

use crate::modules::activities::adapters::outbound::activity_store::ActivityStore;
use crate::modules::activities::core::decision::Decision;
use crate::modules::activities::use_cases::application_error::ApplicationError;
use crate::modules::activities::use_cases::sign_up::decide::decide_sign_up;
use std::sync::Arc;

pub struct SignUpHandler<TStore>
where
    TStore: ActivityStore + ?Sized + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> SignUpHandler<TStore>
where
    TStore: ActivityStore + ?Sized + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    /// Adds `email` to the participants of `activity_name` and returns the
    /// confirmation message.
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

        let update = match decide_sign_up(&activity, email) {
            Decision::Accepted { update } => update,
            Decision::Rejected { reason } => {
                tracing::debug!(activity_name, email, %reason, "sign up rejected");
                return Err(reason.into());
            }
        };

        let modified = self
            .store
            .update_participants(activity_name, &update)
            .await?;
        if modified == 0 {
            tracing::warn!(activity_name, email, "sign up modified nothing");
            return Err(ApplicationError::NotApplied("Failed to sign up"));
        }

        tracing::info!(activity_name, email, "signed up");
        Ok(format!("Signed up {email} for {activity_name}"))
    }
}

use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::activities::adapters::inbound::graphql::to_graphql_error;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct SignUpMutation;

#[Object]
impl SignUpMutation {
    async fn sign_up(
        &self,
        context: &Context<'_>,
        activity_name: String,
        email: String,
    ) -> GqlResult<String> {
        if email.is_empty() {
            return Err(async_graphql::Error::new("email is required"));
        }
        let state = context.data_unchecked::<AppState>();
        state
            .sign_up_handler
            .handle(&activity_name, &email)
            .await
            .map_err(to_graphql_error)
    }
}

use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::activities::adapters::inbound::graphql::to_graphql_error;
use crate::modules::activities::core::activity::Activity;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlActivity {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
}

impl From<Activity> for GqlActivity {
    fn from(a: Activity) -> Self {
        Self {
            name: a.name,
            description: a.description,
            schedule: a.schedule,
            max_participants: a.max_participants,
            participants: a.participants,
        }
    }
}

#[derive(Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn activities(&self, context: &Context<'_>) -> GqlResult<Vec<GqlActivity>> {
        let state = context.data_unchecked::<AppState>();
        let list = state
            .list_handler
            .handle()
            .await
            .map_err(|e| to_graphql_error(e.into()))?;
        Ok(list.into_iter().map(Into::into).collect())
    }
}

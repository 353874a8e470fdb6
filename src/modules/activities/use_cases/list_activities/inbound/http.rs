use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use serde::{Serialize, Serializer};

use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::use_cases::application_error::ApplicationError;
use crate::shell::state::AppState;

/// Serializes as a JSON object keyed by activity name, keeping store order.
pub struct ActivitiesByName(pub Vec<Activity>);

impl Serialize for ActivitiesByName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|a| (&a.name, a)))
    }
}

pub async fn handle(State(state): State<AppState>) -> Response {
    match state.list_handler.handle().await {
        Ok(activities) => Json(ActivitiesByName(activities)).into_response(),
        Err(err) => ApplicationError::Store(err).into_response(),
    }
}

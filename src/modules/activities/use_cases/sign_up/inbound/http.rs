use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
    response::{IntoResponse, Response},
};

use crate::modules::activities::adapters::inbound::http::{MessageBody, QueryPairs, required_email};
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    params: Result<Query<QueryPairs>, QueryRejection>,
) -> Response {
    let email = match required_email(params) {
        Ok(email) => email,
        Err(response) => return response,
    };

    match state.sign_up_handler.handle(&activity_name, &email).await {
        Ok(message) => Json(MessageBody { message }).into_response(),
        Err(err) => err.into_response(),
    }
}

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

    match state.unregister_handler.handle(&activity_name, &email).await {
        Ok(message) => Json(MessageBody { message }).into_response(),
        Err(err) => err.into_response(),
    }
}

#[cfg(test)]
mod unregister_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::delete,
    };
    use http_body_util::BodyExt;
    use std::sync::Arc;
    use tower::ServiceExt;

    use crate::modules::activities::adapters::outbound::activity_store::ActivityStore;
    use crate::modules::activities::adapters::outbound::activity_store_in_memory::InMemoryActivityStore;
    use crate::shell::state::AppState;
    use crate::tests::fixtures::activity::ActivityBuilder;

    use super::handle;

    async fn make_test_state() -> AppState {
        let store = Arc::new(InMemoryActivityStore::new());
        store
            .insert_one(
                ActivityBuilder::new()
                    .name("Chess Club")
                    .participants(vec!["michael@mergington.edu".into()])
                    .build(),
            )
            .await
            .unwrap();
        AppState::new(store)
    }

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/activities/{activity_name}/unregister", delete(handle))
            .with_state(state)
    }

    async fn delete_unregister(state: AppState, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app(state)
            .oneshot(Request::delete(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn it_should_return_200_with_a_confirmation_message() {
        let (status, json) = delete_unregister(
            make_test_state().await,
            "/activities/Chess%20Club/unregister?email=michael%40mergington.edu",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            json,
            serde_json::json!({"message": "Unregistered michael@mergington.edu from Chess Club"})
        );
    }

    #[tokio::test]
    async fn it_should_return_404_for_an_unknown_activity() {
        let (status, json) = delete_unregister(
            make_test_state().await,
            "/activities/Knitting/unregister?email=michael@mergington.edu",
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json, serde_json::json!({"detail": "Activity not found"}));
    }

    #[tokio::test]
    async fn it_should_return_404_when_not_a_participant() {
        let (status, json) = delete_unregister(
            make_test_state().await,
            "/activities/Chess%20Club/unregister?email=ghost@mergington.edu",
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            json,
            serde_json::json!({"detail": "Participant not found in this activity"})
        );
    }

    #[tokio::test]
    async fn it_should_use_the_last_email_when_the_parameter_repeats() {
        let (status, json) = delete_unregister(
            make_test_state().await,
            "/activities/Chess%20Club/unregister?email=x&email=michael@mergington.edu",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            json,
            serde_json::json!({"message": "Unregistered michael@mergington.edu from Chess Club"})
        );
    }

    #[tokio::test]
    async fn it_should_return_422_when_email_is_missing() {
        let (status, _) = delete_unregister(
            make_test_state().await,
            "/activities/Chess%20Club/unregister",
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }
}

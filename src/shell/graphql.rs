use async_graphql::{EmptySubscription, MergedObject, Schema, http::GraphiQLSource};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Extension, response::Html};

pub use crate::modules::activities::use_cases::list_activities::inbound::graphql::QueryRoot;
use crate::modules::activities::use_cases::sign_up::inbound::graphql::SignUpMutation;
use crate::modules::activities::use_cases::unregister::inbound::graphql::UnregisterMutation;
use crate::shell::state::AppState;

pub const GRAPHQL_PATH: &str = "/graphql";

#[derive(MergedObject, Default)]
pub struct MutationRoot(SignUpMutation, UnregisterMutation);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot, MutationRoot::default(), EmptySubscription)
        .data(state)
        .finish()
}

pub async fn graphql(
    Extension(schema): Extension<AppSchema>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

pub async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}

#[cfg(test)]
mod graphql_schema_tests {
    use super::*;
    use crate::modules::activities::adapters::outbound::activity_store::ActivityStore;
    use crate::modules::activities::adapters::outbound::activity_store_in_memory::InMemoryActivityStore;
    use crate::tests::fixtures::activity::ActivityBuilder;
    use rstest::{fixture, rstest};
    use std::sync::Arc;

    const SIGN_UP_MICHAEL: &str =
        r#"mutation { signUp(activityName: "Chess Club", email: "michael@mergington.edu") }"#;
    const UNREGISTER_MICHAEL: &str =
        r#"mutation { unregister(activityName: "Chess Club", email: "michael@mergington.edu") }"#;

    #[fixture]
    async fn schema() -> AppSchema {
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
        build_schema(AppState::new(store))
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_list_activities(#[future] schema: AppSchema) {
        let response = schema
            .await
            .execute("{ activities { name maxParticipants participants } }")
            .await;
        assert!(response.errors.is_empty(), "{:?}", response.errors);
        assert_eq!(
            response.data.into_json().unwrap(),
            serde_json::json!({
                "activities": [{
                    "name": "Chess Club",
                    "maxParticipants": 12,
                    "participants": ["michael@mergington.edu"]
                }]
            })
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_sign_up_and_unregister(#[future] schema: AppSchema) {
        let schema = schema.await;

        let signed_up = schema
            .execute(r#"mutation { signUp(activityName: "Chess Club", email: "new@x.edu") }"#)
            .await;
        assert!(signed_up.errors.is_empty(), "{:?}", signed_up.errors);
        assert_eq!(
            signed_up.data.into_json().unwrap(),
            serde_json::json!({"signUp": "Signed up new@x.edu for Chess Club"})
        );

        let unregistered = schema
            .execute(r#"mutation { unregister(activityName: "Chess Club", email: "new@x.edu") }"#)
            .await;
        assert!(unregistered.errors.is_empty(), "{:?}", unregistered.errors);
        assert_eq!(
            unregistered.data.into_json().unwrap(),
            serde_json::json!({"unregister": "Unregistered new@x.edu from Chess Club"})
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_report_domain_rejections_as_errors(#[future] schema: AppSchema) {
        let response = schema.await.execute(SIGN_UP_MICHAEL).await;
        assert_eq!(response.errors.len(), 1);
        assert_eq!(response.errors[0].message, "Already signed up");
    }

    #[rstest]
    #[case("{ activities { name } }")]
    #[case(SIGN_UP_MICHAEL)]
    #[case(UNREGISTER_MICHAEL)]
    #[tokio::test]
    async fn it_should_not_leak_store_failures(#[case] document: &str) {
        let mut store = InMemoryActivityStore::new();
        store.toggle_offline();
        let schema = build_schema(AppState::new(Arc::new(store)));

        let response = schema.execute(document).await;

        assert_eq!(response.errors.len(), 1);
        assert_eq!(response.errors[0].message, "Internal Server Error");
    }
}

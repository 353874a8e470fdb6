// Error mapping shared by the GraphQL resolvers of every use case.
//
// Messages match the `detail` the HTTP adapter returns for the same error.

use crate::modules::activities::adapters::inbound::http::INTERNAL_ERROR;
use crate::modules::activities::use_cases::application_error::ApplicationError;

pub fn to_graphql_error(err: ApplicationError) -> async_graphql::Error {
    match err {
        ApplicationError::Store(err) => {
            tracing::error!(error = %err, "activity store failure");
            async_graphql::Error::new(INTERNAL_ERROR)
        }
        other => async_graphql::Error::new(other.to_string()),
    }
}

// Pieces shared by the HTTP inbound adapters of every use case.
//
// Error bodies are always `{"detail": "..."}` so the front-end can show them as-is.

use axum::{
    Json,
    extract::{Query, rejection::QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::modules::activities::core::decision::DecideError;
use crate::modules::activities::use_cases::application_error::ApplicationError;

pub const EMAIL_REQUIRED: &str = "email query parameter is required";
pub const INTERNAL_ERROR: &str = "Internal Server Error";

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageBody {
    pub message: String,
}

/// Raw query pairs in request order. Repeated keys keep every value.
pub type QueryPairs = Vec<(String, String)>;

pub fn error_response(status: StatusCode, detail: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorBody {
            detail: detail.into(),
        }),
    )
        .into_response()
}

/// Extracts the `email` query parameter or builds the 422 response.
///
/// When `email` is repeated the last value wins; it must not be empty.
pub fn required_email(
    params: Result<Query<QueryPairs>, QueryRejection>,
) -> Result<String, Response> {
    let last_email = params
        .ok()
        .and_then(|Query(pairs)| pairs.into_iter().rev().find(|(key, _)| key == "email"));
    match last_email {
        Some((_, email)) if !email.is_empty() => Ok(email),
        _ => Err(error_response(StatusCode::UNPROCESSABLE_ENTITY, EMAIL_REQUIRED)),
    }
}

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApplicationError::ActivityNotFound => StatusCode::NOT_FOUND,
            ApplicationError::Domain(DecideError::AlreadySignedUp) => StatusCode::BAD_REQUEST,
            ApplicationError::Domain(DecideError::NotAParticipant) => StatusCode::NOT_FOUND,
            ApplicationError::NotApplied(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApplicationError::Store(err) => {
                tracing::error!(error = %err, "activity store failure");
                return error_response(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR);
            }
        };
        error_response(status, self.to_string())
    }
}

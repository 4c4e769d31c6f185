//! Error responses of the HTTP facade.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use serde_json::{error::Category, json};
use tracing::error;

use crate::{
    base::types::{Err, FieldError},
    interaction::InteractionError,
};

/// An error returned from a handler.
#[derive(Debug)]
pub enum ApiError {
    /// The body could not be parsed or broke field constraints (422).
    Validation(Vec<FieldError>),
    /// Anything else; logged, never exposed (500).
    Internal(Err),
}

impl From<InteractionError> for ApiError {
    fn from(err: InteractionError) -> Self {
        match err {
            InteractionError::Invalid(errors) => ApiError::Validation(errors),
            InteractionError::Failed(err) => ApiError::Internal(err),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        let kind = match err.classify() {
            Category::Data => "value_error",
            Category::Syntax | Category::Eof | Category::Io => "json_invalid",
        };

        ApiError::Validation(vec![FieldError::body(err.to_string(), kind)])
    }
}

/// Reads a JSON request body regardless of its declared content type.
///
/// Syntax and shape errors are both reported as 422 with a `["body"]` location.
pub fn parse_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    Ok(serde_json::from_slice(body)?)
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(errors) => (StatusCode::UNPROCESSABLE_ENTITY, Json(json!({ "detail": errors }))).into_response(),
            ApiError::Internal(err) => {
                error!("Error while handling: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "detail": "Internal Server Error" }))).into_response()
            }
        }
    }
}

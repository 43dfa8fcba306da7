use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::modules::users::core::errors::UserError;

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        match self {
            UserError::NotFound(_) => StatusCode::NOT_FOUND.into_response(),
            UserError::MalformedBody(message) => (StatusCode::BAD_REQUEST, message).into_response(),
        }
    }
}

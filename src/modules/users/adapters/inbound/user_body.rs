use axum::body::Body;
use serde_json::Deserializer;

use crate::modules::users::core::errors::UserError;
use crate::modules::users::core::user::User;

/// Reads at most `limit` bytes of `body` and decodes the first JSON value in
/// them as a [`User`]. Anything after that value is ignored.
///
/// The `Content-Type` header is not consulted. Unreadable, oversized, empty
/// and wrongly shaped bodies all surface as [`UserError::MalformedBody`]
/// carrying the underlying error text.
pub async fn decode_user(body: Body, limit: usize) -> Result<User, UserError> {
    let bytes = axum::body::to_bytes(body, limit)
        .await
        .map_err(|e| UserError::MalformedBody(e.to_string()))?;

    match Deserializer::from_slice(&bytes).into_iter::<User>().next() {
        Some(user) => user.map_err(|e| UserError::MalformedBody(e.to_string())),
        None => Err(UserError::MalformedBody("EOF".to_string())),
    }
}

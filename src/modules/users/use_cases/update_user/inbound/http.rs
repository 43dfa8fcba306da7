use axum::{
    Json,
    body::Body,
    extract::{Path, State},
};
use tracing::debug;

use crate::modules::users::adapters::inbound::user_body::decode_user;
use crate::modules::users::core::errors::UserError;
use crate::modules::users::core::user::User;
use crate::shell::state::AppState;

/// Replaces the user at `id`. The lookup and the write are separate critical
/// sections; the body is only read once the lookup has found the user.
pub async fn handle(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Body,
) -> Result<Json<User>, UserError> {
    if state.users.get(&id).await.is_none() {
        return Err(UserError::NotFound(id));
    }

    let user = decode_user(body, state.max_body_bytes)
        .await?
        .with_id(id.as_str());

    state.users.put(&id, user.clone()).await;
    debug!(user_id = %id, "user updated");

    Ok(Json(user))
}

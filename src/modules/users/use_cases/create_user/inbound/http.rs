use axum::{Json, body::Body, extract::State, http::StatusCode, response::IntoResponse};
use tracing::debug;

use crate::modules::users::adapters::inbound::user_body::decode_user;
use crate::modules::users::core::errors::UserError;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    body: Body,
) -> Result<impl IntoResponse, UserError> {
    let user = decode_user(body, state.max_body_bytes).await?;

    state.users.put(&user.id, user.clone()).await;
    debug!(user_id = %user.id, "user created");

    Ok((StatusCode::CREATED, Json(user)))
}

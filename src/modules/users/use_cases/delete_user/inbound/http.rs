use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use tracing::debug;

use crate::modules::users::core::errors::UserError;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, UserError> {
    if !state.users.delete(&id).await {
        return Err(UserError::NotFound(id));
    }
    debug!(user_id = %id, "user deleted");
    Ok(StatusCode::NO_CONTENT)
}

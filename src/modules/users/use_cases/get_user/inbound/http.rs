use axum::{
    Json,
    extract::{Path, State},
};

use crate::modules::users::core::errors::UserError;
use crate::modules::users::core::user::User;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<User>, UserError> {
    match state.users.get(&id).await {
        Some(user) => Ok(Json(user)),
        None => Err(UserError::NotFound(id)),
    }
}

use axum::{Json, extract::State};

use crate::modules::users::core::user::User;
use crate::shell::state::AppState;

/// Every stored user as a JSON array; an empty store yields `[]`.
pub async fn handle(State(state): State<AppState>) -> Json<Vec<User>> {
    Json(state.users.get_all().await)
}

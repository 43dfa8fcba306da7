use crate::modules::users::adapters::outbound::user_store::UserStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserStore + Send + Sync>,
    pub max_body_bytes: usize,
}

impl AppState {
    pub fn new(users: Arc<dyn UserStore + Send + Sync>, max_body_bytes: usize) -> Self {
        Self {
            users,
            max_body_bytes,
        }
    }
}

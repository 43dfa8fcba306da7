// In memory user store.
//
// One mutex guards the whole map, so every operation (reads included) is
// serialized against every other. Throughput is bounded by that lock; lost
// updates and torn reads are not possible.

use crate::modules::users::adapters::outbound::user_store::UserStore;
use crate::modules::users::core::user::User;
use std::collections::HashMap;
use tokio::sync::Mutex;

#[derive(Default)]
pub struct InMemoryUserStore {
    users: Mutex<HashMap<String, User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.users.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.lock().await.is_empty()
    }
}

#[async_trait::async_trait]
impl UserStore for InMemoryUserStore {
    async fn put(&self, id: &str, user: User) {
        self.users.lock().await.insert(id.to_string(), user);
    }

    async fn get_all(&self) -> Vec<User> {
        self.users.lock().await.values().cloned().collect()
    }

    async fn get(&self, id: &str) -> Option<User> {
        self.users.lock().await.get(id).cloned()
    }

    async fn delete(&self, id: &str) -> bool {
        self.users.lock().await.remove(id).is_some()
    }
}

use crate::modules::users::core::user::User;
use async_trait::async_trait;

/// Keyed access to the user records. Implementations serialize every
/// operation; none of them can fail.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Inserts `user` under `id`, overwriting any record already there.
    async fn put(&self, id: &str, user: User);

    /// Snapshot of every record, in no particular order.
    async fn get_all(&self) -> Vec<User>;

    async fn get(&self, id: &str) -> Option<User>;

    /// Removes the record under `id`, returning whether one was present.
    async fn delete(&self, id: &str) -> bool;
}

// Port for user records. Adapters own the storage medium; the rest of the
// crate codes against this trait.

use async_trait::async_trait;

use crate::modules::users::core::{User, UserChanges};

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_id(&self, id: &str) -> Option<User>;

    /// Merges the provided fields into the record in place. Returns the
    /// updated user, or `None` when the id is unknown.
    async fn update(&self, id: &str, changes: UserChanges) -> Option<User>;
}

// In memory implementation of the UserStore port.
//
// Purpose
// - Back the API without a database. Records live for the process lifetime.
//
// Responsibilities
// - Guard the record list with a single lock so concurrent updates cannot
//   interleave.

use tokio::sync::RwLock;

use crate::modules::users::core::{User, UserChanges};
use crate::modules::users::store::UserStore;

pub struct InMemoryUserStore {
    inner: RwLock<Vec<User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    pub fn with_records(records: Vec<User>) -> Self {
        Self {
            inner: RwLock::new(records),
        }
    }
}

impl Default for InMemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_id(&self, id: &str) -> Option<User> {
        let guard = self.inner.read().await;
        guard.iter().find(|user| user.id == id).cloned()
    }

    async fn update(&self, id: &str, changes: UserChanges) -> Option<User> {
        let mut guard = self.inner.write().await;
        let user = guard.iter_mut().find(|user| user.id == id)?;
        user.apply(changes);
        Some(user.clone())
    }
}

use std::sync::Arc;

use crate::modules::events::store::EventStore;
use crate::modules::messages::store::MessageStore;
use crate::modules::users::store::UserStore;
use crate::shared::core::identity;

#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserStore>,
    pub events: Arc<dyn EventStore>,
    pub messages: Arc<dyn MessageStore>,
    /// Id the auth stub resolves every request to. Fixed per process; tests
    /// override it to act as other users.
    pub current_user_id: String,
}

impl AppState {
    pub fn new(
        users: Arc<dyn UserStore>,
        events: Arc<dyn EventStore>,
        messages: Arc<dyn MessageStore>,
    ) -> Self {
        Self {
            users,
            events,
            messages,
            current_user_id: identity::DEV_USER_ID.to_string(),
        }
    }

    pub fn with_identity(mut self, user_id: impl Into<String>) -> Self {
        self.current_user_id = user_id.into();
        self
    }
}

// Fixed development records loaded at process start. Everything here is
// rebuilt from scratch on restart; there is no durability.

use crate::modules::events::core::Event;
use crate::modules::messages::core::Message;
use crate::modules::users::core::User;

pub fn demo_users() -> Vec<User> {
    vec![User {
        id: "1".to_string(),
        name: "Test User".to_string(),
        email: "test@example.com".to_string(),
        bio: Some("This is a default test user for development.".to_string()),
    }]
}

pub fn demo_events() -> Vec<Event> {
    vec![Event {
        id: "1".to_string(),
        title: "Demo Event".to_string(),
        description: "This is a demo event for testing the API.".to_string(),
        datetime: "2023-12-31T19:00:00Z".to_string(),
        location: "Virtual".to_string(),
        organizer_id: "1".to_string(),
        attendees: vec!["1".to_string()],
    }]
}

pub fn demo_messages() -> Vec<Message> {
    vec![Message {
        id: "1".to_string(),
        event_id: "1".to_string(),
        sender_id: "1".to_string(),
        text: "Welcome to the demo event chat!".to_string(),
        timestamp: "2023-12-30T18:00:00Z".to_string(),
    }]
}

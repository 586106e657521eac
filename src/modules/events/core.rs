use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    pub description: String,
    pub datetime: String,
    pub location: String,
    pub organizer_id: String,
    pub attendees: Vec<String>,
}

impl Event {
    /// Attendance grants message read and post rights for the event.
    pub fn is_attendee(&self, user_id: &str) -> bool {
        self.attendees.iter().any(|id| id == user_id)
    }

    pub fn is_participant(&self, user_id: &str) -> bool {
        self.organizer_id == user_id || self.is_attendee(user_id)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EventDraftError {
    #[error("Title is required")]
    MissingTitle,
    #[error("Description is required")]
    MissingDescription,
    #[error("Datetime is required")]
    MissingDatetime,
    #[error("Location is required")]
    MissingLocation,
}

/// A validated event waiting for the store to assign its id. Constructing one
/// is the only way to reach `EventStore::create`, so unvalidated field values
/// never enter the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDraft {
    pub title: String,
    pub description: String,
    pub datetime: String,
    pub location: String,
    pub organizer_id: String,
}

impl EventDraft {
    pub fn compose(
        title: String,
        description: String,
        datetime: String,
        location: String,
        organizer_id: String,
    ) -> Result<Self, EventDraftError> {
        if title.trim().is_empty() {
            return Err(EventDraftError::MissingTitle);
        }
        if description.trim().is_empty() {
            return Err(EventDraftError::MissingDescription);
        }
        if datetime.trim().is_empty() {
            return Err(EventDraftError::MissingDatetime);
        }
        if location.trim().is_empty() {
            return Err(EventDraftError::MissingLocation);
        }
        Ok(Self {
            title,
            description,
            datetime,
            location,
            organizer_id,
        })
    }
}

#[cfg(test)]
mod event_core_tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn event() -> Event {
        Event {
            id: "1".to_string(),
            title: "Demo Event".to_string(),
            description: "This is a demo event for testing the API.".to_string(),
            datetime: "2023-12-31T19:00:00Z".to_string(),
            location: "Virtual".to_string(),
            organizer_id: "1".to_string(),
            attendees: vec!["1".to_string(), "2".to_string()],
        }
    }

    #[rstest]
    fn it_should_compose_a_draft_from_valid_fields() {
        let draft = EventDraft::compose(
            "Meetup".to_string(),
            "d".to_string(),
            "2024-01-01T10:00:00Z".to_string(),
            "X".to_string(),
            "1".to_string(),
        );
        assert!(draft.is_ok());
        assert_eq!(draft.unwrap().organizer_id, "1");
    }

    #[rstest]
    #[case("", "d", "2024-01-01T10:00:00Z", "X", EventDraftError::MissingTitle)]
    #[case("   ", "d", "2024-01-01T10:00:00Z", "X", EventDraftError::MissingTitle)]
    #[case("Meetup", "", "2024-01-01T10:00:00Z", "X", EventDraftError::MissingDescription)]
    #[case("Meetup", "d", "", "X", EventDraftError::MissingDatetime)]
    #[case("Meetup", "d", "2024-01-01T10:00:00Z", "", EventDraftError::MissingLocation)]
    fn it_should_reject_a_blank_field(
        #[case] title: &str,
        #[case] description: &str,
        #[case] datetime: &str,
        #[case] location: &str,
        #[case] expected: EventDraftError,
    ) {
        let draft = EventDraft::compose(
            title.to_string(),
            description.to_string(),
            datetime.to_string(),
            location.to_string(),
            "1".to_string(),
        );
        assert_eq!(draft, Err(expected));
    }

    #[rstest]
    fn it_should_recognize_attendees_and_the_organizer_as_participants(event: Event) {
        assert!(event.is_attendee("2"));
        assert!(event.is_participant("1"));
        assert!(event.is_participant("2"));
        assert!(!event.is_attendee("3"));
        assert!(!event.is_participant("3"));
    }

    #[rstest]
    fn it_should_serialize_the_organizer_id_in_camel_case(event: Event) {
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["organizerId"], "1");
        assert!(value.get("organizer_id").is_none());
    }
}

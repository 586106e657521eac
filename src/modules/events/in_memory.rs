// In memory implementation of the EventStore port.
//
// Purpose
// - Back the API without a database. Records live for the process lifetime.
//
// Responsibilities
// - Keep insertion order, since listings promise it.
// - Own the monotonic id counter so concurrent creates cannot collide.
// - Apply RSVP mutations under the write half of one lock.

use tokio::sync::RwLock;

use crate::modules::events::core::{Event, EventDraft};
use crate::modules::events::store::{EventStore, LeaveOutcome, RsvpError};

pub struct InMemoryEventStore {
    inner: RwLock<EventRecords>,
}

struct EventRecords {
    events: Vec<Event>,
    next_id: u64,
}

impl InMemoryEventStore {
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    pub fn with_records(events: Vec<Event>) -> Self {
        let next_id = events.len() as u64 + 1;
        Self {
            inner: RwLock::new(EventRecords { events, next_id }),
        }
    }
}

impl Default for InMemoryEventStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl EventStore for InMemoryEventStore {
    async fn list(&self) -> Vec<Event> {
        self.inner.read().await.events.clone()
    }

    async fn find_by_id(&self, id: &str) -> Option<Event> {
        let guard = self.inner.read().await;
        guard.events.iter().find(|event| event.id == id).cloned()
    }

    async fn find_by_participant(&self, user_id: &str) -> Vec<Event> {
        let guard = self.inner.read().await;
        guard
            .events
            .iter()
            .filter(|event| event.is_participant(user_id))
            .cloned()
            .collect()
    }

    async fn create(&self, draft: EventDraft) -> Event {
        let mut guard = self.inner.write().await;
        let id = guard.next_id.to_string();
        guard.next_id += 1;
        let event = Event {
            id,
            title: draft.title,
            description: draft.description,
            datetime: draft.datetime,
            location: draft.location,
            attendees: vec![draft.organizer_id.clone()],
            organizer_id: draft.organizer_id,
        };
        guard.events.push(event.clone());
        event
    }

    async fn join(&self, event_id: &str, user_id: &str) -> Result<Event, RsvpError> {
        let mut guard = self.inner.write().await;
        let event = guard
            .events
            .iter_mut()
            .find(|event| event.id == event_id)
            .ok_or(RsvpError::EventNotFound)?;
        if !event.is_attendee(user_id) {
            event.attendees.push(user_id.to_string());
        }
        Ok(event.clone())
    }

    async fn leave(&self, event_id: &str, user_id: &str) -> Result<LeaveOutcome, RsvpError> {
        let mut guard = self.inner.write().await;
        let event = guard
            .events
            .iter_mut()
            .find(|event| event.id == event_id)
            .ok_or(RsvpError::EventNotFound)?;
        if event.organizer_id == user_id {
            return Err(RsvpError::OrganizerCannotLeave);
        }
        match event.attendees.iter().position(|id| id == user_id) {
            Some(index) => {
                event.attendees.remove(index);
                Ok(LeaveOutcome::Left(event.clone()))
            }
            None => Ok(LeaveOutcome::NotAttending(event.clone())),
        }
    }
}

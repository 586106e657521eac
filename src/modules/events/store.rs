// Port for event records and the RSVP rules that mutate the attendee list.
//
// Boundaries
// - No storage details here. Adapters decide how records are kept and must
//   apply each mutation inside one critical section.

use async_trait::async_trait;
use thiserror::Error;

use crate::modules::events::core::{Event, EventDraft};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RsvpError {
    #[error("Event not found")]
    EventNotFound,
    #[error("Organizers cannot leave their own events")]
    OrganizerCannotLeave,
}

/// Outcome of a leave call. Leaving an event one never joined is a no-op,
/// and callers word their response differently for that case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeaveOutcome {
    Left(Event),
    NotAttending(Event),
}

#[async_trait]
pub trait EventStore: Send + Sync {
    /// All events in insertion order.
    async fn list(&self) -> Vec<Event>;

    async fn find_by_id(&self, id: &str) -> Option<Event>;

    /// Events the user organizes or attends, in insertion order.
    async fn find_by_participant(&self, user_id: &str) -> Vec<Event>;

    /// Assigns the next id, seeds the attendee list with the organizer and
    /// appends the record.
    async fn create(&self, draft: EventDraft) -> Event;

    /// Adds the user to the attendee list. Idempotent: joining an event
    /// already attended returns it unchanged.
    async fn join(&self, event_id: &str, user_id: &str) -> Result<Event, RsvpError>;

    /// Removes the user from the attendee list. The organizer is refused;
    /// their membership is permanent.
    async fn leave(&self, event_id: &str, user_id: &str) -> Result<LeaveOutcome, RsvpError>;
}

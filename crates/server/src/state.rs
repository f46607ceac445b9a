//! Application state for the sign-up server.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use event_types::{Attendee, ChangeOp, Event, NewAttendee, Table, WsServerMessage};
use thiserror::Error;
use tokio::sync::{RwLock, broadcast};

/// Capacity of the change-feed channel. Subscribers lagging past this skip
/// ahead rather than blocking inserts.
const CHANGE_FEED_CAPACITY: usize = 64;

/// Errors from state mutations.
#[derive(Error, Debug, PartialEq)]
pub enum InsertError {
    #[error("Event not found: {0}")]
    UnknownEvent(i64),
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// All seeded events, in listing order.
    pub events: Arc<Vec<Event>>,
    /// Event lookup by ID.
    events_by_id: Arc<HashMap<i64, Event>>,
    /// Registered attendees across all events.
    attendees: Arc<RwLock<Vec<Attendee>>>,
    /// Next attendee ID to hand out.
    next_attendee_id: Arc<AtomicI64>,
    /// Change-feed fan-out to WebSocket subscribers.
    changes: broadcast::Sender<WsServerMessage>,
}

impl AppState {
    /// Create a new app state with the given events.
    pub fn new(events: Vec<Event>) -> Self {
        let events_by_id: HashMap<i64, Event> = events.iter().map(|e| (e.id, e.clone())).collect();
        let (changes, _) = broadcast::channel(CHANGE_FEED_CAPACITY);

        Self {
            events: Arc::new(events),
            events_by_id: Arc::new(events_by_id),
            attendees: Arc::new(RwLock::new(Vec::new())),
            next_attendee_id: Arc::new(AtomicI64::new(1)),
            changes,
        }
    }

    /// Get an event by ID.
    pub fn get_event(&self, id: i64) -> Option<&Event> {
        self.events_by_id.get(&id)
    }

    /// Attendees registered for one event, in insertion order.
    pub async fn attendees_for(&self, event_id: i64) -> Vec<Attendee> {
        self.attendees
            .read()
            .await
            .iter()
            .filter(|a| a.event_id == event_id)
            .cloned()
            .collect()
    }

    /// Insert a new attendee and publish the change to subscribers.
    ///
    /// Rejects registrations for events that were never seeded.
    pub async fn insert_attendee(&self, new: NewAttendee) -> Result<Attendee, InsertError> {
        if !self.events_by_id.contains_key(&new.event_id) {
            return Err(InsertError::UnknownEvent(new.event_id));
        }

        let id = self.next_attendee_id.fetch_add(1, Ordering::Relaxed);
        let attendee = Attendee {
            id,
            name: new.name,
            event_id: new.event_id,
        };

        self.attendees.write().await.push(attendee.clone());

        // No subscribers is fine; the send result only reports that.
        let _ = self.changes.send(WsServerMessage::Change {
            table: Table::Attendees,
            op: ChangeOp::Insert,
            new: serde_json::to_value(&attendee).unwrap_or_default(),
        });

        Ok(attendee)
    }

    /// Subscribe to the change feed.
    pub fn subscribe(&self) -> broadcast::Receiver<WsServerMessage> {
        self.changes.subscribe()
    }
}

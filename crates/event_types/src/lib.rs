//! Shared types for the event sign-up app.
//!
//! This crate defines the records stored by the server, the REST error body,
//! and the WebSocket change-feed protocol used by the frontend to receive
//! live attendee updates.

use serde::{Deserialize, Serialize};

/// An event people can sign up for. Seeded by the server, read-only after
/// startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Unique event identifier
    pub id: i64,
    /// Display name
    pub name: String,
    /// Longer description shown on the card
    pub description: String,
    /// Who is hosting the event
    pub host: String,
    /// Where the event takes place
    pub location: String,
}

/// A registered attendee for one event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attendee {
    /// Unique attendee identifier, assigned by the server
    pub id: i64,
    /// Name entered in the registration form
    pub name: String,
    /// The event this registration belongs to
    pub event_id: i64,
}

/// Insert payload for a new registration. The server assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewAttendee {
    pub name: String,
    pub event_id: i64,
}

/// Error body returned by REST handlers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl ApiError {
    /// Create an error with just a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: None,
        }
    }

    /// Create an error with a message and a machine-readable code.
    pub fn with_code(message: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: Some(code.into()),
        }
    }
}

/// Tables exposed through the change feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Table {
    Events,
    Attendees,
}

/// Row-level change operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChangeOp {
    Insert,
    Update,
    Delete,
}

/// Messages sent by the frontend over the change-feed socket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum WsClientMessage {
    /// Start receiving changes matching the given table and operation.
    Subscribe { table: Table, op: ChangeOp },
    /// Stop receiving changes.
    Unsubscribe,
}

/// Messages sent by the server over the change-feed socket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum WsServerMessage {
    /// Acknowledges a subscription.
    Subscribed { table: Table, op: ChangeOp },
    /// A row changed. `new` carries the row as JSON for insert/update.
    Change {
        table: Table,
        op: ChangeOp,
        new: serde_json::Value,
    },
    /// The server could not handle a client message.
    Error { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subscribe_message_format() {
        let json = r#"{"type":"Subscribe","payload":{"table":"attendees","op":"INSERT"}}"#;
        let msg: WsClientMessage = serde_json::from_str(json).unwrap();

        assert_eq!(
            msg,
            WsClientMessage::Subscribe {
                table: Table::Attendees,
                op: ChangeOp::Insert,
            }
        );
    }

    #[test]
    fn test_change_message_carries_row() {
        let attendee = Attendee {
            id: 7,
            name: "Ada".to_string(),
            event_id: 1,
        };

        let msg = WsServerMessage::Change {
            table: Table::Attendees,
            op: ChangeOp::Insert,
            new: serde_json::to_value(&attendee).unwrap(),
        };

        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains(r#""type":"Change""#));
        assert!(json.contains(r#""table":"attendees""#));
        assert!(json.contains(r#""op":"INSERT""#));

        let back: WsServerMessage = serde_json::from_str(&json).unwrap();
        let WsServerMessage::Change { new, .. } = back else {
            panic!("Wrong variant");
        };
        let row: Attendee = serde_json::from_value(new).unwrap();
        assert_eq!(row, attendee);
    }

    #[test]
    fn test_api_error_code_is_optional_in_json() {
        let plain = serde_json::to_string(&ApiError::new("boom")).unwrap();
        assert!(!plain.contains("code"));

        let coded = serde_json::to_string(&ApiError::with_code("boom", "NOT_FOUND")).unwrap();
        assert!(coded.contains(r#""code":"NOT_FOUND""#));
    }
}

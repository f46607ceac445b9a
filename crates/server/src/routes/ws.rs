//! WebSocket handler for the live change feed.

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use event_types::{ChangeOp, Table, WsClientMessage, WsServerMessage};
use futures::stream::SplitSink;
use futures::{SinkExt, StreamExt};
use tokio::sync::broadcast::error::RecvError;

use crate::state::AppState;

/// WebSocket upgrade handler.
pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Handle a WebSocket connection.
///
/// The client picks a table/operation filter with `Subscribe`; every matching
/// change published after that point is forwarded until the client
/// unsubscribes or the socket closes.
async fn handle_socket(socket: WebSocket, state: AppState) {
    let (mut sender, mut receiver) = socket.split();
    let mut changes = state.subscribe();
    let mut filter: Option<(Table, ChangeOp)> = None;

    loop {
        tokio::select! {
            msg = receiver.next() => {
                let text = match msg {
                    Some(Ok(Message::Text(text))) => text,
                    Some(Ok(Message::Close(_))) | None => break,
                    Some(Err(_)) => break,
                    _ => continue,
                };

                match serde_json::from_str::<WsClientMessage>(&text) {
                    Ok(WsClientMessage::Subscribe { table, op }) => {
                        filter = Some((table, op));
                        let ack = WsServerMessage::Subscribed { table, op };
                        if send_json(&mut sender, &ack).await.is_err() {
                            break;
                        }
                    }
                    Ok(WsClientMessage::Unsubscribe) => {
                        filter = None;
                    }
                    Err(e) => {
                        let error = WsServerMessage::Error {
                            message: format!("Invalid message format: {}", e),
                        };
                        if send_json(&mut sender, &error).await.is_err() {
                            break;
                        }
                    }
                }
            }
            change = changes.recv() => {
                let msg = match change {
                    Ok(msg) => msg,
                    // Skip the gap and keep streaming.
                    Err(RecvError::Lagged(_)) => continue,
                    Err(RecvError::Closed) => break,
                };

                if matches_filter(&msg, filter)
                    && send_json(&mut sender, &msg).await.is_err()
                {
                    break;
                }
            }
        }
    }
}

/// Serialize and send one server message.
async fn send_json(
    sender: &mut SplitSink<WebSocket, Message>,
    msg: &WsServerMessage,
) -> Result<(), axum::Error> {
    let json = serde_json::to_string(msg).unwrap();
    sender.send(Message::Text(json)).await
}

/// Whether a change message passes the client's subscription filter.
fn matches_filter(msg: &WsServerMessage, filter: Option<(Table, ChangeOp)>) -> bool {
    let Some((want_table, want_op)) = filter else {
        return false;
    };

    matches!(
        msg,
        WsServerMessage::Change { table, op, .. } if *table == want_table && *op == want_op
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_message_parsing() {
        let json = r#"{"type":"Subscribe","payload":{"table":"attendees","op":"INSERT"}}"#;
        let msg: WsClientMessage = serde_json::from_str(json).unwrap();

        if let WsClientMessage::Subscribe { table, op } = msg {
            assert_eq!(table, Table::Attendees);
            assert_eq!(op, ChangeOp::Insert);
        } else {
            panic!("Wrong variant");
        }
    }

    #[test]
    fn test_filter_matching() {
        let change = WsServerMessage::Change {
            table: Table::Attendees,
            op: ChangeOp::Insert,
            new: serde_json::Value::Null,
        };

        assert!(matches_filter(
            &change,
            Some((Table::Attendees, ChangeOp::Insert))
        ));
        assert!(!matches_filter(
            &change,
            Some((Table::Events, ChangeOp::Insert))
        ));
        assert!(!matches_filter(
            &change,
            Some((Table::Attendees, ChangeOp::Delete))
        ));
        assert!(!matches_filter(&change, None));
    }

    #[test]
    fn test_non_change_messages_never_forwarded() {
        let ack = WsServerMessage::Subscribed {
            table: Table::Attendees,
            op: ChangeOp::Insert,
        };

        assert!(!matches_filter(
            &ack,
            Some((Table::Attendees, ChangeOp::Insert))
        ));
    }
}

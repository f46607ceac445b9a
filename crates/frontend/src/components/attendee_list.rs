//! Live attendee list component.
//!
//! Fetches the attendees registered so far, then subscribes to the server's
//! change feed so rows inserted by anyone appear without a reload. The
//! subscription is cancelled when the component unmounts.

use std::rc::Rc;

use event_types::{Attendee, ChangeOp, Table, WsClientMessage, WsServerMessage};
use futures::channel::oneshot;
use futures::{SinkExt, StreamExt};
use gloo_net::http::Request;
use gloo_net::websocket::{Message, futures::WebSocket};
use yew::prelude::*;

use crate::components::ToastMessage;

/// Attendee rows behind a reducer, so the long-lived feed task can append to
/// current state instead of a stale render snapshot.
#[derive(Default, PartialEq)]
struct Rows {
    attendees: Vec<Attendee>,
}

enum RowsAction {
    Replace(Vec<Attendee>),
    Append(Attendee),
}

impl Reducible for Rows {
    type Action = RowsAction;

    fn reduce(self: Rc<Self>, action: RowsAction) -> Rc<Self> {
        let attendees = match action {
            RowsAction::Replace(attendees) => attendees,
            RowsAction::Append(attendee) => {
                let mut attendees = self.attendees.clone();
                attendees.push(attendee);
                attendees
            }
        };
        Rc::new(Self { attendees })
    }
}

/// Properties for AttendeeList component.
#[derive(Properties, PartialEq)]
pub struct AttendeeListProps {
    pub event_id: i64,
    pub notify: Callback<ToastMessage>,
}

/// Live attendee list component.
#[function_component(AttendeeList)]
pub fn attendee_list(props: &AttendeeListProps) -> Html {
    let rows = use_reducer(Rows::default);

    // Fetch existing attendees
    {
        let rows = rows.clone();
        let notify = props.notify.clone();

        use_effect_with(props.event_id, move |&event_id| {
            wasm_bindgen_futures::spawn_local(async move {
                let url = format!("/api/events/{}/attendees", event_id);
                match Request::get(&url).send().await {
                    Ok(resp) if resp.ok() => {
                        if let Ok(data) = resp.json::<Vec<Attendee>>().await {
                            rows.dispatch(RowsAction::Replace(data));
                        }
                    }
                    Ok(resp) => {
                        notify.emit(ToastMessage::error(resp.status_text()));
                    }
                    Err(e) => {
                        notify.emit(ToastMessage::error(e.to_string()));
                    }
                }
            });
        });
    }

    // Subscribe to attendee inserts; cancel on unmount
    {
        let rows = rows.clone();

        use_effect_with(props.event_id, move |&event_id| {
            let (cancel_tx, mut cancel_rx) = oneshot::channel::<()>();

            wasm_bindgen_futures::spawn_local(async move {
                let ws = match WebSocket::open(&feed_url()) {
                    Ok(ws) => ws,
                    Err(e) => {
                        web_sys::console::error_1(
                            &format!("Failed to open change feed: {}", e).into(),
                        );
                        return;
                    }
                };
                let (mut write, read) = ws.split();
                let mut read = read.fuse();

                let subscribe = WsClientMessage::Subscribe {
                    table: Table::Attendees,
                    op: ChangeOp::Insert,
                };
                let json = serde_json::to_string(&subscribe).unwrap();
                if write.send(Message::Text(json)).await.is_err() {
                    return;
                }

                loop {
                    futures::select! {
                        msg = read.next() => {
                            let Some(Ok(Message::Text(text))) = msg else {
                                break;
                            };
                            if let Ok(WsServerMessage::Change { new, .. }) =
                                serde_json::from_str(&text)
                                && let Ok(row) = serde_json::from_value::<Attendee>(new)
                                && row.event_id == event_id
                            {
                                rows.dispatch(RowsAction::Append(row));
                            }
                        }
                        _ = cancel_rx => break,
                    }
                }
            });

            move || {
                let _ = cancel_tx.send(());
            }
        });
    }

    html! {
        <div class="attendee-list">
            <h2>{"Who's coming"}</h2>
            <ul>
                { for rows.attendees.iter().map(|attendee| {
                    html! { <li key={attendee.id}>{ &attendee.name }</li> }
                })}
            </ul>
        </div>
    }
}

/// WebSocket URL for the change feed, derived from the page location.
fn feed_url() -> String {
    let location = web_sys::window().map(|w| w.location());
    let (protocol, host) = location
        .and_then(|l| Some((l.protocol().ok()?, l.host().ok()?)))
        .unwrap_or_else(|| ("http:".to_string(), "localhost:4870".to_string()));

    let scheme = if protocol == "https:" { "wss" } else { "ws" };
    format!("{}://{}/ws", scheme, host)
}

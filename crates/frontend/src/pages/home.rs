//! Home page listing all events.

use event_types::Event;
use gloo_net::http::Request;
use yew::prelude::*;

use crate::components::{EventCard, Loading};

/// Home page component.
#[function_component(HomePage)]
pub fn home_page() -> Html {
    let events = use_state(Vec::<Event>::new);
    let loading = use_state(|| true);

    {
        let events = events.clone();
        let loading = loading.clone();

        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match Request::get("/api/events").send().await {
                    Ok(resp) => {
                        if let Ok(data) = resp.json::<Vec<Event>>().await {
                            events.set(data);
                        }
                    }
                    Err(e) => {
                        web_sys::console::error_1(
                            &format!("Failed to fetch events: {}", e).into(),
                        );
                    }
                }
                loading.set(false);
            });
        });
    }

    if *loading {
        return html! { <Loading /> };
    }

    html! {
        <div>
            <h1>{"Upcoming Events"}</h1>

            if events.is_empty() {
                <div class="card">
                    <p>{"No events yet."}</p>
                </div>
            } else {
                <div class="event-list">
                    { for events.iter().map(|event| {
                        html! { <EventCard event={event.clone()} /> }
                    })}
                </div>
            }
        </div>
    }
}

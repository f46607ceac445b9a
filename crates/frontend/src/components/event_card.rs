//! Event card component for the home page list.

use event_types::Event;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;

/// Properties for EventCard component.
#[derive(Properties, PartialEq)]
pub struct EventCardProps {
    pub event: Event,
}

/// Event card component, linking to the event's detail page.
#[function_component(EventCard)]
pub fn event_card(props: &EventCardProps) -> Html {
    let event = &props.event;

    html! {
        <Link<Route> to={Route::EventDetail { id: event.id.to_string() }}>
            <div class="card event-card">
                <div class="card-header">
                    <h2 class="card-title">{ format!("{} 🥳", event.name) }</h2>
                </div>
                <p class="event-description">{ &event.description }</p>
                <p class="event-host">{ format!("🎤 {}", event.host) }</p>
                <p class="event-location">{ format!("📍 {}", event.location) }</p>
            </div>
        </Link<Route>>
    }
}

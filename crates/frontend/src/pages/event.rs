//! Event detail page with the registration form and live attendee list.

use event_types::{ApiError, Event, NewAttendee};
use gloo_net::http::Request;
use yew::prelude::*;

use crate::components::{AttendeeList, Loading, Toast, ToastMessage};

/// Properties for EventPage.
#[derive(Properties, PartialEq)]
pub struct EventPageProps {
    pub event_id: String,
}

/// Event detail page component.
#[function_component(EventPage)]
pub fn event_page(props: &EventPageProps) -> Html {
    let event = use_state(|| None::<Event>);
    let loading = use_state(|| true);
    let toast = use_state(|| None::<ToastMessage>);
    let event_id = props.event_id.clone();

    // Fetch the event
    {
        let event = event.clone();
        let loading = loading.clone();
        let toast = toast.clone();
        let event_id = event_id.clone();

        use_effect_with(event_id.clone(), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match Request::get(&format!("/api/events/{}", event_id)).send().await {
                    Ok(resp) if resp.ok() => {
                        if let Ok(data) = resp.json::<Event>().await {
                            event.set(Some(data));
                        }
                    }
                    Ok(resp) => {
                        let message = match resp.json::<ApiError>().await {
                            Ok(err) => err.message,
                            Err(_) => resp.status_text(),
                        };
                        toast.set(Some(ToastMessage::error(message)));
                    }
                    Err(e) => {
                        toast.set(Some(ToastMessage::error(e.to_string())));
                    }
                }
                loading.set(false);
            });
        });
    }

    let notify = {
        let toast = toast.clone();
        Callback::from(move |message: ToastMessage| toast.set(Some(message)))
    };

    let dismiss = {
        let toast = toast.clone();
        Callback::from(move |_| toast.set(None))
    };

    let toast_view = if let Some(message) = (*toast).clone() {
        html! { <Toast {message} on_dismiss={dismiss} /> }
    } else {
        html! {}
    };

    if *loading {
        return html! { <Loading /> };
    }

    let Some(event_data) = event.as_ref() else {
        return html! {
            <div>
                <div class="card">
                    <h1>{"Event Not Found"}</h1>
                    <p>{"The requested event could not be found."}</p>
                </div>
                { toast_view }
            </div>
        };
    };

    html! {
        <div>
            <RegistrationCard event={event_data.clone()} notify={notify} />
            { toast_view }
        </div>
    }
}

/// Properties for RegistrationCard.
#[derive(Properties, PartialEq)]
struct RegistrationCardProps {
    event: Event,
    notify: Callback<ToastMessage>,
}

/// Registration form card, with the live attendee list below it.
#[function_component(RegistrationCard)]
fn registration_card(props: &RegistrationCardProps) -> Html {
    let name = use_state(String::new);
    let event_id = props.event.id;

    let on_name_input = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };

    let on_submit = {
        let name = name.clone();
        let notify = props.notify.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let name = name.clone();
            let notify = notify.clone();
            let new = NewAttendee {
                name: (*name).clone(),
                event_id,
            };

            wasm_bindgen_futures::spawn_local(async move {
                let request = match Request::post("/api/attendees").json(&new) {
                    Ok(request) => request,
                    Err(e) => {
                        notify.emit(ToastMessage::error(e.to_string()));
                        return;
                    }
                };

                match request.send().await {
                    Ok(resp) if resp.ok() => {
                        name.set(String::new());
                        notify.emit(ToastMessage::success("You're signed up!"));
                    }
                    Ok(resp) => {
                        let message = match resp.json::<ApiError>().await {
                            Ok(err) => err.message,
                            Err(_) => resp.status_text(),
                        };
                        notify.emit(ToastMessage::error(message));
                    }
                    Err(e) => {
                        notify.emit(ToastMessage::error(e.to_string()));
                    }
                }
            });
        })
    };

    html! {
        <div class="card registration-card">
            <div class="card-header">
                <h1 class="card-title">{ &props.event.name }</h1>
            </div>
            <p class="text-secondary">{ &props.event.description }</p>
            <p class="event-host">{ format!("🎤 {}", props.event.host) }</p>
            <p class="event-location">{ format!("📍 {}", props.event.location) }</p>

            <form onsubmit={on_submit}>
                <label for="name">{"Name"}</label>
                <input
                    id="name"
                    type="text"
                    class="name-input"
                    placeholder="Your name"
                    required={true}
                    value={(*name).clone()}
                    oninput={on_name_input}
                />
                <button type="submit" class="btn btn-primary">
                    {"Sign me up"}
                </button>
            </form>

            <AttendeeList {event_id} notify={props.notify.clone()} />
        </div>
    }
}

//! Main application component with routing.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::{EventPage, HomePage};

/// Application routes.
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/events/:id")]
    EventDetail { id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Route switch function.
fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <HomePage /> },
        Route::EventDetail { id } => html! { <EventPage event_id={id} /> },
        Route::NotFound => html! {
            <div class="card">
                <h1>{"404 - Page Not Found"}</h1>
                <p>{"The page you're looking for doesn't exist."}</p>
            </div>
        },
    }
}

/// Main application component.
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <div class="app-container">
                <Header />
                <main class="main-content">
                    <Switch<Route> render={switch} />
                </main>
            </div>
        </BrowserRouter>
    }
}

/// Top navigation header.
#[function_component(Header)]
fn header() -> Html {
    html! {
        <header class="header">
            <Link<Route> to={Route::Home} classes="nav-brand">
                {"Event Sign-up"}
            </Link<Route>>
        </header>
    }
}

//! Event sign-up web server.
//!
//! Serves the REST API, the WebSocket change feed, and the built frontend.

mod routes;
mod seed;
mod state;

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use axum::{
    Router,
    routing::{get, post},
};
use clap::Parser;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tracing::info;

use routes::{create_attendee, get_event, list_event_attendees, list_events, ws_handler};
use state::AppState;

/// Event sign-up server.
#[derive(Parser)]
#[command(name = "signup-server")]
#[command(version, about, long_about = None)]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "4870")]
    port: u16,

    /// Seed events from a JSON file instead of the builtin set
    #[arg(long)]
    events: Option<PathBuf>,

    /// Directory with the built frontend
    #[arg(long, default_value = "crates/frontend/dist")]
    dist: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let args = Args::parse();

    let events = match &args.events {
        Some(path) => seed::load_events_from_file(path)
            .with_context(|| format!("Failed to load events from {}", path.display()))?,
        None => seed::builtin_events(),
    };
    info!(count = events.len(), "Seeded events");

    let state = AppState::new(events);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/events", get(list_events))
        .route("/events/:id", get(get_event))
        .route("/events/:id/attendees", get(list_event_attendees))
        .route("/attendees", post(create_attendee));

    let app = Router::new()
        .nest("/api", api_routes)
        .route("/ws", get(ws_handler))
        // Serve static files from the frontend dist (when built)
        .fallback_service(ServeDir::new(&args.dist).append_index_html_on_directories(true))
        .layer(cors)
        .with_state(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));
    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_state_from_builtin_seed() {
        let state = AppState::new(seed::builtin_events());
        assert!(state.get_event(1).is_some());
    }
}

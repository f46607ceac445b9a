//! Event API routes.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use event_types::{ApiError, Attendee, Event};

use crate::state::AppState;

/// GET /api/events - List all events.
pub async fn list_events(State(state): State<AppState>) -> Json<Vec<Event>> {
    Json(state.events.as_ref().clone())
}

/// GET /api/events/:id - Get one event.
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Event>, (StatusCode, Json<ApiError>)> {
    state
        .get_event(id)
        .map(|event| Json(event.clone()))
        .ok_or_else(|| {
            (
                StatusCode::NOT_FOUND,
                Json(ApiError::with_code(
                    format!("Event not found: {}", id),
                    "NOT_FOUND",
                )),
            )
        })
}

/// GET /api/events/:id/attendees - Attendees registered for an event.
pub async fn list_event_attendees(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<Attendee>>, (StatusCode, Json<ApiError>)> {
    if state.get_event(id).is_none() {
        return Err((
            StatusCode::NOT_FOUND,
            Json(ApiError::with_code(
                format!("Event not found: {}", id),
                "NOT_FOUND",
            )),
        ));
    }

    Ok(Json(state.attendees_for(id).await))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;
    use event_types::NewAttendee;

    #[tokio::test]
    async fn test_list_events_returns_all_seeded() {
        let events = seed::builtin_events();
        let state = AppState::new(events.clone());

        let Json(listed) = list_events(State(state)).await;

        assert_eq!(listed, events);
    }

    #[tokio::test]
    async fn test_get_event_found() {
        let state = AppState::new(seed::builtin_events());

        let Json(event) = get_event(State(state), Path(1)).await.unwrap();

        assert_eq!(event.id, 1);
        assert!(!event.name.is_empty());
    }

    #[tokio::test]
    async fn test_get_event_not_found() {
        let state = AppState::new(seed::builtin_events());

        let (status, Json(error)) = get_event(State(state), Path(999)).await.unwrap_err();

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(error.code.as_deref(), Some("NOT_FOUND"));
    }

    #[tokio::test]
    async fn test_list_event_attendees() {
        let state = AppState::new(seed::builtin_events());
        state
            .insert_attendee(NewAttendee {
                name: "Ada".to_string(),
                event_id: 1,
            })
            .await
            .unwrap();

        let Json(attendees) = list_event_attendees(State(state), Path(1)).await.unwrap();

        assert_eq!(attendees.len(), 1);
        assert_eq!(attendees[0].name, "Ada");
        assert_eq!(attendees[0].event_id, 1);
    }

    #[tokio::test]
    async fn test_list_event_attendees_unknown_event() {
        let state = AppState::new(seed::builtin_events());

        let (status, _) = list_event_attendees(State(state), Path(999))
            .await
            .unwrap_err();

        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}

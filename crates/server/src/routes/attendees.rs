//! Attendee registration route.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
};
use event_types::{ApiError, Attendee, NewAttendee};

use crate::state::{AppState, InsertError};

/// POST /api/attendees - Register an attendee for an event.
///
/// On success the new row is also published on the change feed, so anyone
/// watching the event page sees it appear live.
pub async fn create_attendee(
    State(state): State<AppState>,
    Json(new): Json<NewAttendee>,
) -> Result<(StatusCode, Json<Attendee>), (StatusCode, Json<ApiError>)> {
    match state.insert_attendee(new).await {
        Ok(attendee) => Ok((StatusCode::CREATED, Json(attendee))),
        Err(InsertError::UnknownEvent(id)) => Err((
            StatusCode::NOT_FOUND,
            Json(ApiError::with_code(
                format!("Event not found: {}", id),
                "NOT_FOUND",
            )),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[tokio::test]
    async fn test_create_attendee() {
        let state = AppState::new(seed::builtin_events());

        let (status, Json(attendee)) = create_attendee(
            State(state.clone()),
            Json(NewAttendee {
                name: "Ada".to_string(),
                event_id: 1,
            }),
        )
        .await
        .unwrap();

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(attendee.name, "Ada");
        assert_eq!(attendee.event_id, 1);
        assert_eq!(state.attendees_for(1).await, vec![attendee]);
    }

    #[tokio::test]
    async fn test_create_attendee_unknown_event() {
        let state = AppState::new(seed::builtin_events());

        let (status, Json(error)) = create_attendee(
            State(state.clone()),
            Json(NewAttendee {
                name: "Ada".to_string(),
                event_id: 999,
            }),
        )
        .await
        .unwrap_err();

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(error.code.as_deref(), Some("NOT_FOUND"));
        assert!(state.attendees_for(999).await.is_empty());
    }
}

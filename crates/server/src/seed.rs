//! Event seeding for the sign-up server.
//!
//! Events are owned by the backend and read-only to the frontend. By default
//! the server seeds a builtin sample set; `--events <file>` seeds from a JSON
//! array instead.

use std::path::Path;

use event_types::Event;
use thiserror::Error;

/// Errors from seed loading.
#[derive(Error, Debug)]
pub enum SeedError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for seed operations.
pub type Result<T> = std::result::Result<T, SeedError>;

/// The builtin sample events.
pub fn builtin_events() -> Vec<Event> {
    vec![
        Event {
            id: 1,
            name: "Rust Meetup: Async in Practice".to_string(),
            description: "Talks on async runtimes, pitfalls, and patterns. Pizza included."
                .to_string(),
            host: "Oslo Rust".to_string(),
            location: "Rebel, Universitetsgata 2".to_string(),
        },
        Event {
            id: 2,
            name: "Friday Board Games".to_string(),
            description: "Casual board game night. Bring a game or borrow one of ours."
                .to_string(),
            host: "The Social Club".to_string(),
            location: "Common room, 3rd floor".to_string(),
        },
        Event {
            id: 3,
            name: "Summer Kickoff BBQ".to_string(),
            description: "Grill, lawn games, and live music until sunset.".to_string(),
            host: "Events Committee".to_string(),
            location: "Frogner Park".to_string(),
        },
    ]
}

/// Load events from a JSON string.
pub fn load_events_from_json(json: &str) -> Result<Vec<Event>> {
    Ok(serde_json::from_str(json)?)
}

/// Load events from a JSON file.
pub fn load_events_from_file(path: &Path) -> Result<Vec<Event>> {
    let content = std::fs::read_to_string(path)?;
    load_events_from_json(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_events_have_unique_ids() {
        let events = builtin_events();
        assert!(!events.is_empty());

        let ids: HashSet<i64> = events.iter().map(|e| e.id).collect();
        assert_eq!(ids.len(), events.len());
    }

    #[test]
    fn test_builtin_events_have_all_fields() {
        for event in builtin_events() {
            assert!(!event.name.is_empty());
            assert!(!event.description.is_empty());
            assert!(!event.host.is_empty());
            assert!(!event.location.is_empty());
        }
    }

    #[test]
    fn test_load_events_from_json() {
        let json = r#"[
            {"id": 10, "name": "N", "description": "D", "host": "H", "location": "L"}
        ]"#;

        let events = load_events_from_json(json).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].id, 10);
        assert_eq!(events[0].name, "N");
    }

    #[test]
    fn test_load_events_rejects_malformed_json() {
        assert!(load_events_from_json("not json").is_err());
        assert!(load_events_from_json(r#"[{"id": 1}]"#).is_err());
    }
}

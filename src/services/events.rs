use std::sync::Arc;

use tracing::info;

use crate::db::models::{CreateEvent, Event, EventFilter, UpdateEvent};
use crate::db::{EventRepository, TeamMemberRepository};
use crate::error::{AppError, AppResult};
use crate::schedule::parse_minutes;
use crate::AppState;

const MAX_TITLE_LEN: usize = 200;

pub struct EventService;

impl EventService {
    /// Validate the fields every stored event must satisfy: a title, a type,
    /// parseable times, and an end strictly after the start.
    pub fn validate_fields(title: &str, start: &str, end: &str, event_type: &str) -> AppResult<()> {
        let title = title.trim();
        if title.is_empty() {
            return Err(AppError::Validation("title cannot be empty".to_string()));
        }
        if title.chars().count() > MAX_TITLE_LEN {
            return Err(AppError::Validation(format!(
                "title cannot exceed {} characters",
                MAX_TITLE_LEN
            )));
        }

        if event_type.trim().is_empty() {
            return Err(AppError::Validation("type cannot be empty".to_string()));
        }

        let start_minutes =
            parse_minutes(start).map_err(|e| AppError::Validation(format!("start: {}", e)))?;
        let end_minutes =
            parse_minutes(end).map_err(|e| AppError::Validation(format!("end: {}", e)))?;

        if end_minutes <= start_minutes {
            return Err(AppError::Validation(format!(
                "end ({}) must be later than start ({}) on the same day",
                end.trim(),
                start.trim()
            )));
        }

        Ok(())
    }

    async fn ensure_member_exists(state: &Arc<AppState>, member_id: Option<&str>) -> AppResult<()> {
        let Some(member_id) = member_id else {
            return Ok(());
        };

        if TeamMemberRepository::find_by_id(&state.db, member_id)
            .await?
            .is_none()
        {
            return Err(AppError::Validation(format!(
                "unknown team member: {}",
                member_id
            )));
        }

        Ok(())
    }

    pub async fn create(state: &Arc<AppState>, mut create: CreateEvent) -> AppResult<Event> {
        create.title = create.title.trim().to_string();
        Self::validate_fields(&create.title, &create.start, &create.end, &create.event_type)?;
        Self::ensure_member_exists(state, create.member_id.as_deref()).await?;

        let event = EventRepository::create(&state.db, create).await?;
        info!(event_id = %event.id, "Created event {:?}", event.title);
        Ok(event)
    }

    pub async fn get(state: &Arc<AppState>, id: &str) -> AppResult<Event> {
        EventRepository::find_by_id(&state.db, id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Event {} not found", id)))
    }

    pub async fn list(state: &Arc<AppState>, filter: &EventFilter) -> AppResult<Vec<Event>> {
        EventRepository::list(&state.db, filter).await
    }

    pub async fn update(state: &Arc<AppState>, id: &str, update: UpdateEvent) -> AppResult<Event> {
        let mut event = Self::get(state, id).await?;
        event.apply(update);
        event.title = event.title.trim().to_string();

        Self::validate_fields(&event.title, &event.start, &event.end, &event.event_type)?;
        Self::ensure_member_exists(state, event.member_id.as_deref()).await?;

        let event = EventRepository::update(&state.db, &event).await?;
        info!(event_id = %event.id, "Updated event");
        Ok(event)
    }

    pub async fn delete(state: &Arc<AppState>, id: &str) -> AppResult<()> {
        EventRepository::delete(&state.db, id).await?;
        info!(event_id = %id, "Deleted event");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{seed_day, test_state};

    fn create(start: &str, end: &str) -> CreateEvent {
        CreateEvent {
            title: "Coaching call".to_string(),
            start: start.to_string(),
            end: end.to_string(),
            date: None,
            event_type: "meeting".to_string(),
            member_id: None,
            attendees: Vec::new(),
            location: None,
            meeting_link: None,
            recurring: None,
            description: None,
        }
    }

    #[test]
    fn validate_fields_rejects_bad_ranges() {
        assert!(EventService::validate_fields("Call", "9:00 AM", "9:30 AM", "meeting").is_ok());
        assert!(matches!(
            EventService::validate_fields("Call", "9:30 AM", "9:30 AM", "meeting"),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            EventService::validate_fields("Call", "11:00 PM", "1:00 AM", "meeting"),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            EventService::validate_fields("Call", "25:00 PM", "1:00 AM", "meeting"),
            Err(AppError::Validation(ref m)) if m.starts_with("start:")
        ));
        assert!(matches!(
            EventService::validate_fields("   ", "9:00 AM", "9:30 AM", "meeting"),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            EventService::validate_fields("Call", "9:00 AM", "9:30 AM", ""),
            Err(AppError::Validation(_))
        ));
        let long_title = "x".repeat(MAX_TITLE_LEN + 1);
        assert!(EventService::validate_fields(&long_title, "9:00 AM", "9:30 AM", "work").is_err());
    }

    #[tokio::test]
    async fn create_rejects_unknown_member() {
        let state = test_state(false).await;
        let mut payload = create("9:00 AM", "10:00 AM");
        payload.member_id = Some("nobody".to_string());

        assert!(matches!(
            EventService::create(&state, payload).await,
            Err(AppError::Validation(ref m)) if m.contains("nobody")
        ));
    }

    #[tokio::test]
    async fn update_merges_and_revalidates() {
        let state = test_state(false).await;
        let event = EventService::create(&state, create("9:00 AM", "10:00 AM"))
            .await
            .unwrap();

        let updated = EventService::update(
            &state,
            &event.id,
            UpdateEvent {
                end: Some("11:00 AM".to_string()),
                location: Some(Some("Studio A".to_string())),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(updated.start, "9:00 AM");
        assert_eq!(updated.end, "11:00 AM");
        assert_eq!(updated.location.as_deref(), Some("Studio A"));

        let inverted = EventService::update(
            &state,
            &event.id,
            UpdateEvent {
                start: Some("12:00 PM".to_string()),
                ..Default::default()
            },
        )
        .await;
        assert!(matches!(inverted, Err(AppError::Validation(_))));

        let stored = EventService::get(&state, &event.id).await.unwrap();
        assert_eq!(stored.start, "9:00 AM");
    }

    #[tokio::test]
    async fn missing_events_are_not_found() {
        let state = test_state(false).await;
        assert!(matches!(
            EventService::get(&state, "missing").await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            EventService::update(&state, "missing", UpdateEvent::default()).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            EventService::delete(&state, "missing").await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn titles_are_stored_trimmed() {
        let state = test_state(false).await;
        let mut payload = create("9:00 AM", "10:00 AM");
        payload.title = "  Coaching call  ".to_string();
        let event = EventService::create(&state, payload).await.unwrap();
        assert_eq!(event.title, "Coaching call");

        let padded = format!(" {} ", "x".repeat(MAX_TITLE_LEN));
        let updated = EventService::update(
            &state,
            &event.id,
            UpdateEvent {
                title: Some(padded),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(updated.title.len(), MAX_TITLE_LEN);

        let stored = EventService::get(&state, &event.id).await.unwrap();
        assert_eq!(stored.title, updated.title);
    }

    #[tokio::test]
    async fn null_clears_date_and_member() {
        let state = test_state(true).await;
        let mut payload = create("9:00 AM", "10:00 AM");
        payload.date = Some(seed_day());
        payload.member_id = Some("dr-chen".to_string());
        payload.location = Some("Room 2".to_string());
        let event = EventService::create(&state, payload).await.unwrap();

        let update: UpdateEvent = serde_json::from_value(serde_json::json!({
            "date": null,
            "memberId": null
        }))
        .unwrap();
        let updated = EventService::update(&state, &event.id, update).await.unwrap();
        assert_eq!(updated.date, None);
        assert_eq!(updated.member_id, None);
        assert_eq!(updated.location.as_deref(), Some("Room 2"));

        let stored = EventService::get(&state, &event.id).await.unwrap();
        assert_eq!(stored.date, None);
        assert_eq!(stored.member_id, None);
    }
}

use chrono::Utc;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

use crate::db::models::*;
use crate::error::{AppError, AppResult};

// ============================================================================
// Event Repository
// ============================================================================

/// CRUD access to schedule events (`events` table). Rows are returned in
/// insertion order, which the grid uses as paint order.
pub struct EventRepository;

const EVENT_COLUMNS: &str = r#"
    id, title, start_time, end_time, event_date, event_type, member_id,
    attendees, location, meeting_link, recurring, description,
    created_at, updated_at
"#;

fn map_event(r: &SqliteRow) -> AppResult<Event> {
    let attendees_raw: String = r.try_get("attendees")?;
    let attendees = serde_json::from_str(&attendees_raw).map_err(|e| {
        AppError::Internal(anyhow::anyhow!("Corrupt attendees column: {}", e))
    })?;

    Ok(Event {
        id: r.try_get("id")?,
        title: r.try_get("title")?,
        start: r.try_get("start_time")?,
        end: r.try_get("end_time")?,
        date: r.try_get("event_date")?,
        event_type: r.try_get("event_type")?,
        member_id: r.try_get("member_id")?,
        attendees,
        location: r.try_get("location")?,
        meeting_link: r.try_get("meeting_link")?,
        recurring: r.try_get("recurring")?,
        description: r.try_get("description")?,
        created_at: r.try_get("created_at")?,
        updated_at: r.try_get("updated_at")?,
    })
}

fn encode_attendees(attendees: &[String]) -> AppResult<String> {
    serde_json::to_string(attendees)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to encode attendees: {}", e)))
}

impl EventRepository {
    pub async fn create(pool: &SqlitePool, create: CreateEvent) -> AppResult<Event> {
        let id = Uuid::new_v4().to_string();
        let now = Utc::now().naive_utc();
        let attendees = encode_attendees(&create.attendees)?;

        sqlx::query(
            r#"
            INSERT INTO events (
                id, title, start_time, end_time, event_date, event_type, member_id,
                attendees, location, meeting_link, recurring, description,
                created_at, updated_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&id)
        .bind(&create.title)
        .bind(&create.start)
        .bind(&create.end)
        .bind(create.date)
        .bind(&create.event_type)
        .bind(&create.member_id)
        .bind(attendees)
        .bind(&create.location)
        .bind(&create.meeting_link)
        .bind(&create.recurring)
        .bind(&create.description)
        .bind(now)
        .bind(now)
        .execute(pool)
        .await
        .map_err(AppError::Database)?;

        Ok(Event {
            id,
            title: create.title,
            start: create.start,
            end: create.end,
            date: create.date,
            event_type: create.event_type,
            member_id: create.member_id,
            attendees: create.attendees,
            location: create.location,
            meeting_link: create.meeting_link,
            recurring: create.recurring,
            description: create.description,
            created_at: now,
            updated_at: now,
        })
    }

    pub async fn find_by_id(pool: &SqlitePool, id: &str) -> AppResult<Option<Event>> {
        let row = sqlx::query(&format!("SELECT {EVENT_COLUMNS} FROM events WHERE id = ?"))
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(AppError::Database)?;

        row.as_ref().map(map_event).transpose()
    }

    /// List events matching the filter. A date filter also matches events
    /// without a date, since those repeat every day.
    pub async fn list(pool: &SqlitePool, filter: &EventFilter) -> AppResult<Vec<Event>> {
        let event_type = filter.event_type.as_deref().map(str::trim);

        let rows = sqlx::query(&format!(
            r#"
            SELECT {EVENT_COLUMNS}
            FROM events
            WHERE (?1 IS NULL OR event_date IS NULL OR event_date = ?1)
              AND (?2 IS NULL OR lower(event_type) = lower(?2))
              AND (?3 IS NULL OR member_id = ?3)
            ORDER BY rowid
            "#
        ))
        .bind(filter.date)
        .bind(event_type)
        .bind(filter.member_id.as_deref())
        .fetch_all(pool)
        .await
        .map_err(AppError::Database)?;

        rows.iter().map(map_event).collect()
    }

    /// Overwrite the stored fields of an existing event and bump `updated_at`.
    pub async fn update(pool: &SqlitePool, event: &Event) -> AppResult<Event> {
        let now = Utc::now().naive_utc();
        let attendees = encode_attendees(&event.attendees)?;

        let result = sqlx::query(
            r#"
            UPDATE events
            SET title = ?,
                start_time = ?,
                end_time = ?,
                event_date = ?,
                event_type = ?,
                member_id = ?,
                attendees = ?,
                location = ?,
                meeting_link = ?,
                recurring = ?,
                description = ?,
                updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&event.title)
        .bind(&event.start)
        .bind(&event.end)
        .bind(event.date)
        .bind(&event.event_type)
        .bind(&event.member_id)
        .bind(attendees)
        .bind(&event.location)
        .bind(&event.meeting_link)
        .bind(&event.recurring)
        .bind(&event.description)
        .bind(now)
        .bind(&event.id)
        .execute(pool)
        .await
        .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Event {} not found", event.id)));
        }

        Ok(Event {
            updated_at: now,
            ..event.clone()
        })
    }

    pub async fn delete(pool: &SqlitePool, id: &str) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM events WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Event {} not found", id)));
        }

        Ok(())
    }
}

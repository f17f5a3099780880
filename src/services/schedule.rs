use std::sync::Arc;

use chrono::NaiveDate;
use tracing::debug;

use crate::db::models::{Event, EventFilter};
use crate::db::{EventRepository, TeamMemberRepository};
use crate::error::{AppError, AppResult};
use crate::schedule::{self, GridLayout, Timeline, ViewKind};
use crate::AppState;

/// Builds the calendar views from the event store.
pub struct ScheduleService;

impl ScheduleService {
    async fn events_on(state: &Arc<AppState>, date: NaiveDate) -> AppResult<Vec<Event>> {
        EventRepository::list(
            &state.db,
            &EventFilter {
                date: Some(date),
                ..Default::default()
            },
        )
        .await
    }

    pub async fn day(state: &Arc<AppState>, date: NaiveDate) -> AppResult<GridLayout> {
        let events = Self::events_on(state, date).await?;
        debug!(%date, events = events.len(), "Building day grid");
        Ok(schedule::day_grid(date, &events))
    }

    pub async fn week(state: &Arc<AppState>, anchor: NaiveDate) -> AppResult<GridLayout> {
        let events = EventRepository::list(&state.db, &EventFilter::default()).await?;
        debug!(%anchor, events = events.len(), "Building week grid");
        Ok(schedule::week_grid(
            anchor,
            state.config.schedule.week_starts_on,
            &events,
        ))
    }

    pub async fn team(state: &Arc<AppState>, date: NaiveDate) -> AppResult<GridLayout> {
        let members = TeamMemberRepository::list(&state.db).await?;
        let events = Self::events_on(state, date).await?;
        debug!(%date, members = members.len(), events = events.len(), "Building team grid");
        Ok(schedule::team_grid(date, &members, &events))
    }

    pub async fn timeline(state: &Arc<AppState>, date: NaiveDate) -> AppResult<Timeline> {
        let events = Self::events_on(state, date).await?;
        Ok(schedule::timeline(date, &events))
    }

    pub async fn layout(
        state: &Arc<AppState>,
        view: ViewKind,
        date: NaiveDate,
    ) -> AppResult<GridLayout> {
        match view {
            ViewKind::Day => Self::day(state, date).await,
            ViewKind::Week => Self::week(state, date).await,
            ViewKind::Team => Self::team(state, date).await,
        }
    }

    /// Resolve a click at vertical offset `y` in `column` of a view to the
    /// event drawn there, if any.
    pub async fn pick(
        state: &Arc<AppState>,
        view: ViewKind,
        date: NaiveDate,
        column: usize,
        y: u32,
    ) -> AppResult<Option<Event>> {
        let layout = Self::layout(state, view, date).await?;

        if column >= layout.columns.len() {
            return Err(AppError::BadRequest(format!(
                "column {} out of range, view has {} columns",
                column,
                layout.columns.len()
            )));
        }

        Ok(layout.event_at(column, y).cloned())
    }
}

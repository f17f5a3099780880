use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::db::models::Event;
use crate::error::{AppError, AppErrorWithDetails, AppResult};
use crate::schedule::geometry::GRID_HEIGHT_PX;
use crate::schedule::{GridLayout, Timeline, ViewKind};
use crate::services::ScheduleService;
use crate::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/day", get(day_view))
        .route("/week", get(week_view))
        .route("/team", get(team_view))
        .route("/timeline", get(timeline_view))
        .route("/pick", get(pick_event))
}

/// `?date=YYYY-MM-DD`; today (local time) when absent.
#[derive(Debug, Deserialize)]
pub struct DateQuery {
    pub date: Option<NaiveDate>,
}

impl DateQuery {
    fn resolve(&self) -> NaiveDate {
        self.date.unwrap_or_else(|| Local::now().date_naive())
    }
}

#[derive(Debug, Deserialize)]
pub struct PickQuery {
    pub view: ViewKind,
    pub date: Option<NaiveDate>,
    pub column: usize,
    pub y: u32,
}

#[derive(Debug, Serialize)]
pub struct PickResponse {
    pub event: Option<Event>,
}

async fn day_view(
    State(state): State<Arc<AppState>>,
    Query(query): Query<DateQuery>,
) -> AppResult<Json<GridLayout>> {
    Ok(Json(ScheduleService::day(&state, query.resolve()).await?))
}

async fn week_view(
    State(state): State<Arc<AppState>>,
    Query(query): Query<DateQuery>,
) -> AppResult<Json<GridLayout>> {
    Ok(Json(ScheduleService::week(&state, query.resolve()).await?))
}

async fn team_view(
    State(state): State<Arc<AppState>>,
    Query(query): Query<DateQuery>,
) -> AppResult<Json<GridLayout>> {
    Ok(Json(ScheduleService::team(&state, query.resolve()).await?))
}

async fn timeline_view(
    State(state): State<Arc<AppState>>,
    Query(query): Query<DateQuery>,
) -> AppResult<Json<Timeline>> {
    Ok(Json(ScheduleService::timeline(&state, query.resolve()).await?))
}

/// Resolve a click on a grid to the event drawn under it.
async fn pick_event(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PickQuery>,
) -> Result<Json<PickResponse>, AppErrorWithDetails> {
    if query.y >= GRID_HEIGHT_PX {
        return Err(
            AppError::BadRequest(format!("y {} is below the end of the grid", query.y))
                .with_details(serde_json::json!({ "y": query.y, "gridHeight": GRID_HEIGHT_PX })),
        );
    }

    let date = query.date.unwrap_or_else(|| Local::now().date_naive());
    let event = ScheduleService::pick(&state, query.view, date, query.column, query.y).await?;
    Ok(Json(PickResponse { event }))
}

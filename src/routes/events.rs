use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::db::models::{CreateEvent, Event, EventFilter, UpdateEvent};
use crate::error::AppResult;
use crate::services::EventService;
use crate::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_events).post(create_event))
        .route(
            "/:id",
            get(get_event).put(update_event).delete(delete_event),
        )
}

async fn list_events(
    State(state): State<Arc<AppState>>,
    Query(filter): Query<EventFilter>,
) -> AppResult<Json<Vec<Event>>> {
    Ok(Json(EventService::list(&state, &filter).await?))
}

async fn create_event(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateEvent>,
) -> AppResult<(StatusCode, Json<Event>)> {
    let event = EventService::create(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(event)))
}

/// Full event record, as shown in the detail drawer.
async fn get_event(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> AppResult<Json<Event>> {
    Ok(Json(EventService::get(&state, &id).await?))
}

async fn update_event(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateEvent>,
) -> AppResult<Json<Event>> {
    Ok(Json(EventService::update(&state, &id, payload).await?))
}

async fn delete_event(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    EventService::delete(&state, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

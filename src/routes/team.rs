use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use crate::db::models::TeamMember;
use crate::db::TeamMemberRepository;
use crate::error::AppResult;
use crate::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/", get(list_members))
}

async fn list_members(State(state): State<Arc<AppState>>) -> AppResult<Json<Vec<TeamMember>>> {
    Ok(Json(TeamMemberRepository::list(&state.db).await?))
}

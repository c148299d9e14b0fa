//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{Json, extract::State};

use crate::{infrastructure::dto::http::RoomStateDto, ui::state::AppState};

/// Debug endpoint to get current room state
pub async fn debug_room_state(State(state): State<Arc<AppState>>) -> Json<RoomStateDto> {
    let room = state.get_room_state_usecase.execute().await;
    Json(RoomStateDto::from(&room))
}

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

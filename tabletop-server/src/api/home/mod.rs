//! Welcome route

use axum::{Json, Router, routing::get};
use shared::response::MessageResponse;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/home", get(home))
}

/// GET /home
async fn home() -> Json<MessageResponse> {
    Json(MessageResponse::new(
        "Welcome to the restaurant management API!",
    ))
}

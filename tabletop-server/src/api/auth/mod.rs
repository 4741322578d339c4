//! Registration and login
//!
//! Both take `{"email": "...", "password": "..."}` and forward it to the
//! backend service's auth API.

mod handler;

use axum::{Router, routing::post};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(handler::register))
        .route("/login", post(handler::login))
}

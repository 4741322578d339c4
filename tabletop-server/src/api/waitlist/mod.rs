//! Waitlist API (per restaurant)
//!
//! Walk-in parties waiting for a table. The floor UI moves an entry along
//! by patching its `status` ("waiting" → "seated" / "cancelled").

mod handler;

use axum::{Router, routing::get};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().nest("/restaurants/{id}/waitlist", routes())
}

fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route(
            "/{entry_id}",
            get(handler::get_by_id)
                .put(handler::update)
                .patch(handler::update)
                .delete(handler::delete),
        )
}

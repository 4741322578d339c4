//! HTTP API
//!
//! One module per resource, each exposing `router()`:
//!
//! | Module | Routes |
//! |--------|--------|
//! | `home` | `/home` |
//! | `health` | `/health` |
//! | `auth` | `/register`, `/login` |
//! | `restaurants` | `/restaurants`, `/restaurants/{id}` |
//! | `tables` | `/restaurants/{id}/tables[/{table_id}]` |
//! | `reservations` | `/restaurants/{id}/reservations[/{reservation_id}]` |
//! | `waitlist` | `/restaurants/{id}/waitlist[/{entry_id}]` |

pub mod auth;
pub mod health;
pub mod home;
pub mod reservations;
pub mod restaurants;
pub mod tables;
pub mod waitlist;

use axum::Router;

use crate::state::AppState;

/// All API routes, no middleware, no state
pub fn build_router() -> Router<AppState> {
    Router::new()
        .merge(home::router())
        .merge(health::router())
        .merge(auth::router())
        .merge(restaurants::router())
        .merge(tables::router())
        .merge(reservations::router())
        .merge(waitlist::router())
}

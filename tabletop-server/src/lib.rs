//! tabletop-server: restaurant management API
//!
//! Stateless HTTP front for a hosted backend service. Every endpoint maps
//! to exactly one call against the service's REST or auth API:
//!
//! - restaurants, tables, reservations and waitlist entries: CRUD
//! - user registration and password login
//!
//! Nothing is stored locally.

pub mod api;
pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod supabase;
pub mod utils;

pub use config::Config;
pub use routes::build_app;
pub use state::AppState;

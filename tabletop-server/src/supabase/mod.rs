//! Backend service client
//!
//! Thin wrapper over the hosted service's two HTTP surfaces:
//! - `/rest/v1/<table>`: row access with `column=<op>.<value>` filters
//! - `/auth/v1/...`: email/password sign-up and sign-in
//!
//! Every call carries the anon key as both `apikey` header and bearer token.

mod auth;
mod client;
mod error;

pub use auth::AuthClient;
pub use client::{RestQuery, SupabaseClient};
pub use error::SupabaseError;

/// Table names on the backend service
pub mod tables {
    pub const RESTAURANTS: &str = "restaurants";
    pub const TABLES: &str = "tables";
    pub const RESERVATIONS: &str = "reservations";
    pub const WAITLIST: &str = "waitlist";
}

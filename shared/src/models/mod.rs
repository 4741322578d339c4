//! Data models
//!
//! Create/update payloads the HTTP API accepts, plus the auth records.
//! Payload fields also accept the camelCase spelling the web frontend sends.
//!
//! Stored rows are not modelled: the backend service owns the schema
//! (numeric ids, nullable columns, columns added later) and rows are
//! relayed to clients as [`Row`] values.

pub mod auth;
pub mod dining_table;
pub mod reservation;
pub mod restaurant;
pub mod waitlist;

pub use auth::{Credentials, LoginResponse, Session};
pub use dining_table::{DiningTableCreate, DiningTableUpdate};
pub use reservation::{ReservationCreate, ReservationQuery, ReservationUpdate};
pub use restaurant::{RestaurantCreate, RestaurantQuery, RestaurantUpdate};
pub use waitlist::{WaitlistEntryCreate, WaitlistEntryUpdate};

/// One stored row, exactly as the backend service returned it
pub type Row = serde_json::Value;

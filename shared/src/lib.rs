//! Shared types for the Tabletop backend
//!
//! Request payloads and auth records, the unified error type and the
//! response bodies used by the HTTP API.

pub mod error;
pub mod models;
pub mod response;

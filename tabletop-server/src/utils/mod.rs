//! Utilities: logging setup, request extraction, payload checks

pub mod extract;
pub mod logger;
pub mod validation;

pub use extract::JsonBody;

//! Waitlist Model

use serde::{Deserialize, Serialize};

/// Create waitlist entry payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaitlistEntryCreate {
    #[serde(default, alias = "restaurantId")]
    pub restaurant_id: String,
    pub name: String,
    #[serde(
        default,
        alias = "phoneNumber",
        skip_serializing_if = "Option::is_none"
    )]
    pub phone_number: Option<String>,
    #[serde(alias = "partySize")]
    pub party_size: i32,
    #[serde(
        default,
        alias = "partyAhead",
        skip_serializing_if = "Option::is_none"
    )]
    pub party_ahead: Option<i32>,
    #[serde(
        default,
        alias = "estimatedWaitTime",
        skip_serializing_if = "Option::is_none"
    )]
    pub estimated_wait_time: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Update waitlist entry payload (partial)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WaitlistEntryUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(
        default,
        alias = "phoneNumber",
        skip_serializing_if = "Option::is_none"
    )]
    pub phone_number: Option<String>,
    #[serde(
        default,
        alias = "partySize",
        skip_serializing_if = "Option::is_none"
    )]
    pub party_size: Option<i32>,
    #[serde(
        default,
        alias = "partyAhead",
        skip_serializing_if = "Option::is_none"
    )]
    pub party_ahead: Option<i32>,
    #[serde(
        default,
        alias = "estimatedWaitTime",
        skip_serializing_if = "Option::is_none"
    )]
    pub estimated_wait_time: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

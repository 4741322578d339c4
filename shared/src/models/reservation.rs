//! Reservation Model

use serde::{Deserialize, Serialize};

/// Create reservation payload
///
/// No overlap or capacity check is made against existing reservations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationCreate {
    #[serde(default, alias = "restaurantId")]
    pub restaurant_id: String,
    #[serde(
        default,
        alias = "userId",
        skip_serializing_if = "Option::is_none"
    )]
    pub user_id: Option<String>,
    pub date: String,
    pub time: String,
    #[serde(alias = "numberOfGuests")]
    pub guests: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Update reservation payload (partial)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReservationUpdate {
    #[serde(
        default,
        alias = "userId",
        skip_serializing_if = "Option::is_none"
    )]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(
        default,
        alias = "numberOfGuests",
        skip_serializing_if = "Option::is_none"
    )]
    pub guests: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Reservation list filters (`GET .../reservations?date=YYYY-MM-DD`)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReservationQuery {
    pub date: Option<String>,
}

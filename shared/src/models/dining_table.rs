//! Dining Table Model

use serde::{Deserialize, Serialize};

/// Create dining table payload
///
/// `restaurant_id` is always overwritten with the path parameter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiningTableCreate {
    #[serde(default, alias = "restaurantId")]
    pub restaurant_id: String,
    pub number: i32,
    #[serde(alias = "minCapacity")]
    pub min_capacity: i32,
    #[serde(alias = "maxCapacity")]
    pub max_capacity: i32,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<i32>,
}

/// Update dining table payload (partial)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiningTableUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<i32>,
    #[serde(
        default,
        alias = "minCapacity",
        skip_serializing_if = "Option::is_none"
    )]
    pub min_capacity: Option<i32>,
    #[serde(
        default,
        alias = "maxCapacity",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_capacity: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<i32>,
}

//! Restaurant Model

use serde::{Deserialize, Serialize};

/// Create restaurant payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestaurantCreate {
    pub name: String,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(
        default,
        alias = "openingHours",
        skip_serializing_if = "Option::is_none"
    )]
    pub opening_hours: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img: Option<String>,
}

/// Update restaurant payload (partial, absent fields are left untouched)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RestaurantUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(
        default,
        alias = "openingHours",
        skip_serializing_if = "Option::is_none"
    )]
    pub opening_hours: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img: Option<String>,
}

/// Restaurant list filters (`GET /restaurants?city=..&name=..`)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RestaurantQuery {
    /// Exact match on `location`
    pub city: Option<String>,
    /// Case-insensitive substring match on `name`
    pub name: Option<String>,
}

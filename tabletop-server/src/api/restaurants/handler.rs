//! Restaurant API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use shared::error::AppResult;
use shared::models::{RestaurantCreate, RestaurantQuery, RestaurantUpdate, Row};
use shared::response::MessageResponse;

use crate::error::UpstreamResultExt;
use crate::state::AppState;
use crate::supabase::tables::RESTAURANTS;
use crate::utils::JsonBody;
use crate::utils::validation::validate_required_text;

/// GET /restaurants - list, optionally by `?city=` (exact) and `?name=` (substring)
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<RestaurantQuery>,
) -> AppResult<Json<Vec<Row>>> {
    let mut query = state.supabase.from(RESTAURANTS);
    if let Some(city) = params.city.as_deref().filter(|c| !c.is_empty()) {
        query = query.eq("location", city);
    }
    if let Some(name) = params.name.as_deref().filter(|n| !n.is_empty()) {
        query = query.ilike("name", format!("*{name}*"));
    }

    let restaurants = query
        .select::<Row>()
        .await
        .or_upstream("Failed to fetch restaurants")?;
    Ok(Json(restaurants))
}

/// GET /restaurants/{id}
///
/// Relays the matching rows as a list; an unknown id is an empty list.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Vec<Row>>> {
    let restaurants = state
        .supabase
        .from(RESTAURANTS)
        .eq("id", &id)
        .select::<Row>()
        .await
        .or_upstream("Failed to fetch restaurants")?;
    Ok(Json(restaurants))
}

/// POST /restaurants
pub async fn create(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<RestaurantCreate>,
) -> AppResult<(StatusCode, Json<MessageResponse<Vec<Row>>>)> {
    validate_required_text(&payload.name, "name")?;
    validate_required_text(&payload.location, "location")?;

    let rows = state
        .supabase
        .from(RESTAURANTS)
        .insert::<_, Row>(&payload)
        .await
        .or_upstream("Failed to create restaurant")?;

    tracing::info!(name = %payload.name, "Restaurant created");
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::with_rows(
            "Restaurant created successfully",
            rows,
        )),
    ))
}

/// PUT|PATCH /restaurants/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<RestaurantUpdate>,
) -> AppResult<Json<MessageResponse<Vec<Row>>>> {
    let rows = state
        .supabase
        .from(RESTAURANTS)
        .eq("id", &id)
        .update::<_, Row>(&payload)
        .await
        .or_upstream_with_status("Failed to update restaurant")?;

    tracing::info!(restaurant_id = %id, "Restaurant updated");
    Ok(Json(MessageResponse::with_rows(
        "Restaurant updated successfully",
        rows,
    )))
}

/// DELETE /restaurants/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    state
        .supabase
        .from(RESTAURANTS)
        .eq("id", &id)
        .delete()
        .await
        .or_upstream_with_status("Failed to delete restaurant")?;

    tracing::info!(restaurant_id = %id, "Restaurant deleted");
    Ok(Json(MessageResponse::new("Restaurant deleted successfully")))
}

//! Reservation API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use shared::error::AppResult;
use shared::models::{ReservationCreate, ReservationQuery, ReservationUpdate, Row};
use shared::response::MessageResponse;

use crate::error::UpstreamResultExt;
use crate::state::AppState;
use crate::supabase::tables::RESERVATIONS;
use crate::utils::JsonBody;
use crate::utils::validation::{validate_required_count, validate_required_text};

/// GET /restaurants/{id}/reservations - optionally for one `?date=`
pub async fn list(
    State(state): State<AppState>,
    Path(restaurant_id): Path<String>,
    Query(params): Query<ReservationQuery>,
) -> AppResult<Json<Vec<Row>>> {
    let mut query = state
        .supabase
        .from(RESERVATIONS)
        .eq("restaurant_id", &restaurant_id);
    if let Some(date) = params.date.as_deref().filter(|d| !d.is_empty()) {
        query = query.eq("date", date);
    }

    let reservations = query
        .select::<Row>()
        .await
        .or_upstream("Failed to fetch reservations")?;
    Ok(Json(reservations))
}

/// GET /restaurants/{id}/reservations/{reservation_id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path((restaurant_id, reservation_id)): Path<(String, String)>,
) -> AppResult<Json<Vec<Row>>> {
    let reservations = state
        .supabase
        .from(RESERVATIONS)
        .eq("restaurant_id", &restaurant_id)
        .eq("id", &reservation_id)
        .select::<Row>()
        .await
        .or_upstream("Failed to fetch reservation")?;
    Ok(Json(reservations))
}

/// POST /restaurants/{id}/reservations
pub async fn create(
    State(state): State<AppState>,
    Path(restaurant_id): Path<String>,
    JsonBody(mut payload): JsonBody<ReservationCreate>,
) -> AppResult<(StatusCode, Json<MessageResponse<Vec<Row>>>)> {
    validate_required_text(&payload.date, "date")?;
    validate_required_text(&payload.time, "time")?;
    validate_required_count(payload.guests, "guests")?;
    payload.restaurant_id = restaurant_id;

    let rows = state
        .supabase
        .from(RESERVATIONS)
        .insert::<_, Row>(&payload)
        .await
        .or_upstream("Failed to create reservation")?;

    tracing::info!(
        restaurant_id = %payload.restaurant_id,
        date = %payload.date,
        time = %payload.time,
        guests = payload.guests,
        "Reservation created"
    );
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::with_rows(
            "Reservation created successfully",
            rows,
        )),
    ))
}

/// PUT|PATCH /restaurants/{id}/reservations/{reservation_id}
pub async fn update(
    State(state): State<AppState>,
    Path((restaurant_id, reservation_id)): Path<(String, String)>,
    JsonBody(payload): JsonBody<ReservationUpdate>,
) -> AppResult<Json<MessageResponse<Vec<Row>>>> {
    let rows = state
        .supabase
        .from(RESERVATIONS)
        .eq("restaurant_id", &restaurant_id)
        .eq("id", &reservation_id)
        .update::<_, Row>(&payload)
        .await
        .or_upstream("Failed to update reservation")?;

    tracing::info!(%restaurant_id, %reservation_id, "Reservation updated");
    Ok(Json(MessageResponse::with_rows(
        "Reservation updated successfully",
        rows,
    )))
}

/// DELETE /restaurants/{id}/reservations/{reservation_id}
pub async fn delete(
    State(state): State<AppState>,
    Path((restaurant_id, reservation_id)): Path<(String, String)>,
) -> AppResult<Json<MessageResponse>> {
    state
        .supabase
        .from(RESERVATIONS)
        .eq("restaurant_id", &restaurant_id)
        .eq("id", &reservation_id)
        .delete()
        .await
        .or_upstream("Failed to delete reservation")?;

    tracing::info!(%restaurant_id, %reservation_id, "Reservation deleted");
    Ok(Json(MessageResponse::new("Reservation deleted successfully")))
}

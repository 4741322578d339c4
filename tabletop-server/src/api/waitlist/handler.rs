//! Waitlist API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use shared::error::AppResult;
use shared::models::{Row, WaitlistEntryCreate, WaitlistEntryUpdate};
use shared::response::MessageResponse;

use crate::error::UpstreamResultExt;
use crate::state::AppState;
use crate::supabase::tables::WAITLIST;
use crate::utils::JsonBody;
use crate::utils::validation::{validate_required_count, validate_required_text};

/// GET /restaurants/{id}/waitlist
pub async fn list(
    State(state): State<AppState>,
    Path(restaurant_id): Path<String>,
) -> AppResult<Json<Vec<Row>>> {
    let entries = state
        .supabase
        .from(WAITLIST)
        .eq("restaurant_id", &restaurant_id)
        .select::<Row>()
        .await
        .or_upstream("Failed to fetch waitlist")?;
    Ok(Json(entries))
}

/// GET /restaurants/{id}/waitlist/{entry_id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path((restaurant_id, entry_id)): Path<(String, String)>,
) -> AppResult<Json<Vec<Row>>> {
    let entries = state
        .supabase
        .from(WAITLIST)
        .eq("restaurant_id", &restaurant_id)
        .eq("id", &entry_id)
        .select::<Row>()
        .await
        .or_upstream("Failed to fetch waitlist entry")?;
    Ok(Json(entries))
}

/// POST /restaurants/{id}/waitlist
pub async fn create(
    State(state): State<AppState>,
    Path(restaurant_id): Path<String>,
    JsonBody(mut payload): JsonBody<WaitlistEntryCreate>,
) -> AppResult<(StatusCode, Json<MessageResponse<Vec<Row>>>)> {
    validate_required_text(&payload.name, "name")?;
    validate_required_count(payload.party_size, "party_size")?;
    payload.restaurant_id = restaurant_id;

    let rows = state
        .supabase
        .from(WAITLIST)
        .insert::<_, Row>(&payload)
        .await
        .or_upstream("Failed to create waitlist entry")?;

    tracing::info!(
        restaurant_id = %payload.restaurant_id,
        party_size = payload.party_size,
        "Waitlist entry created"
    );
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::with_rows(
            "Waitlist entry created successfully",
            rows,
        )),
    ))
}

/// PUT|PATCH /restaurants/{id}/waitlist/{entry_id}
pub async fn update(
    State(state): State<AppState>,
    Path((restaurant_id, entry_id)): Path<(String, String)>,
    JsonBody(payload): JsonBody<WaitlistEntryUpdate>,
) -> AppResult<Json<MessageResponse<Vec<Row>>>> {
    let rows = state
        .supabase
        .from(WAITLIST)
        .eq("restaurant_id", &restaurant_id)
        .eq("id", &entry_id)
        .update::<_, Row>(&payload)
        .await
        .or_upstream("Failed to update waitlist entry")?;

    tracing::info!(%restaurant_id, %entry_id, status = ?payload.status, "Waitlist entry updated");
    Ok(Json(MessageResponse::with_rows(
        "Waitlist entry updated successfully",
        rows,
    )))
}

/// DELETE /restaurants/{id}/waitlist/{entry_id}
pub async fn delete(
    State(state): State<AppState>,
    Path((restaurant_id, entry_id)): Path<(String, String)>,
) -> AppResult<Json<MessageResponse>> {
    state
        .supabase
        .from(WAITLIST)
        .eq("restaurant_id", &restaurant_id)
        .eq("id", &entry_id)
        .delete()
        .await
        .or_upstream("Failed to delete waitlist entry")?;

    tracing::info!(%restaurant_id, %entry_id, "Waitlist entry deleted");
    Ok(Json(MessageResponse::new("Waitlist entry deleted successfully")))
}

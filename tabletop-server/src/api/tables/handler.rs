//! Dining Table API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use shared::error::AppResult;
use shared::models::{DiningTableCreate, DiningTableUpdate, Row};
use shared::response::MessageResponse;

use crate::error::UpstreamResultExt;
use crate::state::AppState;
use crate::supabase::tables::TABLES;
use crate::utils::JsonBody;
use crate::utils::validation::{validate_required_count, validate_required_text};

/// GET /restaurants/{id}/tables
pub async fn list(
    State(state): State<AppState>,
    Path(restaurant_id): Path<String>,
) -> AppResult<Json<Vec<Row>>> {
    let tables = state
        .supabase
        .from(TABLES)
        .eq("restaurant_id", &restaurant_id)
        .select::<Row>()
        .await
        .or_upstream("Failed to fetch tables")?;
    Ok(Json(tables))
}

/// GET /restaurants/{id}/tables/{table_id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path((restaurant_id, table_id)): Path<(String, String)>,
) -> AppResult<Json<Vec<Row>>> {
    let tables = state
        .supabase
        .from(TABLES)
        .eq("restaurant_id", &restaurant_id)
        .eq("id", &table_id)
        .select::<Row>()
        .await
        .or_upstream("Failed to fetch table")?;
    Ok(Json(tables))
}

/// POST /restaurants/{id}/tables
pub async fn create(
    State(state): State<AppState>,
    Path(restaurant_id): Path<String>,
    JsonBody(mut payload): JsonBody<DiningTableCreate>,
) -> AppResult<(StatusCode, Json<MessageResponse<Vec<Row>>>)> {
    validate_required_count(payload.number, "number")?;
    validate_required_count(payload.min_capacity, "min_capacity")?;
    validate_required_count(payload.max_capacity, "max_capacity")?;
    validate_required_text(&payload.status, "status")?;
    payload.restaurant_id = restaurant_id;

    let rows = state
        .supabase
        .from(TABLES)
        .insert::<_, Row>(&payload)
        .await
        .or_upstream("Failed to create table")?;

    tracing::info!(
        restaurant_id = %payload.restaurant_id,
        number = payload.number,
        "Table created"
    );
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::with_rows("Table created successfully", rows)),
    ))
}

/// PUT|PATCH /restaurants/{id}/tables/{table_id}
pub async fn update(
    State(state): State<AppState>,
    Path((restaurant_id, table_id)): Path<(String, String)>,
    JsonBody(payload): JsonBody<DiningTableUpdate>,
) -> AppResult<Json<MessageResponse<Vec<Row>>>> {
    let rows = state
        .supabase
        .from(TABLES)
        .eq("restaurant_id", &restaurant_id)
        .eq("id", &table_id)
        .update::<_, Row>(&payload)
        .await
        .or_upstream("Failed to update table")?;

    tracing::info!(%restaurant_id, %table_id, "Table updated");
    Ok(Json(MessageResponse::with_rows(
        "Table updated successfully",
        rows,
    )))
}

/// DELETE /restaurants/{id}/tables/{table_id}
pub async fn delete(
    State(state): State<AppState>,
    Path((restaurant_id, table_id)): Path<(String, String)>,
) -> AppResult<Json<MessageResponse>> {
    state
        .supabase
        .from(TABLES)
        .eq("restaurant_id", &restaurant_id)
        .eq("id", &table_id)
        .delete()
        .await
        .or_upstream("Failed to delete table")?;

    tracing::info!(%restaurant_id, %table_id, "Table deleted");
    Ok(Json(MessageResponse::new("Table deleted successfully")))
}

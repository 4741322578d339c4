//! Auth API Handlers

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use shared::error::{AppError, AppResult};
use shared::models::{Credentials, LoginResponse};
use shared::response::MessageResponse;

use crate::error::{signin_error, signup_error};
use crate::state::AppState;

/// Unwrap the credentials body; any decode failure is a plain "Invalid request"
fn credentials(body: Result<Json<Credentials>, JsonRejection>) -> AppResult<Credentials> {
    match body {
        Ok(Json(credentials)) => Ok(credentials),
        Err(rejection) => {
            tracing::debug!(reason = %rejection.body_text(), "Rejected credentials body");
            Err(AppError::invalid_request("Invalid request"))
        }
    }
}

/// POST /register
pub async fn register(
    State(state): State<AppState>,
    body: Result<Json<Credentials>, JsonRejection>,
) -> AppResult<Json<MessageResponse>> {
    let credentials = credentials(body)?;

    state
        .supabase
        .auth()
        .sign_up(&credentials)
        .await
        .map_err(signup_error)?;

    tracing::info!(email = %credentials.email, "User registered");
    Ok(Json(MessageResponse::new("User registered successfully")))
}

/// POST /login
pub async fn login(
    State(state): State<AppState>,
    body: Result<Json<Credentials>, JsonRejection>,
) -> AppResult<Json<LoginResponse>> {
    let credentials = credentials(body)?;

    let session = state
        .supabase
        .auth()
        .sign_in_with_password(&credentials)
        .await
        .map_err(signin_error)?;

    tracing::info!(email = %credentials.email, "User logged in");
    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        session,
    }))
}

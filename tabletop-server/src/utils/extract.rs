//! JSON body extractor with API-shaped rejections

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use shared::error::AppError;

/// `Json<T>` whose rejection renders as `400 {"error": "Invalid input: ..."}`
///
/// Axum's own rejection uses 415/422 and a plain-text body; clients of this
/// API expect one error shape for every bad body.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => {
                tracing::debug!(status = %rejection.status(), "Rejected JSON body");
                Err(AppError::validation(format!(
                    "Invalid input: {}",
                    rejection.body_text()
                )))
            }
        }
    }
}

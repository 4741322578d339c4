//! Application assembly: API routes plus the HTTP middleware stack

use axum::Router;
use axum::middleware as axum_middleware;
use axum::response::IntoResponse;
use http::{HeaderName, HeaderValue, Uri};
use shared::error::AppError;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::api;
use crate::middleware;
use crate::state::AppState;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// UUID v4 request id generator
#[derive(Clone, Copy, Default)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Unknown routes answer in the API's error shape
async fn fallback(uri: Uri) -> impl IntoResponse {
    AppError::not_found(format!("Route {}", uri.path()))
}

/// Build the fully configured application: routes, middleware and state
///
/// Used by the HTTP server and by the integration tests (via `oneshot`).
pub fn build_app(state: AppState) -> Router {
    api::build_router()
        .fallback(fallback)
        // CORS - the browser frontend is served from another origin
        .layer(CorsLayer::permissive())
        // Request logging
        .layer(axum_middleware::from_fn(middleware::logging_middleware))
        // Trace - Request tracing (logs at INFO level)
        .layer(TraceLayer::new_for_http())
        // Propagate request ID to response
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            REQUEST_ID_HEADER,
        )))
        // Request ID - outermost, so every inner layer sees it
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static(REQUEST_ID_HEADER),
            XRequestId,
        ))
        .with_state(state)
}

pub mod health;

use axum::extract::DefaultBodyLimit;
use axum::routing::post;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /upload                                          annotate class photo (POST, multipart)
/// ```
pub fn api_routes(max_upload_bytes: usize) -> Router<AppState> {
    Router::new().route(
        "/upload",
        post(handlers::upload::annotate_photo).layer(DefaultBodyLimit::max(max_upload_bytes)),
    )
}

//! Route definitions for the `/image` resource.

use axum::extract::DefaultBodyLimit;
use axum::routing::post;
use axum::Router;

use crate::handlers::image;
use crate::state::AppState;

/// Routes mounted at `/image`.
///
/// ```text
/// POST /upload  -> upload (multipart, body capped at `max_upload_bytes`)
/// ```
pub fn router(max_upload_bytes: usize) -> Router<AppState> {
    Router::new()
        .route("/upload", post(image::upload))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
}

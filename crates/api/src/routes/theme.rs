//! Route definitions for the `/theme` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::theme;
use crate::state::AppState;

/// Routes mounted at `/theme`.
///
/// ```text
/// POST /  -> classify_palette
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(theme::classify_palette))
}

//! Route definitions for the `/outfits` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::outfits;
use crate::state::AppState;

/// Routes mounted at `/outfits`.
///
/// ```text
/// POST /save    -> save_outfit
/// GET  /recent  -> recent_outfits
/// GET  /search  -> search_outfits
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/save", post(outfits::save_outfit))
        .route("/recent", get(outfits::recent_outfits))
        .route("/search", get(outfits::search_outfits))
}

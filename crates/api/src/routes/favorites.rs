//! Route definitions for the `/favorites` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::favorites;
use crate::state::AppState;

/// Routes mounted at `/favorites`. Both require a bearer token.
///
/// ```text
/// GET  /  -> list_favorites
/// POST /  -> add_favorite
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(favorites::list_favorites).post(favorites::add_favorite),
    )
}

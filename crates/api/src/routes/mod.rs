pub mod auth;
pub mod favorites;
pub mod health;
pub mod image;
pub mod outfits;
pub mod theme;

use axum::Router;

use crate::config::ServerConfig;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /image/upload                   palette extraction (multipart)
/// /theme                          classify a palette
///
/// /outfits/save                   persist an outfit
/// /outfits/recent                 newest outfits
/// /outfits/search                 filter, sort, paginate
///
/// /auth/register                  create an account
/// /auth/login                     issue a bearer token
///
/// /favorites                      list, add (requires auth)
/// ```
pub fn api_routes(config: &ServerConfig) -> Router<AppState> {
    Router::new()
        .nest("/image", image::router(config.max_upload_bytes))
        .nest("/theme", theme::router())
        .nest("/outfits", outfits::router())
        .nest("/auth", auth::router())
        .nest("/favorites", favorites::router())
}

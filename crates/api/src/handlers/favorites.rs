//! Handlers for the `/favorites` resource. Every route requires a bearer
//! token; favorites are keyed by the token subject.

use axum::extract::State;
use axum::Json;
use blackstyles_core::error::CoreError;
use blackstyles_core::types::DbId;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::json::AppJson;
use crate::response::FavoritesResponse;
use crate::state::AppState;

/// Request body for `POST /favorites`.
#[derive(Debug, Deserialize)]
pub struct AddFavoriteRequest {
    #[serde(default)]
    pub outfit_id: Option<DbId>,
}

/// GET /api/favorites
pub async fn list_favorites(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<FavoritesResponse>> {
    let favorites = state.storage.favorites.get_favorites(&auth.user_id).await;
    Ok(Json(FavoritesResponse { favorites }))
}

/// POST /api/favorites
///
/// Add an existing outfit to the caller's favorites. Adding one twice is a
/// no-op.
pub async fn add_favorite(
    auth: AuthUser,
    State(state): State<AppState>,
    AppJson(input): AppJson<AddFavoriteRequest>,
) -> AppResult<Json<FavoritesResponse>> {
    let outfit_id = input
        .outfit_id
        .ok_or_else(|| AppError::BadRequest("outfit_id is required".into()))?;

    if state.storage.outfits.find(outfit_id).await.is_none() {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Outfit",
            id: outfit_id,
        }));
    }

    let favorites = state
        .storage
        .favorites
        .add_favorite(&auth.user_id, outfit_id)
        .await?;

    tracing::info!(outfit_id, user_id = %auth.user_id, count = favorites.len(), "Favorite added");

    Ok(Json(FavoritesResponse { favorites }))
}

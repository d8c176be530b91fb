//! Handlers for the `/outfits` resource (save, recent, search).

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use blackstyles_core::outfit::{Outfit, SaveOutfitRequest};
use blackstyles_core::query::{
    clamp_limit, clamp_page, parse_tags, run_query, OutfitQuery, SortKey, DEFAULT_RECENT_LIMIT,
    DEFAULT_SEARCH_LIMIT, MAX_LIMIT,
};
use serde::Serialize;

use crate::error::AppResult;
use crate::middleware::json::AppJson;
use crate::query::{RecentParams, SearchParams};
use crate::response::OutfitListResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// Response for `POST /outfits/save`.
#[derive(Debug, Serialize)]
pub struct SavedOutfitResponse {
    pub message: &'static str,
    pub entry: Outfit,
}

/// One page of search results plus the numbers needed to page further.
#[derive(Debug, Serialize)]
pub struct OutfitPageResponse {
    pub outfits: Vec<Outfit>,
    pub page: usize,
    pub limit: usize,
    pub total: usize,
    pub total_pages: usize,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/outfits/save
///
/// Validate and persist an outfit at the head of the collection.
pub async fn save_outfit(
    State(state): State<AppState>,
    AppJson(input): AppJson<SaveOutfitRequest>,
) -> AppResult<(StatusCode, Json<SavedOutfitResponse>)> {
    let new_outfit = input.into_new_outfit()?;
    let entry = state.storage.outfits.append(new_outfit).await?;

    tracing::info!(
        outfit_id = entry.id,
        theme = entry.theme.map(|t| t.as_str()),
        tags = entry.tags.len(),
        "Outfit saved",
    );

    Ok((
        StatusCode::CREATED,
        Json(SavedOutfitResponse {
            message: "Outfit saved",
            entry,
        }),
    ))
}

/// GET /api/outfits/recent?limit=
///
/// The `limit` newest outfits (default 5).
pub async fn recent_outfits(
    State(state): State<AppState>,
    Query(params): Query<RecentParams>,
) -> AppResult<Json<OutfitListResponse>> {
    let limit = clamp_limit(params.limit, DEFAULT_RECENT_LIMIT, MAX_LIMIT);
    let outfits = state.storage.outfits.page(1, limit).await;

    Ok(Json(OutfitListResponse { outfits }))
}

/// GET /api/outfits/search?tags=&theme=&sort=&page=&limit=
///
/// Filter by tags (all must match) and theme, optionally sort, then return
/// one page.
pub async fn search_outfits(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<OutfitPageResponse>> {
    let query = OutfitQuery {
        tags: params.tags.as_deref().map(parse_tags).unwrap_or_default(),
        theme: params
            .theme
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty()),
        sort: params.sort.as_deref().and_then(SortKey::parse),
        page: clamp_page(params.page),
        limit: clamp_limit(params.limit, DEFAULT_SEARCH_LIMIT, MAX_LIMIT),
    };

    let all = state.storage.outfits.all().await;
    let result = run_query(all, &query);

    tracing::debug!(
        tags = ?query.tags,
        theme = ?query.theme,
        total = result.total,
        page = query.page,
        "Outfit search",
    );

    Ok(Json(OutfitPageResponse {
        outfits: result.items,
        page: query.page,
        limit: query.limit,
        total: result.total,
        total_pages: result.total_pages,
    }))
}

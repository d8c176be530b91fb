//! Query-string parameter types for the outfit listing endpoints.
//!
//! Numeric values stay signed here so that negative or zero input can be
//! clamped instead of rejected; see `blackstyles_core::query::clamp_limit`.

use serde::Deserialize;

/// `?limit=` for `GET /api/outfits/recent`.
#[derive(Debug, Default, Deserialize)]
pub struct RecentParams {
    pub limit: Option<i64>,
}

/// `?tags=a,b&theme=&sort=&page=&limit=` for `GET /api/outfits/search`.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    /// Comma-separated; every tag must match.
    pub tags: Option<String>,
    pub theme: Option<String>,
    /// `newest`, `oldest` or `alphabetical`; anything else keeps store order.
    pub sort: Option<String>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

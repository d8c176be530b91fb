//! Response bodies shared by more than one handler module.
//!
//! Endpoint-specific payloads live next to their handlers.

use blackstyles_core::outfit::Outfit;
use blackstyles_core::types::DbId;
use serde::Serialize;

/// `{ "message": ... }` acknowledgement.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// `{ "outfits": [...] }` listing, newest first unless re-sorted.
#[derive(Debug, Serialize)]
pub struct OutfitListResponse {
    pub outfits: Vec<Outfit>,
}

/// `{ "favorites": [...] }` for the authenticated user.
#[derive(Debug, Serialize)]
pub struct FavoritesResponse {
    pub favorites: Vec<DbId>,
}

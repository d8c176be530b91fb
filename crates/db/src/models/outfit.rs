//! Row mapping for the `outfits` table.

use blackstyles_core::outfit::Outfit;
use blackstyles_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `outfits` table.
///
/// `theme` is stored as text; values that no longer parse are read back
/// as `None` rather than failing the whole listing.
#[derive(Debug, Clone, FromRow)]
pub struct OutfitRow {
    pub id: DbId,
    pub created_at: Timestamp,
    pub image_url: String,
    pub colours: Vec<String>,
    pub theme: Option<String>,
    pub caption: String,
    pub tags: Vec<String>,
}

impl From<OutfitRow> for Outfit {
    fn from(row: OutfitRow) -> Self {
        Outfit {
            id: row.id,
            timestamp: row.created_at,
            image_url: row.image_url,
            colours: row.colours,
            theme: row.theme.and_then(|t| t.parse().ok()),
            caption: row.caption,
            tags: row.tags,
        }
    }
}

//! Repository for the `outfits` table.

use blackstyles_core::outfit::{NewOutfit, Outfit};
use blackstyles_core::types::DbId;
use sqlx::PgPool;

use crate::models::outfit::OutfitRow;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, created_at, image_url, colours, theme, caption, tags";

/// Newest-first ordering; `id` breaks ties between equal timestamps.
const NEWEST_FIRST: &str = "ORDER BY created_at DESC, id DESC";

/// Provides data access for outfits. There is no update or delete.
pub struct OutfitRepo;

impl OutfitRepo {
    /// Insert an outfit, returning the stored row.
    ///
    /// `created_at` falls back to `NOW()` when the caller did not set a
    /// timestamp.
    pub async fn create(pool: &PgPool, input: &NewOutfit) -> Result<Outfit, sqlx::Error> {
        let query = format!(
            "INSERT INTO outfits (created_at, image_url, colours, theme, caption, tags)
             VALUES (COALESCE($1, NOW()), $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, OutfitRow>(&query)
            .bind(input.timestamp)
            .bind(&input.image_url)
            .bind(&input.colours)
            .bind(input.theme.map(|t| t.as_str()))
            .bind(&input.caption)
            .bind(&input.tags)
            .fetch_one(pool)
            .await?;
        Ok(row.into())
    }

    /// Find an outfit by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Outfit>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM outfits WHERE id = $1");
        let row = sqlx::query_as::<_, OutfitRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(Outfit::from))
    }

    /// List every outfit, newest first.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Outfit>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM outfits {NEWEST_FIRST}");
        let rows = sqlx::query_as::<_, OutfitRow>(&query)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(Outfit::from).collect())
    }

    /// List one page of outfits, newest first.
    pub async fn list_page(
        pool: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Outfit>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM outfits {NEWEST_FIRST} LIMIT $1 OFFSET $2");
        let rows = sqlx::query_as::<_, OutfitRow>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(Outfit::from).collect())
    }
}

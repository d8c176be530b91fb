//! Repository for the `favorites` table.

use blackstyles_core::types::DbId;
use sqlx::PgPool;

/// Provides data access for per-user favorites.
pub struct FavoriteRepo;

impl FavoriteRepo {
    /// Add an outfit to a user's favorites.
    ///
    /// Uses `ON CONFLICT DO NOTHING` on the `(user_id, outfit_id)` key, so
    /// concurrent and repeated adds are both safe.
    pub async fn add(pool: &PgPool, user_id: &str, outfit_id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO favorites (user_id, outfit_id) VALUES ($1, $2) \
             ON CONFLICT (user_id, outfit_id) DO NOTHING",
        )
        .bind(user_id)
        .bind(outfit_id)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// List a user's favorite outfit ids in the order they were added.
    pub async fn list_for_user(pool: &PgPool, user_id: &str) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "SELECT outfit_id FROM favorites WHERE user_id = $1 ORDER BY created_at, outfit_id",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }
}

//! PostgreSQL backend, delegating to the repositories.

use async_trait::async_trait;
use blackstyles_core::outfit::{NewOutfit, Outfit};
use blackstyles_core::types::DbId;

use crate::error::StoreError;
use crate::models::user::{CreateUser, User};
use crate::repositories::{FavoriteRepo, OutfitRepo, UserRepo};
use crate::store::{FavoritesStore, OutfitStore, UserStore};
use crate::DbPool;

/// Stores every collection in PostgreSQL.
#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OutfitStore for PgStore {
    async fn append(&self, outfit: NewOutfit) -> Result<Outfit, StoreError> {
        Ok(OutfitRepo::create(&self.pool, &outfit).await?)
    }

    async fn all(&self) -> Vec<Outfit> {
        OutfitRepo::list_all(&self.pool).await.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Failed to list outfits, returning empty list");
            Vec::new()
        })
    }

    async fn page(&self, page: usize, page_size: usize) -> Vec<Outfit> {
        let limit = i64::try_from(page_size.max(1)).unwrap_or(i64::MAX);
        let offset = i64::try_from(page.max(1) - 1)
            .ok()
            .and_then(|p| p.checked_mul(limit));
        let Some(offset) = offset else {
            return Vec::new();
        };

        OutfitRepo::list_page(&self.pool, limit, offset)
            .await
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, page, page_size, "Failed to page outfits, returning empty page");
                Vec::new()
            })
    }

    async fn find(&self, id: DbId) -> Option<Outfit> {
        OutfitRepo::find_by_id(&self.pool, id)
            .await
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, outfit_id = id, "Failed to look up outfit");
                None
            })
    }

    async fn is_healthy(&self) -> bool {
        crate::health_check(&self.pool).await.is_ok()
    }
}

#[async_trait]
impl FavoritesStore for PgStore {
    async fn add_favorite(&self, user_id: &str, outfit_id: DbId) -> Result<Vec<DbId>, StoreError> {
        FavoriteRepo::add(&self.pool, user_id, outfit_id).await?;
        Ok(FavoriteRepo::list_for_user(&self.pool, user_id).await?)
    }

    async fn get_favorites(&self, user_id: &str) -> Vec<DbId> {
        FavoriteRepo::list_for_user(&self.pool, user_id)
            .await
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, user_id, "Failed to read favorites, returning empty set");
                Vec::new()
            })
    }
}

#[async_trait]
impl UserStore for PgStore {
    async fn create_user(&self, input: CreateUser) -> Result<User, StoreError> {
        Ok(UserRepo::create(&self.pool, &input).await?)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        Ok(UserRepo::find_by_email(&self.pool, email).await?)
    }
}

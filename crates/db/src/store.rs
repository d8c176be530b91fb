//! Storage traits shared by every backend.
//!
//! Reads are best-effort: a backend that cannot read its medium logs a
//! warning and returns an empty result. Writes that cannot complete return
//! a [`StoreError`] so the caller can report them.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use blackstyles_core::outfit::{NewOutfit, Outfit};
use blackstyles_core::types::DbId;

use crate::backends::json_file::JsonFileStore;
use crate::backends::postgres::PgStore;
use crate::error::StoreError;
use crate::models::user::{CreateUser, User};
use crate::DbPool;

/// Outfit collection, kept newest-first.
#[async_trait]
pub trait OutfitStore: Send + Sync {
    /// Insert at the head of the collection, assigning an id and (if the
    /// caller left it unset) a timestamp.
    async fn append(&self, outfit: NewOutfit) -> Result<Outfit, StoreError>;

    /// Every outfit, newest first.
    async fn all(&self) -> Vec<Outfit>;

    /// Page `page` (1-based) of `page_size` outfits, newest first. Pages past
    /// the end are empty.
    async fn page(&self, page: usize, page_size: usize) -> Vec<Outfit>;

    async fn find(&self, id: DbId) -> Option<Outfit>;

    /// Whether the backing medium is currently readable.
    async fn is_healthy(&self) -> bool;
}

/// Per-user favorite outfit ids.
#[async_trait]
pub trait FavoritesStore: Send + Sync {
    /// Set-add `outfit_id` to the user's favorites, creating the record on
    /// first use. Returns the user's favorites after the add.
    async fn add_favorite(&self, user_id: &str, outfit_id: DbId) -> Result<Vec<DbId>, StoreError>;

    /// The user's favorites; empty when the user has none.
    async fn get_favorites(&self, user_id: &str) -> Vec<DbId>;
}

/// User accounts.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Create a user. A duplicate email is a [`StoreError::Conflict`] (or a
    /// unique-constraint [`StoreError::Database`] error on PostgreSQL).
    async fn create_user(&self, input: CreateUser) -> Result<User, StoreError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;
}

/// The set of stores a running server needs, behind trait objects.
#[derive(Clone)]
pub struct Storage {
    pub outfits: Arc<dyn OutfitStore>,
    pub favorites: Arc<dyn FavoritesStore>,
    pub users: Arc<dyn UserStore>,
}

impl Storage {
    /// All collections backed by PostgreSQL.
    pub fn postgres(pool: DbPool) -> Self {
        Self::from_backend(Arc::new(PgStore::new(pool)))
    }

    /// All collections backed by JSON files under `dir`.
    pub async fn json_file(dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        let store = JsonFileStore::open(dir).await?;
        Ok(Self::from_backend(Arc::new(store)))
    }

    fn from_backend<B>(backend: Arc<B>) -> Self
    where
        B: OutfitStore + FavoritesStore + UserStore + 'static,
    {
        Self {
            outfits: backend.clone(),
            favorites: backend.clone(),
            users: backend,
        }
    }
}

//! Flat-file backend: one JSON array per collection in a data directory.
//!
//! Every access to a file goes through that file's mutex, so concurrent
//! appends never interleave their read and write phases. Writes go to a
//! sibling `*.tmp` file which is then renamed over the target; readers see
//! either the old array or the new one, never a partial write.
//!
//! This only serialises writers inside one process. Two server processes
//! pointed at the same directory can still lose updates.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use blackstyles_core::outfit::{NewOutfit, Outfit};
use blackstyles_core::query::paginate;
use blackstyles_core::types::DbId;
use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::Mutex;

use crate::error::StoreError;
use crate::models::favorite::FavoritesRecord;
use crate::models::user::{CreateUser, User};
use crate::store::{FavoritesStore, OutfitStore, UserStore};

pub const OUTFITS_FILE: &str = "outfits.json";
pub const FAVORITES_FILE: &str = "favorites.json";
pub const USERS_FILE: &str = "users.json";

// ---------------------------------------------------------------------------
// Generic collection file
// ---------------------------------------------------------------------------

/// A JSON array on disk guarded by an in-process lock.
struct JsonCollection<T> {
    path: PathBuf,
    lock: Mutex<()>,
    _items: std::marker::PhantomData<fn() -> T>,
}

impl<T> JsonCollection<T>
where
    T: Serialize + DeserializeOwned + Send,
{
    /// Open the file at `path`, initialising it to `[]` if absent.
    async fn open(path: PathBuf) -> Result<Self, StoreError> {
        if !tokio::fs::try_exists(&path).await? {
            tokio::fs::write(&path, b"[]").await?;
            tracing::info!(path = %path.display(), "Initialised empty collection file");
        }

        Ok(Self {
            path,
            lock: Mutex::new(()),
            _items: std::marker::PhantomData,
        })
    }

    fn tmp_path(&self) -> PathBuf {
        self.path.with_extension("json.tmp")
    }

    /// Read and parse the file. Callers must hold the lock.
    async fn load(&self) -> Result<Vec<T>, StoreError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// Replace the whole file. Callers must hold the lock.
    async fn store(&self, items: &[T]) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec_pretty(items)?;
        let tmp = self.tmp_path();
        tokio::fs::write(&tmp, bytes).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }

    async fn try_read(&self) -> Result<Vec<T>, StoreError> {
        let _guard = self.lock.lock().await;
        self.load().await
    }

    /// Best-effort read: an unreadable or corrupt file reads as empty.
    async fn read(&self) -> Vec<T> {
        self.try_read().await.unwrap_or_else(|e| {
            tracing::warn!(
                path = %self.path.display(),
                error = %e,
                "Collection file unreadable, treating as empty",
            );
            Vec::new()
        })
    }

    /// Locked read-modify-write. A file that cannot be parsed is an error
    /// here, so a corrupt file is never overwritten.
    async fn update<R, F>(&self, mutate: F) -> Result<R, StoreError>
    where
        F: FnOnce(&mut Vec<T>) -> Result<R, StoreError> + Send,
        R: Send,
    {
        let _guard = self.lock.lock().await;
        let mut items = self.load().await?;
        let result = mutate(&mut items)?;
        self.store(&items).await?;
        Ok(result)
    }
}

// ---------------------------------------------------------------------------
// Store
// ---------------------------------------------------------------------------

/// Stores every collection as a JSON file under one directory.
pub struct JsonFileStore {
    outfits: JsonCollection<Outfit>,
    favorites: JsonCollection<FavoritesRecord>,
    users: JsonCollection<User>,
}

impl JsonFileStore {
    /// Open (creating if necessary) the data directory and its files.
    pub async fn open(dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        let dir = dir.as_ref();
        tokio::fs::create_dir_all(dir).await?;

        Ok(Self {
            outfits: JsonCollection::open(dir.join(OUTFITS_FILE)).await?,
            favorites: JsonCollection::open(dir.join(FAVORITES_FILE)).await?,
            users: JsonCollection::open(dir.join(USERS_FILE)).await?,
        })
    }
}

#[async_trait]
impl OutfitStore for JsonFileStore {
    async fn append(&self, outfit: NewOutfit) -> Result<Outfit, StoreError> {
        self.outfits
            .update(move |outfits| {
                // Ids live in the records, so they survive newer inserts.
                let id = outfits.iter().map(|o| o.id).max().unwrap_or(0) + 1;
                let stored = outfit.into_outfit(id, Utc::now());
                outfits.insert(0, stored.clone());
                Ok(stored)
            })
            .await
    }

    async fn all(&self) -> Vec<Outfit> {
        self.outfits.read().await
    }

    async fn page(&self, page: usize, page_size: usize) -> Vec<Outfit> {
        paginate(self.outfits.read().await, page, page_size).items
    }

    async fn find(&self, id: DbId) -> Option<Outfit> {
        self.outfits.read().await.into_iter().find(|o| o.id == id)
    }

    async fn is_healthy(&self) -> bool {
        self.outfits.try_read().await.is_ok()
    }
}

#[async_trait]
impl FavoritesStore for JsonFileStore {
    async fn add_favorite(&self, user_id: &str, outfit_id: DbId) -> Result<Vec<DbId>, StoreError> {
        let user_id = user_id.to_string();
        self.favorites
            .update(move |records| {
                let index = match records.iter().position(|r| r.user_id == user_id) {
                    Some(i) => i,
                    None => {
                        records.push(FavoritesRecord::new(user_id));
                        records.len() - 1
                    }
                };
                records[index].add(outfit_id);
                Ok(records[index].outfit_ids.clone())
            })
            .await
    }

    async fn get_favorites(&self, user_id: &str) -> Vec<DbId> {
        self.favorites
            .read()
            .await
            .into_iter()
            .find(|r| r.user_id == user_id)
            .map(|r| r.outfit_ids)
            .unwrap_or_default()
    }
}

#[async_trait]
impl UserStore for JsonFileStore {
    async fn create_user(&self, input: CreateUser) -> Result<User, StoreError> {
        self.users
            .update(move |users| {
                if users.iter().any(|u| u.email == input.email) {
                    return Err(StoreError::Conflict(format!(
                        "User with email {} already exists",
                        input.email
                    )));
                }
                let user = User {
                    id: users.iter().map(|u| u.id).max().unwrap_or(0) + 1,
                    email: input.email,
                    password_hash: input.password_hash,
                    created_at: Utc::now(),
                };
                users.push(user.clone());
                Ok(user)
            })
            .await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        Ok(self
            .users
            .try_read()
            .await?
            .into_iter()
            .find(|u| u.email == email))
    }
}

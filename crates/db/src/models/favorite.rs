//! Per-user favorites record (flat-file layout).

use blackstyles_core::types::DbId;
use serde::{Deserialize, Serialize};

/// One user's favorite outfit ids, in the order they were first added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoritesRecord {
    pub user_id: String,
    #[serde(default)]
    pub outfit_ids: Vec<DbId>,
}

impl FavoritesRecord {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            outfit_ids: Vec::new(),
        }
    }

    /// Set-add: returns `false` when the id was already present.
    pub fn add(&mut self, outfit_id: DbId) -> bool {
        if self.outfit_ids.contains(&outfit_id) {
            return false;
        }
        self.outfit_ids.push(outfit_id);
        true
    }
}

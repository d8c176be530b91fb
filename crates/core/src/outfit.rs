//! Outfit records and the save-payload schema.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::error::CoreError;
use crate::theme::Theme;
use crate::types::{DbId, Timestamp};

/// A persisted outfit.
///
/// Created once, never updated. `timestamp` is assigned by the store at
/// creation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outfit {
    pub id: DbId,
    pub timestamp: Timestamp,
    pub image_url: String,
    pub colours: Vec<String>,
    pub theme: Option<Theme>,
    #[serde(default)]
    pub caption: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Outfit {
    /// Whether the outfit carries `tag`, ignoring case.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.to_lowercase() == tag.to_lowercase())
    }
}

/// A validated outfit that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOutfit {
    /// Creation instant; the store fills it in when `None`.
    pub timestamp: Option<Timestamp>,
    pub image_url: String,
    pub colours: Vec<String>,
    pub theme: Option<Theme>,
    pub caption: String,
    pub tags: Vec<String>,
}

impl NewOutfit {
    /// Minimal constructor; optional fields take their defaults.
    pub fn new(image_url: impl Into<String>, colours: Vec<String>) -> Self {
        Self {
            timestamp: None,
            image_url: image_url.into(),
            colours,
            theme: None,
            caption: String::new(),
            tags: Vec::new(),
        }
    }

    /// Attach the id and creation instant assigned by a store.
    pub fn into_outfit(self, id: DbId, timestamp: Timestamp) -> Outfit {
        Outfit {
            id,
            timestamp: self.timestamp.unwrap_or(timestamp),
            image_url: self.image_url,
            colours: self.colours,
            theme: self.theme,
            caption: self.caption,
            tags: self.tags,
        }
    }
}

/// Request body for saving an outfit.
///
/// Required fields default to empty so that a missing field surfaces as a
/// validation error rather than a deserialization failure.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SaveOutfitRequest {
    #[serde(default)]
    #[validate(custom(function = "validate_not_blank"))]
    pub image_url: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "must contain at least one colour"))]
    pub colours: Vec<String>,
    #[serde(default)]
    pub theme: Option<String>,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

impl SaveOutfitRequest {
    /// Validate the payload and convert it into a [`NewOutfit`].
    ///
    /// An empty or absent theme is stored as `None`; an unrecognised theme
    /// name is rejected.
    pub fn into_new_outfit(self) -> Result<NewOutfit, CoreError> {
        self.validate()?;

        let theme = match self.theme.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(name) => Some(name.parse::<Theme>().map_err(CoreError::Validation)?),
        };

        Ok(NewOutfit {
            timestamp: None,
            image_url: self.image_url.trim().to_string(),
            colours: self.colours,
            theme,
            caption: self.caption.unwrap_or_default(),
            tags: self.tags.unwrap_or_default(),
        })
    }
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("must not be empty".into());
        return Err(err);
    }
    Ok(())
}

//! Handler for the `/theme` resource.

use axum::Json;
use blackstyles_core::theme::{classify, Theme};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::middleware::json::AppJson;

/// Request body for `POST /theme`.
///
/// Entries stay untyped so a stray number or `null` is skipped like any
/// other unparseable color instead of failing the whole body.
#[derive(Debug, Deserialize)]
pub struct ThemeRequest {
    #[serde(default)]
    pub palette: Option<Vec<Value>>,
}

#[derive(Debug, Serialize)]
pub struct ThemeResponse {
    pub theme: Theme,
}

/// POST /api/theme
///
/// Classify a palette into a seasonal theme. Unparseable colors are
/// ignored; a palette with none left is `Neutral`.
pub async fn classify_palette(
    AppJson(input): AppJson<ThemeRequest>,
) -> AppResult<Json<ThemeResponse>> {
    let palette = input
        .palette
        .ok_or_else(|| AppError::BadRequest("palette is required".into()))?;

    let colors: Vec<&str> = palette.iter().filter_map(Value::as_str).collect();
    let theme = classify(&colors);
    tracing::debug!(
        entries = palette.len(),
        colors = colors.len(),
        theme = theme.as_str(),
        "Palette classified",
    );

    Ok(Json(ThemeResponse { theme }))
}

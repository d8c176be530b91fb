//! Handler for palette extraction from an uploaded photo.

use axum::extract::Multipart;
use axum::Json;
use blackstyles_core::palette::{extract_palette, is_allowed_filename, DEFAULT_CLUSTERS};
use serde::Serialize;

use crate::error::{AppError, AppResult};

/// Multipart field carrying the image.
const IMAGE_FIELD: &str = "image";

#[derive(Debug, Serialize)]
pub struct PaletteResponse {
    pub palette: Vec<String>,
}

/// POST /api/image/upload
///
/// Accept a multipart `image` field (jpg, jpeg, png or webp) and return its
/// dominant colors, largest cluster first. The image is not stored.
pub async fn upload(mut multipart: Multipart) -> AppResult<Json<PaletteResponse>> {
    let mut upload: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        upload = Some((filename, bytes.to_vec()));
        break;
    }

    let (filename, bytes) =
        upload.ok_or_else(|| AppError::BadRequest("No image file provided".into()))?;

    if filename.is_empty() || bytes.is_empty() {
        return Err(AppError::BadRequest("No image file provided".into()));
    }
    if !is_allowed_filename(&filename) {
        return Err(AppError::BadRequest(
            "Unsupported file type; expected jpg, jpeg, png or webp".into(),
        ));
    }

    let size = bytes.len();
    // Decoding and clustering are CPU-bound.
    let palette = tokio::task::spawn_blocking(move || extract_palette(&bytes, DEFAULT_CLUSTERS))
        .await
        .map_err(|e| AppError::InternalError(format!("Palette task failed: {e}")))??;

    tracing::info!(filename = %filename, size, colors = palette.len(), "Palette extracted");

    Ok(Json(PaletteResponse { palette }))
}

//! JSON body extractor whose rejections use the API error shape.

use axum::extract::FromRequest;

use crate::error::AppError;

/// Drop-in for [`axum::Json`] on request bodies.
///
/// A missing content type, malformed JSON or a body that does not fit the
/// target type is reported as a `BAD_REQUEST` `{error, code}` body instead
/// of axum's plain-text rejection.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

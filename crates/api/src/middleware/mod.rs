//! Request extractors.
//!
//! - [`auth::AuthUser`] -- Extracts the authenticated user from a JWT Bearer token.
//! - [`json::AppJson`] -- JSON request bodies with [`AppError`](crate::error::AppError) rejections.

pub mod auth;
pub mod json;

//! Request handlers.
//!
//! Each submodule provides the async handler functions for one resource.
//! Handlers delegate domain logic to `blackstyles_core`, persistence to the
//! [`Storage`](blackstyles_db::Storage) trait objects, and map errors via
//! [`AppError`](crate::error::AppError).

pub mod auth;
pub mod favorites;
pub mod image;
pub mod outfits;
pub mod theme;

//! Storage-side model structs and DTOs.
//!
//! The outfit entity itself lives in `blackstyles_core::outfit`; this
//! module holds the row shapes and records that only the storage layer
//! needs.

pub mod favorite;
pub mod outfit;
pub mod user;

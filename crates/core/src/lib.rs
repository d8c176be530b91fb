//! Domain logic for the outfit catalogue.
//!
//! Everything in this crate is free of I/O so it can be shared by the
//! storage layer, the HTTP server and tests alike.

pub mod color;
pub mod error;
pub mod outfit;
pub mod palette;
pub mod query;
pub mod theme;
pub mod types;

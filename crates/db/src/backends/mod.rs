//! Concrete storage backends.

pub mod json_file;
pub mod postgres;

//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod favorite_repo;
pub mod outfit_repo;
pub mod user_repo;

pub use favorite_repo::FavoriteRepo;
pub use outfit_repo::OutfitRepo;
pub use user_repo::UserRepo;

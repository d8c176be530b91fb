/// Outfit and user primary keys (PostgreSQL BIGSERIAL, or the id column of
/// the flat-file store).
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

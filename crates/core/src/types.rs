/// Reference records are keyed by UUIDv7 generated at acceptance time.
pub type RecordId = uuid::Uuid;

/// Audit rows use PostgreSQL BIGSERIAL keys.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// All database primary keys are PostgreSQL UUIDs.
pub type SummaryId = uuid::Uuid;

/// Owner identities come from the external identity provider's `sub` claim.
pub type OwnerId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

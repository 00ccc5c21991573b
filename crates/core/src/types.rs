/// All entity identifiers are UUIDs (v4). There is no database issuing
/// sequences; ids are minted by this service or by the identity provider.
pub type EntityId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

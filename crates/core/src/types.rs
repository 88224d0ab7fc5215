/// Entity primary keys are opaque strings, either client-assigned or generated.
pub type EntityId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Generate a fresh identifier for an entity saved without one.
pub fn new_entity_id() -> EntityId {
    uuid::Uuid::new_v4().to_string()
}

/// Whether `id` is usable as a primary key (non-empty after trimming).
pub fn is_assigned(id: &str) -> bool {
    !id.trim().is_empty()
}

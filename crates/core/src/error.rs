use crate::types::EntityId;

/// Domain errors raised by the service layer.
///
/// A lookup miss is the only failure the domain classifies; everything else
/// (store connectivity, constraint violations) travels as the store's own
/// error type up to the HTTP boundary.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: EntityId },
}

impl CoreError {
    /// Shorthand for a lookup miss on `entity`.
    pub fn not_found(entity: &'static str, id: impl Into<EntityId>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }
}

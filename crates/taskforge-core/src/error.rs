//! Error types for TaskForge

use thiserror::Error;

use crate::domain::EntityRef;

/// Main error type for TaskForge operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskForgeError {
    /// An entity with the same id already lives in the working solution.
    #[error("Duplicate identifier: {entity} already exists in the working solution")]
    DuplicateIdentifier { entity: EntityRef },

    /// A change referenced an entity the working solution does not contain.
    #[error("Expected {entity} was not found in current working solution")]
    MissingReference { entity: EntityRef },

    /// The working solution no longer satisfies its structural invariants.
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),
}

impl TaskForgeError {
    /// Returns the entity this error is about, if any.
    pub fn entity(&self) -> Option<EntityRef> {
        match self {
            TaskForgeError::DuplicateIdentifier { entity }
            | TaskForgeError::MissingReference { entity } => Some(*entity),
            TaskForgeError::InvariantViolation(_) => None,
        }
    }
}

/// Result type alias for TaskForge operations
pub type Result<T> = std::result::Result<T, TaskForgeError>;

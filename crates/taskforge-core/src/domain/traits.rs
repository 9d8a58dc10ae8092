//! Core domain traits

use std::hash::Hash;

use super::{EntityRef, Task, TaskId, User, UserId};

/// Trait for entities with a stable planning identity.
///
/// Problem fact changes carry detached prototypes; the score director uses
/// the planning id to resolve them to the working instance.
pub trait PlanningId {
    /// The type of the unique identifier.
    type Id: Eq + Hash + Copy + Send + Sync + 'static;

    /// Returns the unique identifier for this object.
    ///
    /// This must never return a value that changes while the entity lives in
    /// a working solution.
    fn planning_id(&self) -> Self::Id;

    /// Returns a reference usable in notifications and errors.
    fn entity_ref(&self) -> EntityRef;
}

impl PlanningId for User {
    type Id = UserId;

    fn planning_id(&self) -> UserId {
        self.id
    }

    fn entity_ref(&self) -> EntityRef {
        EntityRef::User(self.id)
    }
}

impl PlanningId for Task {
    type Id = TaskId;

    fn planning_id(&self) -> TaskId {
        self.id
    }

    fn entity_ref(&self) -> EntityRef {
        EntityRef::Task(self.id)
    }
}

//! Identity types for users, tasks and chain links.
//!
//! Chains are expressed through stable ids rather than references, so a
//! broken link is an observable lookup miss instead of a dangling pointer.

use std::fmt;

/// Identifier of a [`User`](super::User). Independent of the task id space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UserId(pub i64);

/// Identifier of a [`Task`](super::Task). Independent of the user id space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TaskId(pub i64);

impl From<i64> for UserId {
    fn from(id: i64) -> Self {
        UserId(id)
    }
}

impl From<i64> for TaskId {
    fn from(id: i64) -> Self {
        TaskId(id)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The node immediately before a task in its chain.
///
/// The first task of a chain points to the user anchoring it; every other
/// task points to the task before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TaskOrUser {
    Task(TaskId),
    User(UserId),
}

impl TaskOrUser {
    /// Returns the task id if this link is a task.
    pub fn as_task(&self) -> Option<TaskId> {
        match self {
            TaskOrUser::Task(id) => Some(*id),
            TaskOrUser::User(_) => None,
        }
    }

    /// Returns the user id if this link is the chain anchor.
    pub fn as_user(&self) -> Option<UserId> {
        match self {
            TaskOrUser::Task(_) => None,
            TaskOrUser::User(id) => Some(*id),
        }
    }

    pub fn is_user(&self) -> bool {
        matches!(self, TaskOrUser::User(_))
    }
}

impl From<TaskId> for TaskOrUser {
    fn from(id: TaskId) -> Self {
        TaskOrUser::Task(id)
    }
}

impl From<UserId> for TaskOrUser {
    fn from(id: UserId) -> Self {
        TaskOrUser::User(id)
    }
}

impl fmt::Display for TaskOrUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskOrUser::Task(id) => write!(f, "task {id}"),
            TaskOrUser::User(id) => write!(f, "user {id}"),
        }
    }
}

/// Reference to an entity of the working solution.
///
/// Used as the subject of score director notifications and errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EntityRef {
    User(UserId),
    Task(TaskId),
}

impl From<UserId> for EntityRef {
    fn from(id: UserId) -> Self {
        EntityRef::User(id)
    }
}

impl From<TaskId> for EntityRef {
    fn from(id: TaskId) -> Self {
        EntityRef::Task(id)
    }
}

impl From<TaskOrUser> for EntityRef {
    fn from(link: TaskOrUser) -> Self {
        match link {
            TaskOrUser::Task(id) => EntityRef::Task(id),
            TaskOrUser::User(id) => EntityRef::User(id),
        }
    }
}

impl fmt::Display for EntityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityRef::User(id) => write!(f, "user {id}"),
            EntityRef::Task(id) => write!(f, "task {id}"),
        }
    }
}

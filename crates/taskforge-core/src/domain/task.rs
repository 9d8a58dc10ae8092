//! The task entity: a unit of work linked into at most one chain.

use std::fmt;

use super::{TaskId, TaskOrUser};

/// Lifecycle status of a task, as reported by the upstream workflow engine.
///
/// The engine stores the status as data and never acts on it: no change
/// moves a task between statuses by itself, and chain placement does not
/// depend on it. Only an explicit task property change overwrites it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TaskStatus {
    Created,
    #[default]
    Ready,
    Reserved,
    InProgress,
    Suspended,
    Completed,
    Failed,
    Error,
    Exited,
    Obsolete,
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TaskStatus::Created => "Created",
            TaskStatus::Ready => "Ready",
            TaskStatus::Reserved => "Reserved",
            TaskStatus::InProgress => "InProgress",
            TaskStatus::Suspended => "Suspended",
            TaskStatus::Completed => "Completed",
            TaskStatus::Failed => "Failed",
            TaskStatus::Error => "Error",
            TaskStatus::Exited => "Exited",
            TaskStatus::Obsolete => "Obsolete",
        };
        f.write_str(name)
    }
}

/// A unit of work, the only planning entity of the problem.
///
/// `previous_task_or_user` is the genuine (chained) planning variable and
/// `next_task` is its inverse shadow. Both are only mutated through
/// [`TaskAssigningSolution`](super::TaskAssigningSolution) so the pair stays
/// symmetric; a freshly created task is always detached and unpinned.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Task {
    pub id: TaskId,
    pub name: String,
    pub priority: i32,
    pub status: TaskStatus,
    #[cfg_attr(feature = "serde", serde(default))]
    pub(crate) published: bool,
    #[cfg_attr(feature = "serde", serde(skip))]
    pub(crate) pinned: bool,
    #[cfg_attr(feature = "serde", serde(skip))]
    pub(crate) previous_task_or_user: Option<TaskOrUser>,
    #[cfg_attr(feature = "serde", serde(skip))]
    pub(crate) next_task: Option<TaskId>,
}

impl Task {
    /// Name of the chained planning variable, as reported to the score director.
    pub const PREVIOUS_TASK_OR_USER: &'static str = "previousTaskOrUser";

    pub fn new(id: impl Into<TaskId>, name: impl Into<String>, priority: i32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            priority,
            status: TaskStatus::default(),
            published: false,
            pinned: false,
            previous_task_or_user: None,
            next_task: None,
        }
    }

    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    /// Marks the task as already visible to end users.
    pub fn with_published(mut self, published: bool) -> Self {
        self.published = published;
        self
    }

    /// True once the task has been shown to its potential owners.
    pub fn is_published(&self) -> bool {
        self.published
    }

    pub fn is_pinned(&self) -> bool {
        self.pinned
    }

    pub fn previous_task_or_user(&self) -> Option<TaskOrUser> {
        self.previous_task_or_user
    }

    pub fn next_task(&self) -> Option<TaskId> {
        self.next_task
    }

    /// True when the task is linked into some chain.
    pub fn is_assigned(&self) -> bool {
        self.previous_task_or_user.is_some()
    }

    /// Returns a copy of this task with all chain state cleared.
    pub fn detached(&self) -> Self {
        Self {
            pinned: false,
            previous_task_or_user: None,
            next_task: None,
            ..self.clone()
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Task{{id={}, name='{}', priority={}, status={}, published={}, pinned={}",
            self.id, self.name, self.priority, self.status, self.published, self.pinned
        )?;
        match self.previous_task_or_user {
            Some(previous) => write!(f, ", previous={previous}}}"),
            None => f.write_str(", previous=none}"),
        }
    }
}

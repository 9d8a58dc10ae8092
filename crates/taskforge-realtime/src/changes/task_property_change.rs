use taskforge_core::{EntityRef, Result, Task, TaskForgeError, TaskId, TaskStatus};
use taskforge_director::ScoreDirector;
use tracing::debug;

use super::look_up_task;
use crate::ProblemChange;

/// Updates the priority and/or status of a task in place.
///
/// The chain position is left untouched. A change with neither value set,
/// or one for an unknown task, does nothing.
///
/// ```
/// use taskforge_core::{TaskId, TaskStatus};
/// use taskforge_realtime::TaskPropertyChange;
///
/// let change = TaskPropertyChange::new(TaskId(3))
///     .with_priority(5)
///     .with_status(TaskStatus::InProgress);
/// assert_eq!(change.priority(), Some(5));
/// ```
#[derive(Debug, Clone)]
pub struct TaskPropertyChange {
    task: TaskId,
    priority: Option<i32>,
    status: Option<TaskStatus>,
}

impl TaskPropertyChange {
    pub fn new(task: impl Into<TaskId>) -> Self {
        Self {
            task: task.into(),
            priority: None,
            status: None,
        }
    }

    /// Takes priority and status from a task prototype.
    pub fn from_task(task: &Task) -> Self {
        Self::new(task.id)
            .with_priority(task.priority)
            .with_status(task.status)
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn task(&self) -> TaskId {
        self.task
    }

    pub fn priority(&self) -> Option<i32> {
        self.priority
    }

    pub fn status(&self) -> Option<TaskStatus> {
        self.status
    }
}

impl ProblemChange for TaskPropertyChange {
    fn apply(&self, score_director: &mut dyn ScoreDirector) -> Result<()> {
        let task = match look_up_task(score_director, self.task) {
            Some(task) if self.priority.is_some() || self.status.is_some() => task,
            _ => {
                debug!(event = "change_ignored", change = "task_property_change", task = %self.task);
                return Ok(());
            }
        };

        let entity = EntityRef::Task(task);
        score_director.before_problem_property_changed(entity);
        let working = score_director
            .working_solution_mut()
            .task_mut(task)
            .ok_or(TaskForgeError::MissingReference { entity })?;
        if let Some(priority) = self.priority {
            working.priority = priority;
        }
        if let Some(status) = self.status {
            working.status = status;
        }
        score_director.after_problem_property_changed(entity);
        score_director.trigger_variable_listeners();

        debug!(event = "change_applied", change = "task_property_change", task = %task);
        Ok(())
    }
}

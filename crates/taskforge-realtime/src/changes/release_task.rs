use taskforge_core::{Result, Task};
use taskforge_director::ScoreDirector;
use tracing::debug;

use super::look_up_task;
use crate::{chain, ProblemChange};

/// Releases a task from the user it is assigned to.
///
/// Releasing an unknown or already unassigned task does nothing: no
/// notification is sent and variable listeners are not triggered.
#[derive(Debug, Clone)]
pub struct ReleaseTask {
    task: Task,
}

impl ReleaseTask {
    pub fn new(task: Task) -> Self {
        Self { task }
    }

    pub fn task(&self) -> &Task {
        &self.task
    }
}

impl ProblemChange for ReleaseTask {
    fn apply(&self, score_director: &mut dyn ScoreDirector) -> Result<()> {
        let Some(task) = look_up_task(score_director, self.task.id) else {
            debug!(event = "change_ignored", change = "release_task", task = %self.task.id);
            return Ok(());
        };

        if chain::release_task(score_director, task)? {
            score_director.trigger_variable_listeners();
            debug!(event = "change_applied", change = "release_task", task = %task);
        } else {
            debug!(event = "change_ignored", change = "release_task", task = %task);
        }
        Ok(())
    }
}

use taskforge_core::{EntityRef, Result, Task, TaskForgeError};
use taskforge_director::ScoreDirector;
use tracing::debug;

use crate::ProblemChange;

/// Adds a new, unassigned task to the working solution.
///
/// Chain state carried by the prototype is ignored: the task starts
/// detached and unpinned until an [`AssignTask`](crate::AssignTask) or the
/// solver places it.
#[derive(Debug, Clone)]
pub struct AddTask {
    task: Task,
}

impl AddTask {
    pub fn new(task: Task) -> Self {
        Self { task }
    }

    pub fn task(&self) -> &Task {
        &self.task
    }
}

impl ProblemChange for AddTask {
    fn apply(&self, score_director: &mut dyn ScoreDirector) -> Result<()> {
        let entity = EntityRef::Task(self.task.id);
        if score_director.look_up_working_object(entity).is_some() {
            return Err(TaskForgeError::DuplicateIdentifier { entity });
        }

        score_director.before_problem_fact_added(entity);
        score_director
            .working_solution_mut()
            .push_task(self.task.clone())?;
        score_director.after_problem_fact_added(entity);
        score_director.trigger_variable_listeners();

        debug!(event = "change_applied", change = "add_task", task = %self.task.id);
        Ok(())
    }
}

use taskforge_core::{EntityRef, Result, TaskForgeError, User};
use taskforge_director::ScoreDirector;
use tracing::debug;

use crate::ProblemChange;

/// Adds a new user to the working solution.
///
/// Fails with [`TaskForgeError::DuplicateIdentifier`] if a user with the
/// same id is already present; nothing is mutated in that case.
#[derive(Debug, Clone)]
pub struct AddUser {
    user: User,
}

impl AddUser {
    pub fn new(user: User) -> Self {
        Self { user }
    }

    pub fn user(&self) -> &User {
        &self.user
    }
}

impl ProblemChange for AddUser {
    fn apply(&self, score_director: &mut dyn ScoreDirector) -> Result<()> {
        let entity = EntityRef::User(self.user.id);
        if score_director.look_up_working_object(entity).is_some() {
            return Err(TaskForgeError::DuplicateIdentifier { entity });
        }

        score_director.before_problem_fact_added(entity);
        score_director
            .working_solution_mut()
            .push_user(self.user.clone())?;
        score_director.after_problem_fact_added(entity);
        score_director.trigger_variable_listeners();

        debug!(event = "change_applied", change = "add_user", user = %self.user.id);
        Ok(())
    }
}

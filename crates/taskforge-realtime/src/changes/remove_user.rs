use taskforge_core::{EntityRef, Result, TaskForgeError, User};
use taskforge_director::ScoreDirector;
use tracing::debug;

use super::look_up_user;
use crate::{chain, ProblemChange};

/// Removes a user from the working solution.
///
/// The user is disabled first and every task of its chain, pinned or not,
/// is released before the user leaves the user list. An unknown user is
/// ignored.
#[derive(Debug, Clone)]
pub struct RemoveUser {
    user: User,
}

impl RemoveUser {
    pub fn new(user: User) -> Self {
        Self { user }
    }

    pub fn user(&self) -> &User {
        &self.user
    }
}

impl ProblemChange for RemoveUser {
    fn apply(&self, score_director: &mut dyn ScoreDirector) -> Result<()> {
        let Some(user) = look_up_user(score_director, self.user.id) else {
            debug!(event = "change_ignored", change = "remove_user", user = %self.user.id);
            return Ok(());
        };

        let entity = EntityRef::User(user);
        score_director.before_problem_property_changed(entity);
        score_director
            .working_solution_mut()
            .user_mut(user)
            .ok_or(TaskForgeError::MissingReference { entity })?
            .enabled = false;
        score_director.after_problem_property_changed(entity);

        let released = chain::release_all_tasks(score_director, user)?;

        score_director.before_problem_fact_removed(entity);
        score_director.working_solution_mut().remove_user(user);
        score_director.after_problem_fact_removed(entity);
        score_director.trigger_variable_listeners();

        debug!(
            event = "change_applied",
            change = "remove_user",
            user = %user,
            released = released as u64
        );
        Ok(())
    }
}

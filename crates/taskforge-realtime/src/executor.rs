//! Environment-mode aware change application.

use taskforge_config::{EngineConfig, EnvironmentMode};
use taskforge_core::{EntityRef, Result, TaskForgeError};
use taskforge_director::{RecordingScoreDirector, ScoreDirector};
use tracing::{debug, warn};

use crate::{BoxedProblemChange, ProblemChange};

/// Applies problem fact changes with the checks of the configured
/// [`EnvironmentMode`].
///
/// - `Production`: changes are applied as they are.
/// - `FastAssert`: the working solution is validated after every change.
/// - `FullAssert`: the solution is validated before and after every change,
///   and the notification trace of the change is verified.
///
/// # Example
///
/// ```
/// use taskforge_config::{EngineConfig, EnvironmentMode};
/// use taskforge_core::{Task, TaskAssigningSolution, User};
/// use taskforge_director::SimpleScoreDirector;
/// use taskforge_realtime::{AddTask, AddUser, AssignTask, BoxedProblemChange, ProblemChangeExecutor};
///
/// let executor = ProblemChangeExecutor::new(
///     EngineConfig::new().with_environment_mode(EnvironmentMode::FullAssert),
/// );
/// let mut director = SimpleScoreDirector::new(TaskAssigningSolution::new());
///
/// let changes: Vec<BoxedProblemChange> = vec![
///     Box::new(AddUser::new(User::new(1, "john"))),
///     Box::new(AddTask::new(Task::new(7, "review", 2))),
///     Box::new(AssignTask::new(Task::new(7, "review", 2), User::new(1, "john"))),
/// ];
/// assert_eq!(executor.apply_all(changes, &mut director).unwrap(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ProblemChangeExecutor {
    config: EngineConfig,
}

impl ProblemChangeExecutor {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn environment_mode(&self) -> EnvironmentMode {
        self.config.environment_mode
    }

    /// Makes the configured planning user the planning user of the working
    /// solution, adding it with problem fact added notifications if absent.
    ///
    /// Returns `true` if the user had to be added.
    ///
    /// # Errors
    ///
    /// Returns [`InvariantViolation`](taskforge_core::TaskForgeError::InvariantViolation)
    /// if the configured id belongs to a different user.
    pub fn install_planning_user(&self, score_director: &mut dyn ScoreDirector) -> Result<bool> {
        let user = self.config.planning_user();
        let entity = EntityRef::User(user.id);

        let existing = score_director
            .working_solution()
            .user(user.id)
            .map(|u| u.name.clone());
        let added = match existing {
            Some(name) if name != user.name => {
                return Err(TaskForgeError::InvariantViolation(format!(
                    "planning user {} conflicts with existing user '{name}'",
                    user.id
                )));
            }
            Some(_) => false,
            None => {
                score_director.before_problem_fact_added(entity);
                score_director.working_solution_mut().push_user(user.clone())?;
                score_director.after_problem_fact_added(entity);
                score_director.trigger_variable_listeners();
                true
            }
        };
        score_director
            .working_solution_mut()
            .set_planning_user_id(user.id);

        debug!(event = "planning_user_installed", user = %user.id, added = added);
        Ok(added)
    }

    /// Applies a single change.
    ///
    /// # Errors
    ///
    /// Returns the error of the change itself, or an
    /// [`InvariantViolation`](taskforge_core::TaskForgeError::InvariantViolation)
    /// raised by the assertions of the environment mode.
    pub fn apply(
        &self,
        change: &dyn ProblemChange,
        score_director: &mut dyn ScoreDirector,
    ) -> Result<()> {
        let mode = self.config.environment_mode;
        let result = self.apply_checked(change, score_director, mode);
        if let Err(err) = &result {
            warn!(event = "change_failed", change = ?change, mode = ?mode, error = %err);
        }
        result
    }

    fn apply_checked(
        &self,
        change: &dyn ProblemChange,
        score_director: &mut dyn ScoreDirector,
        mode: EnvironmentMode,
    ) -> Result<()> {
        if mode.is_fully_asserted() {
            score_director.working_solution().validate()?;
            let mut recording = RecordingScoreDirector::new(score_director);
            change.apply(&mut recording)?;
            recording.verify_brackets()?;
            debug!(
                event = "change_verified",
                notifications = recording.events().len() as u64
            );
        } else {
            change.apply(score_director)?;
        }

        if mode.is_asserted() {
            score_director.working_solution().validate()?;
        }
        Ok(())
    }

    /// Applies changes in order, stopping at the first failure.
    ///
    /// Returns the number of applied changes.
    pub fn apply_all<I>(&self, changes: I, score_director: &mut dyn ScoreDirector) -> Result<usize>
    where
        I: IntoIterator<Item = BoxedProblemChange>,
    {
        let mut applied = 0;
        for change in changes {
            self.apply(change.as_ref(), score_director)?;
            applied += 1;
        }
        Ok(applied)
    }
}

#[cfg(test)]
#[path = "executor_tests.rs"]
mod tests;

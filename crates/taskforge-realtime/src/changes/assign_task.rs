use taskforge_core::{EntityRef, Result, Task, TaskForgeError, TaskId, User, UserId};
use taskforge_director::ScoreDirector;
use tracing::debug;

use super::{look_up_task, look_up_user};
use crate::{chain, ProblemChange};

/// Assigns a task to a user and pins it there.
///
/// The task is detached from its current chain, if any, and inserted right
/// after the last pinned task of the user's chain (or right after the user
/// when nothing is pinned yet). Unpinned tasks that followed that position
/// move behind the new task, so the pinned part of a chain is always a
/// prefix of it.
///
/// ```text
/// before:  U <- P1(pinned) <- F1 <- F2          T
/// after:   U <- P1(pinned) <- T(pinned) <- F1 <- F2
/// ```
///
/// A task unknown to the working solution is added first, bracketed by
/// problem fact added notifications, unless
/// [`with_add_if_missing(false)`](Self::with_add_if_missing) asks for a
/// [`TaskForgeError::MissingReference`] instead. An unknown user always
/// fails with [`TaskForgeError::MissingReference`] before anything is mutated.
///
/// With [`with_ensure_published(true)`](Self::with_ensure_published) an
/// unpublished task is also marked as published, for tasks end users have
/// already seen.
#[derive(Debug, Clone)]
pub struct AssignTask {
    task: Task,
    user: User,
    ensure_published: bool,
    add_if_missing: bool,
}

impl AssignTask {
    pub fn new(task: Task, user: User) -> Self {
        Self {
            task,
            user,
            ensure_published: false,
            add_if_missing: true,
        }
    }

    /// Also publishes the task if it is not published yet.
    pub fn with_ensure_published(mut self, ensure_published: bool) -> Self {
        self.ensure_published = ensure_published;
        self
    }

    /// Whether a task unknown to the working solution is added (the default)
    /// or rejected.
    pub fn with_add_if_missing(mut self, add_if_missing: bool) -> Self {
        self.add_if_missing = add_if_missing;
        self
    }

    pub fn ensure_published(&self) -> bool {
        self.ensure_published
    }

    pub fn add_if_missing(&self) -> bool {
        self.add_if_missing
    }

    pub fn task(&self) -> &Task {
        &self.task
    }

    pub fn user(&self) -> &User {
        &self.user
    }
}

impl ProblemChange for AssignTask {
    fn apply(&self, score_director: &mut dyn ScoreDirector) -> Result<()> {
        let user = look_up_user(score_director, self.user.id).ok_or(
            TaskForgeError::MissingReference {
                entity: EntityRef::User(self.user.id),
            },
        )?;

        let task = match look_up_task(score_director, self.task.id) {
            Some(task) => task,
            None if !self.add_if_missing => {
                return Err(TaskForgeError::MissingReference {
                    entity: EntityRef::Task(self.task.id),
                });
            }
            None => {
                let entity = EntityRef::Task(self.task.id);
                score_director.before_problem_fact_added(entity);
                score_director
                    .working_solution_mut()
                    .push_task(self.task.clone())?;
                score_director.after_problem_fact_added(entity);
                debug!(event = "task_created", change = "assign_task", task = %self.task.id);
                self.task.id
            }
        };

        let relocate = !is_in_pinned_prefix(score_director, task, user);
        let publish = self.ensure_published
            && !score_director
                .working_solution()
                .task(task)
                .is_some_and(Task::is_published);
        if !relocate && !publish {
            debug!(event = "change_ignored", change = "assign_task", task = %task, user = %user);
            return Ok(());
        }

        if relocate {
            chain::release_task(score_director, task)?;
            let position = score_director
                .working_solution()
                .last_pinned_position(user)
                .ok_or(TaskForgeError::MissingReference {
                    entity: EntityRef::User(user),
                })?;
            chain::insert_task_after(score_director, task, position)?;

            score_director.before_problem_property_changed(EntityRef::Task(task));
            score_director.working_solution_mut().set_pinned(task, true)?;
            score_director.after_problem_property_changed(EntityRef::Task(task));
        }

        if publish {
            score_director.before_problem_property_changed(EntityRef::Task(task));
            score_director.working_solution_mut().set_published(task, true)?;
            score_director.after_problem_property_changed(EntityRef::Task(task));
        }
        score_director.trigger_variable_listeners();

        debug!(
            event = "change_applied",
            change = "assign_task",
            task = %task,
            user = %user,
            published = publish
        );
        Ok(())
    }
}

// Re-delivered assignments of a task already pinned to the user leave the
// chain as it is.
fn is_in_pinned_prefix(score_director: &dyn ScoreDirector, task: TaskId, user: UserId) -> bool {
    let solution = score_director.working_solution();
    solution
        .chain_of(user)
        .into_iter()
        .take_while(|&id| solution.task(id).is_some_and(Task::is_pinned))
        .any(|id| id == task)
}

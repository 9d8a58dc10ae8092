//! Chain utilities shared by problem fact changes.
//!
//! None of these functions trigger variable listeners: the calling change
//! triggers them once, after its last mutation.

use smallvec::SmallVec;
use taskforge_core::{EntityRef, Result, Task, TaskForgeError, TaskId, TaskOrUser, UserId};
use taskforge_director::ScoreDirector;
use tracing::trace;

/// Detaches `task` from its chain.
///
/// ```text
/// before:  P <- task <- N
/// after:   P <- N          task (unassigned, unpinned)
/// ```
///
/// The pinned flag is cleared first, then `N` is re-linked to `P`, then the
/// task itself is unlinked, each inside its own notification bracket.
///
/// Returns `false` without notifying anything if the task was already
/// unassigned.
///
/// # Errors
///
/// Returns [`TaskForgeError::MissingReference`] if the task is unknown.
pub fn release_task(score_director: &mut dyn ScoreDirector, task: TaskId) -> Result<bool> {
    let working = score_director
        .working_solution()
        .task(task)
        .ok_or(TaskForgeError::MissingReference {
            entity: EntityRef::Task(task),
        })?;
    let Some(previous) = working.previous_task_or_user() else {
        return Ok(false);
    };
    let pinned = working.is_pinned();
    let next = working.next_task();

    if pinned {
        score_director.before_problem_property_changed(EntityRef::Task(task));
        score_director.working_solution_mut().set_pinned(task, false)?;
        score_director.after_problem_property_changed(EntityRef::Task(task));
    }

    if let Some(next) = next {
        score_director.before_variable_changed(next, Task::PREVIOUS_TASK_OR_USER);
        score_director
            .working_solution_mut()
            .set_previous_task_or_user(next, Some(previous))?;
        score_director.after_variable_changed(next, Task::PREVIOUS_TASK_OR_USER);
    }

    score_director.before_variable_changed(task, Task::PREVIOUS_TASK_OR_USER);
    score_director
        .working_solution_mut()
        .set_previous_task_or_user(task, None)?;
    score_director.after_variable_changed(task, Task::PREVIOUS_TASK_OR_USER);

    trace!(event = "task_released", task = %task, previous = %previous, was_pinned = pinned);
    Ok(true)
}

/// Links the detached `task` right after `position`.
///
/// ```text
/// before:  position <- F          task
/// after:   position <- task <- F
/// ```
///
/// # Errors
///
/// Returns [`TaskForgeError::InvariantViolation`] if `task` is still chained.
pub fn insert_task_after(
    score_director: &mut dyn ScoreDirector,
    task: TaskId,
    position: TaskOrUser,
) -> Result<()> {
    let solution = score_director.working_solution();
    if solution.task(task).is_some_and(Task::is_assigned) {
        return Err(TaskForgeError::InvariantViolation(format!(
            "task {task} must be released before it is inserted"
        )));
    }
    let following = solution.next_task_of(position);

    score_director.before_variable_changed(task, Task::PREVIOUS_TASK_OR_USER);
    score_director
        .working_solution_mut()
        .set_previous_task_or_user(task, Some(position))?;
    score_director.after_variable_changed(task, Task::PREVIOUS_TASK_OR_USER);

    if let Some(following) = following {
        score_director.before_variable_changed(following, Task::PREVIOUS_TASK_OR_USER);
        score_director
            .working_solution_mut()
            .set_previous_task_or_user(following, Some(TaskOrUser::Task(task)))?;
        score_director.after_variable_changed(following, Task::PREVIOUS_TASK_OR_USER);
    }

    trace!(event = "task_inserted", task = %task, position = %position);
    Ok(())
}

/// Releases every task chained to `user`, pinned or not.
///
/// Returns the number of released tasks.
pub fn release_all_tasks(score_director: &mut dyn ScoreDirector, user: UserId) -> Result<usize> {
    release_tasks_matching(score_director, user, |_| true)
}

/// Releases the unpinned tasks chained to `user`; pinned tasks are left
/// in place and receive no notification.
///
/// Returns the number of released tasks.
pub fn release_non_pinned_tasks(
    score_director: &mut dyn ScoreDirector,
    user: UserId,
) -> Result<usize> {
    release_tasks_matching(score_director, user, |task| !task.is_pinned())
}

fn release_tasks_matching(
    score_director: &mut dyn ScoreDirector,
    user: UserId,
    filter: impl Fn(&Task) -> bool,
) -> Result<usize> {
    // The chain is mutated while releasing, so work on a snapshot of it.
    let solution = score_director.working_solution();
    let snapshot: SmallVec<[TaskId; 16]> = solution
        .chain_of(user)
        .into_iter()
        .filter(|&id| solution.task(id).is_some_and(&filter))
        .collect();

    for &task in &snapshot {
        release_task(score_director, task)?;
    }
    trace!(event = "tasks_released", user = %user, count = snapshot.len() as u64);
    Ok(snapshot.len())
}

//! Chain assertions shared by tests.

use taskforge_core::{TaskAssigningSolution, TaskId, TaskOrUser, UserId};

/// Panics with the violated invariant if the solution is inconsistent.
pub fn assert_chain_invariants(solution: &TaskAssigningSolution) {
    if let Err(err) = solution.validate() {
        panic!("working solution is inconsistent: {err}");
    }
}

/// Asserts the post-conditions of assigning `task` to `user`.
///
/// The task belongs to `user` and is pinned, every task before it is pinned
/// and belongs to `user`, and every task after it belongs to `user`.
pub fn assert_assigned(solution: &TaskAssigningSolution, task: TaskId, user: UserId) {
    let working = solution
        .task(task)
        .unwrap_or_else(|| panic!("task {task} not in solution"));
    assert_eq!(solution.user_of(task), Some(user), "task {task} owner");
    assert!(working.is_pinned(), "task {task} must be pinned");

    let mut previous = working.previous_task_or_user();
    while let Some(link) = previous {
        match link {
            TaskOrUser::Task(id) => {
                let prev = solution.task(id).expect("previous task exists");
                assert!(prev.is_pinned(), "task {id} before {task} must be pinned");
                assert_eq!(solution.user_of(id), Some(user));
                previous = prev.previous_task_or_user();
            }
            TaskOrUser::User(id) => {
                assert_eq!(id, user);
                previous = None;
            }
        }
    }

    let mut next = working.next_task();
    while let Some(id) = next {
        assert_eq!(solution.user_of(id), Some(user), "task {id} after {task} owner");
        next = solution.task(id).and_then(|t| t.next_task());
    }
}

/// Asserts `task` is detached and unpinned.
pub fn assert_released(solution: &TaskAssigningSolution, task: TaskId) {
    let working = solution
        .task(task)
        .unwrap_or_else(|| panic!("task {task} not in solution"));
    assert!(!working.is_assigned(), "task {task} must be unassigned");
    assert!(!working.is_pinned(), "task {task} must be unpinned");
    assert_eq!(working.next_task(), None, "task {task} must have no next task");
}

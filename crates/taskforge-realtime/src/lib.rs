//! Real-time planning support.
//!
//! Problem fact changes mutate the working solution between solver steps.
//! Each change resolves its prototypes through the score director, brackets
//! every mutation with the matching notifications and triggers variable
//! listeners exactly once when it is done.
//!
//! # Overview
//!
//! - [`AddUser`] / [`AddTask`]: insert new entities (duplicate ids fail)
//! - [`AssignTask`]: pin a task to a user's chain (unknown user fails)
//! - [`ReleaseTask`]: detach a task, stitching its neighbours
//! - [`DisableUser`] / [`UserPropertyChange`]: release the unpinned tasks of a user
//! - [`RemoveUser`]: release every task of a user and remove it
//! - [`TaskPropertyChange`]: update priority or status of a task
//!
//! # Example
//!
//! ```
//! use taskforge_core::{Task, TaskAssigningSolution, TaskId, User, UserId};
//! use taskforge_director::{ScoreDirector, SimpleScoreDirector};
//! use taskforge_realtime::{AddTask, AddUser, AssignTask, ProblemChange};
//!
//! let mut director = SimpleScoreDirector::new(TaskAssigningSolution::new());
//! let user = User::new(1, "john");
//! let task = Task::new(10, "review", 1);
//!
//! AddUser::new(user.clone()).apply(&mut director).unwrap();
//! AddTask::new(task.clone()).apply(&mut director).unwrap();
//! AssignTask::new(task, user).apply(&mut director).unwrap();
//!
//! let solution = director.working_solution();
//! assert_eq!(solution.user_of(TaskId(10)), Some(UserId(1)));
//! assert!(solution.task(TaskId(10)).unwrap().is_pinned());
//! ```

pub mod chain;
mod changes;
mod executor;
mod problem_change;

pub use changes::{
    AddTask, AddUser, AssignTask, DisableUser, ReleaseTask, RemoveUser, TaskPropertyChange,
    UserPropertyChange,
};
pub use executor::ProblemChangeExecutor;
pub use problem_change::{BoxedProblemChange, ProblemChange};

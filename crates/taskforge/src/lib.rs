//! TaskForge - real-time task assigning engine in Rust
//!
//! Keeps the chained task/user working solution of a task assigning solver
//! consistent while problem fact changes arrive between solver steps.
//!
//! # Example
//!
//! ```rust
//! use taskforge::prelude::*;
//!
//! let mut director = SimpleScoreDirector::new(TaskAssigningSolution::new());
//! let executor = ProblemChangeExecutor::new(
//!     EngineConfig::new().with_environment_mode(EnvironmentMode::FastAssert),
//! );
//!
//! let user = User::new(1, "john");
//! let task = Task::new(10, "review", 2);
//! executor.apply(&AddUser::new(user.clone()), &mut director).unwrap();
//! executor.apply(&AssignTask::new(task, user), &mut director).unwrap();
//!
//! let solution = director.working_solution();
//! assert_eq!(solution.chain_of(UserId(1)), vec![TaskId(10)]);
//! ```

// Domain model
pub use taskforge_core::{
    AttributeValue, EntityRef, PlanningId, Task, TaskAssigningSolution, TaskId, TaskOrUser,
    TaskStatus, User, UserId,
};

// Errors
pub use taskforge_core::{Result, TaskForgeError};

// Score director contract
pub use taskforge_director::{DirectorEvent, RecordingScoreDirector, ScoreDirector, SimpleScoreDirector};

// Problem fact changes
pub use taskforge_realtime::{
    chain, AddTask, AddUser, AssignTask, BoxedProblemChange, DisableUser, ProblemChange,
    ProblemChangeExecutor, ReleaseTask, RemoveUser, TaskPropertyChange, UserPropertyChange,
};

// Configuration
pub use taskforge_config::{ConfigError, EngineConfig, EnvironmentMode, PlanningUserConfig};

#[cfg(feature = "console")]
pub mod console;

pub mod prelude {
    pub use super::{
        AddTask, AddUser, AssignTask, BoxedProblemChange, DisableUser, ProblemChange,
        ProblemChangeExecutor, ReleaseTask, RemoveUser, TaskPropertyChange, UserPropertyChange,
    };
    pub use super::{EngineConfig, EnvironmentMode};
    pub use super::{ScoreDirector, SimpleScoreDirector};
    pub use super::{Task, TaskAssigningSolution, TaskId, TaskOrUser, TaskStatus, User, UserId};
}

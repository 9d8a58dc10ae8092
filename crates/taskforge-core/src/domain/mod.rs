//! Domain model for the task assigning problem
//!
//! - `User`: a worker, the anchor of a chain of tasks
//! - `Task`: a unit of work, linked into at most one chain
//! - `TaskOrUser`: the previous link of a task in its chain
//! - `TaskAssigningSolution`: the working solution holding both lists
//!
//! ```text
//! User1 <- A <- B <- C      (A.previous = User1, User1.next = A, A.next = B, ...)
//! User2 <- D
//! E                         (unassigned: no previous, never pinned)
//! ```

mod entity_ref;
mod solution;
mod task;
mod traits;
mod user;


pub use entity_ref::{EntityRef, TaskId, TaskOrUser, UserId};
pub use solution::TaskAssigningSolution;
pub use task::{Task, TaskStatus};
pub use traits::PlanningId;
pub use user::{AttributeValue, User};

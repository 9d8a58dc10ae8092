//! TaskForge Core - domain types for real-time task assignment
//!
//! This crate provides the fundamental abstractions for TaskForge:
//! - Users (workers) anchoring chains of tasks
//! - Tasks linked through `previous_task_or_user` / `next_task`
//! - The working solution aggregate and its structural invariants
//! - Error types shared by every other crate

pub mod domain;
pub mod error;

pub use domain::{
    AttributeValue, EntityRef, PlanningId, Task, TaskAssigningSolution, TaskId, TaskOrUser,
    TaskStatus, User, UserId,
};
pub use error::{Result, TaskForgeError};

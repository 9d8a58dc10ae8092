//! Shared test fixtures for TaskForge crates.
//!
//! This crate provides solution builders and chain assertions for testing.
//! It only depends on `taskforge-core` so every other crate can use it as a
//! dev-dependency without cycles.
//!
//! - [`fixtures`] - users, tasks and solutions with prebuilt chains
//! - [`assertions`] - checks for chain structure and assignment post-conditions
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! taskforge-test = { workspace = true }
//! ```
//!
//! ```
//! use taskforge_core::{TaskId, UserId};
//! use taskforge_test::fixtures::SolutionBuilder;
//! use taskforge_test::assertions::assert_chain_invariants;
//!
//! let solution = SolutionBuilder::new()
//!     .users(2)
//!     .tasks(4)
//!     .chain(0, &[(0, true), (1, false)])
//!     .build();
//!
//! assert_chain_invariants(&solution);
//! assert_eq!(solution.chain_of(UserId(0)), vec![TaskId(0), TaskId(1)]);
//! ```

pub mod assertions;
pub mod fixtures;

pub use assertions::{assert_assigned, assert_chain_invariants, assert_released};
pub use fixtures::{disable_fixture, SolutionBuilder};

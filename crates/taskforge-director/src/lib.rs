//! Score director contract for TaskForge.
//!
//! The score director owns the authoritative working solution. Problem fact
//! changes never touch the solution without bracketing the mutation with the
//! matching before/after notification, so an external optimizer can keep its
//! incremental bookkeeping in sync.
//!
//! - [`ScoreDirector`]: the contract consumed by problem fact changes
//! - [`SimpleScoreDirector`]: owning in-memory implementation
//! - [`RecordingScoreDirector`]: wrapper recording the notification trace

mod recording;
mod simple;
mod traits;


pub use recording::{DirectorEvent, RecordingScoreDirector};
pub use simple::SimpleScoreDirector;
pub use traits::ScoreDirector;

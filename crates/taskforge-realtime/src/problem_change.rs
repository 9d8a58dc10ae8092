//! Problem change trait for real-time planning.

use std::fmt::Debug;

use taskforge_core::Result;
use taskforge_director::ScoreDirector;

/// A change to the problem applied to the working solution between solver steps.
///
/// # Implementation Notes
///
/// When implementing `ProblemChange`:
/// - Resolve prototypes with `score_director.look_up_working_object()`
/// - Surround every mutation with the matching before/after notification
/// - Call `score_director.trigger_variable_listeners()` once, after all mutations
/// - Fail before the first mutation; never leave a half-applied change behind
/// - Changes should be idempotent when possible, since they may be redelivered
/// - Avoid holding references to entities across changes
pub trait ProblemChange: Send + Debug {
    /// Applies this change to the working solution of `score_director`.
    ///
    /// # Errors
    ///
    /// Implementations return an error only before mutating anything.
    fn apply(&self, score_director: &mut dyn ScoreDirector) -> Result<()>;
}

/// A boxed problem change for type-erased storage.
pub type BoxedProblemChange = Box<dyn ProblemChange>;

impl<P: ProblemChange + ?Sized> ProblemChange for Box<P> {
    fn apply(&self, score_director: &mut dyn ScoreDirector) -> Result<()> {
        (**self).apply(score_director)
    }
}

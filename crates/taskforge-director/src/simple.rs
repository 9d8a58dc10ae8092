//! Simple score director owning the working solution.

use taskforge_core::{EntityRef, TaskAssigningSolution, TaskId};
use tracing::trace;

use super::traits::ScoreDirector;

/// A score director that owns the working solution in memory.
///
/// It has no score of its own: it tracks whether mutations were announced
/// since the last listener trigger and counts triggers, which is what hosts
/// and tests need to observe the notification contract.
///
/// # Example
///
/// ```
/// use taskforge_core::{TaskAssigningSolution, User, EntityRef, UserId};
/// use taskforge_director::{ScoreDirector, SimpleScoreDirector};
///
/// let mut director = SimpleScoreDirector::new(TaskAssigningSolution::new());
/// let user = User::new(1, "john");
///
/// director.before_problem_fact_added(EntityRef::User(user.id));
/// director.working_solution_mut().push_user(user).unwrap();
/// director.after_problem_fact_added(EntityRef::User(UserId(1)));
/// assert!(director.is_dirty());
///
/// director.trigger_variable_listeners();
/// assert!(!director.is_dirty());
/// assert_eq!(director.trigger_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SimpleScoreDirector {
    working_solution: TaskAssigningSolution,
    dirty: bool,
    pending_notifications: usize,
    trigger_count: u64,
}

impl SimpleScoreDirector {
    /// Creates a new SimpleScoreDirector around `solution`.
    pub fn new(solution: TaskAssigningSolution) -> Self {
        SimpleScoreDirector {
            working_solution: solution,
            dirty: false,
            pending_notifications: 0,
            trigger_count: 0,
        }
    }

    /// True if mutations were announced since the last listener trigger.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Number of times variable listeners were triggered.
    pub fn trigger_count(&self) -> u64 {
        self.trigger_count
    }

    /// Clones the working solution.
    pub fn clone_working_solution(&self) -> TaskAssigningSolution {
        self.working_solution.clone()
    }

    /// Consumes the director, returning the working solution.
    pub fn into_working_solution(self) -> TaskAssigningSolution {
        self.working_solution
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
        self.pending_notifications += 1;
    }
}

impl ScoreDirector for SimpleScoreDirector {
    fn working_solution(&self) -> &TaskAssigningSolution {
        &self.working_solution
    }

    fn working_solution_mut(&mut self) -> &mut TaskAssigningSolution {
        &mut self.working_solution
    }

    fn before_problem_fact_added(&mut self, _entity: EntityRef) {
        self.mark_dirty();
    }

    fn after_problem_fact_added(&mut self, _entity: EntityRef) {
        // Already marked dirty in before_problem_fact_added
    }

    fn before_problem_fact_removed(&mut self, _entity: EntityRef) {
        self.mark_dirty();
    }

    fn after_problem_fact_removed(&mut self, _entity: EntityRef) {}

    fn before_problem_property_changed(&mut self, _entity: EntityRef) {
        self.mark_dirty();
    }

    fn after_problem_property_changed(&mut self, _entity: EntityRef) {}

    fn before_variable_changed(&mut self, _task: TaskId, _variable_name: &str) {
        self.mark_dirty();
    }

    fn after_variable_changed(&mut self, _task: TaskId, _variable_name: &str) {}

    fn trigger_variable_listeners(&mut self) {
        trace!(
            event = "variable_listeners_triggered",
            notifications = self.pending_notifications as u64,
        );
        self.dirty = false;
        self.pending_notifications = 0;
        self.trigger_count += 1;
    }
}

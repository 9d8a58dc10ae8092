// Score director trait definition.

use taskforge_core::{EntityRef, TaskAssigningSolution, TaskId};

// The score director manages the working solution on behalf of the solver.
//
// It is responsible for:
// - Exposing the working solution to problem fact changes
// - Resolving detached prototypes to working entities
// - Receiving before/after notifications around every mutation
// - Recomputing derived state when variable listeners are triggered
pub trait ScoreDirector: Send {
    // Returns a reference to the working solution.
    fn working_solution(&self) -> &TaskAssigningSolution;

    // Returns a mutable reference to the working solution.
    fn working_solution_mut(&mut self) -> &mut TaskAssigningSolution;

    // Resolves a prototype to the entity with the same id in the working
    // solution, or `None` if there is no such entity.
    fn look_up_working_object(&self, prototype: EntityRef) -> Option<EntityRef> {
        let solution = self.working_solution();
        let found = match prototype {
            EntityRef::User(id) => solution.contains_user(id),
            EntityRef::Task(id) => solution.contains_task(id),
        };
        found.then_some(prototype)
    }

    // Called before a new user or task is inserted into the solution lists.
    fn before_problem_fact_added(&mut self, entity: EntityRef);

    // Called after a new user or task was inserted into the solution lists.
    fn after_problem_fact_added(&mut self, entity: EntityRef);

    // Called before a user is removed from the solution.
    fn before_problem_fact_removed(&mut self, entity: EntityRef);

    // Called after a user was removed from the solution.
    fn after_problem_fact_removed(&mut self, entity: EntityRef);

    // Called before a non-chain property (enabled, attributes, pinned, ...) changes.
    fn before_problem_property_changed(&mut self, entity: EntityRef);

    // Called after a non-chain property changed.
    fn after_problem_property_changed(&mut self, entity: EntityRef);

    // Called before the chained variable of a task is reassigned.
    fn before_variable_changed(&mut self, task: TaskId, variable_name: &str);

    // Called after the chained variable of a task was reassigned.
    fn after_variable_changed(&mut self, task: TaskId, variable_name: &str);

    // Triggers shadow variable listeners to update derived values.
    //
    // Called once per problem fact change, after all of its mutations.
    fn trigger_variable_listeners(&mut self);
}

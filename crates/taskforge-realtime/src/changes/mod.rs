//! Built-in problem fact changes.

mod add_task;
mod add_user;
mod assign_task;
mod disable_user;
mod release_task;
mod remove_user;
mod task_property_change;
mod user_property_change;


pub use add_task::AddTask;
pub use add_user::AddUser;
pub use assign_task::AssignTask;
pub use disable_user::DisableUser;
pub use release_task::ReleaseTask;
pub use remove_user::RemoveUser;
pub use task_property_change::TaskPropertyChange;
pub use user_property_change::UserPropertyChange;

use taskforge_core::{EntityRef, TaskId, UserId};
use taskforge_director::ScoreDirector;

// Resolves a user prototype id to the working user id.
fn look_up_user(score_director: &dyn ScoreDirector, id: UserId) -> Option<UserId> {
    match score_director.look_up_working_object(EntityRef::User(id))? {
        EntityRef::User(found) => Some(found),
        EntityRef::Task(_) => None,
    }
}

// Resolves a task prototype id to the working task id.
fn look_up_task(score_director: &dyn ScoreDirector, id: TaskId) -> Option<TaskId> {
    match score_director.look_up_working_object(EntityRef::Task(id))? {
        EntityRef::Task(found) => Some(found),
        EntityRef::User(_) => None,
    }
}

use taskforge_core::{EntityRef, Task, TaskForgeError, TaskId, TaskOrUser, User, UserId};
use taskforge_director::{RecordingScoreDirector, ScoreDirector, SimpleScoreDirector};
use taskforge_test::{assert_assigned, assert_chain_invariants, disable_fixture, SolutionBuilder};

use crate::{AssignTask, ProblemChange};

fn assign(director: &mut SimpleScoreDirector, task: i64, user: i64) {
    AssignTask::new(Task::new(task, format!("Task_{task}"), 0), User::new(user, format!("User_{user}")))
        .apply(director)
        .unwrap();
}

#[test]
fn assign_appends_to_pinned_chain() {
    let mut director = SimpleScoreDirector::new(SolutionBuilder::new().users(1).tasks(2).build());

    assign(&mut director, 0, 0);
    assign(&mut director, 1, 0);

    let solution = director.working_solution();
    assert_eq!(solution.chain_of(UserId(0)), vec![TaskId(0), TaskId(1)]);
    assert_eq!(solution.task(TaskId(0)).unwrap().next_task(), Some(TaskId(1)));
    assert_eq!(
        solution.task(TaskId(1)).unwrap().previous_task_or_user(),
        Some(TaskOrUser::Task(TaskId(0)))
    );
    assert_assigned(solution, TaskId(0), UserId(0));
    assert_assigned(solution, TaskId(1), UserId(0));
    assert_eq!(director.trigger_count(), 2);
}

#[test]
fn assign_twice_keeps_single_occurrence() {
    let mut director = SimpleScoreDirector::new(SolutionBuilder::new().users(1).tasks(3).build());
    assign(&mut director, 0, 0);
    assign(&mut director, 1, 0);
    let once = director.clone_working_solution();

    assign(&mut director, 1, 0);
    assign(&mut director, 0, 0);

    let solution = director.working_solution();
    assert_eq!(solution.chain_of(UserId(0)), once.chain_of(UserId(0)));
    for task in [TaskId(0), TaskId(1)] {
        assert_eq!(
            solution.task(task).unwrap().previous_task_or_user(),
            once.task(task).unwrap().previous_task_or_user()
        );
        assert_eq!(
            solution.task(task).unwrap().next_task(),
            once.task(task).unwrap().next_task()
        );
    }
    assert_chain_invariants(solution);
}

#[test]
fn reassign_of_pinned_task_sends_no_notification() {
    let mut director = SimpleScoreDirector::new(disable_fixture());
    let mut recording = RecordingScoreDirector::new(&mut director);

    AssignTask::new(Task::new(1, "Task_1", 1), User::new(0, "User_0"))
        .apply(&mut recording)
        .unwrap();

    assert!(recording.is_empty());
}

#[test]
fn assign_to_unknown_user_fails_before_mutation() {
    let mut director = SimpleScoreDirector::new(disable_fixture());
    let mut recording = RecordingScoreDirector::new(&mut director);

    let err = AssignTask::new(Task::new(2, "Task_2", 2), User::new(-12345, "Non Existing"))
        .apply(&mut recording)
        .unwrap_err();

    assert_eq!(
        err,
        TaskForgeError::MissingReference {
            entity: EntityRef::User(UserId(-12345))
        }
    );
    assert_eq!(
        err.to_string(),
        "Expected user -12345 was not found in current working solution"
    );
    assert!(recording.is_empty());
    drop(recording);

    let solution = director.working_solution();
    assert_eq!(
        solution.chain_of(UserId(0)),
        vec![TaskId(0), TaskId(1), TaskId(2), TaskId(3)]
    );
    assert!(!director.is_dirty());
}

#[test]
fn assign_unknown_task_creates_it() {
    let mut director = SimpleScoreDirector::new(disable_fixture());

    assign(&mut director, 42, 2);

    let solution = director.working_solution();
    assert_eq!(solution.tasks().len(), 8);
    assert_eq!(solution.chain_of(UserId(2)), vec![TaskId(42)]);
    assert_assigned(solution, TaskId(42), UserId(2));
}

#[test]
fn assign_inserts_after_pinned_prefix() {
    let mut director = SimpleScoreDirector::new(disable_fixture());

    assign(&mut director, 6, 0);

    let solution = director.working_solution();
    assert_eq!(
        solution.chain_of(UserId(0)),
        vec![TaskId(0), TaskId(1), TaskId(6), TaskId(2), TaskId(3)]
    );
    assert_assigned(solution, TaskId(6), UserId(0));
    assert!(!solution.task(TaskId(2)).unwrap().is_pinned());
    assert_chain_invariants(solution);
}

#[test]
fn assign_moves_task_between_users() {
    let mut director = SimpleScoreDirector::new(disable_fixture());

    assign(&mut director, 1, 1);

    let solution = director.working_solution();
    assert_eq!(
        solution.chain_of(UserId(0)),
        vec![TaskId(0), TaskId(2), TaskId(3)]
    );
    assert_eq!(
        solution.chain_of(UserId(1)),
        vec![TaskId(4), TaskId(1), TaskId(5)]
    );
    assert_assigned(solution, TaskId(1), UserId(1));
    assert_chain_invariants(solution);
}

#[test]
fn assign_unpinned_task_within_same_user_pins_it() {
    let mut director = SimpleScoreDirector::new(disable_fixture());

    assign(&mut director, 3, 0);

    let solution = director.working_solution();
    assert_eq!(
        solution.chain_of(UserId(0)),
        vec![TaskId(0), TaskId(1), TaskId(3), TaskId(2)]
    );
    assert_assigned(solution, TaskId(3), UserId(0));
}

#[test]
fn assign_to_planning_user() {
    let mut director = SimpleScoreDirector::new(
        SolutionBuilder::new().users(1).tasks(1).with_planning_user().build(),
    );

    AssignTask::new(Task::new(0, "Task_0", 0), User::planning_user())
        .apply(&mut director)
        .unwrap();

    assert_assigned(
        director.working_solution(),
        TaskId(0),
        User::planning_user().id,
    );
}

#[test]
fn assign_unknown_task_without_adding_fails_before_mutation() {
    let mut director = SimpleScoreDirector::new(disable_fixture());
    let mut recording = RecordingScoreDirector::new(&mut director);

    let err = AssignTask::new(Task::new(42, "Task_42", 0), User::new(2, "User_2"))
        .with_add_if_missing(false)
        .apply(&mut recording)
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "Expected task 42 was not found in current working solution"
    );
    assert!(recording.is_empty());
    drop(recording);
    assert!(!director.working_solution().contains_task(TaskId(42)));
}

#[test]
fn assign_known_task_ignores_add_if_missing() {
    let mut director = SimpleScoreDirector::new(disable_fixture());

    AssignTask::new(Task::new(6, "Task_6", 0), User::new(2, "User_2"))
        .with_add_if_missing(false)
        .apply(&mut director)
        .unwrap();

    assert_assigned(director.working_solution(), TaskId(6), UserId(2));
}

#[test]
fn assign_leaves_published_flag_alone_by_default() {
    let mut director = SimpleScoreDirector::new(disable_fixture());

    assign(&mut director, 6, 2);

    assert!(!director.working_solution().task(TaskId(6)).unwrap().is_published());
}

#[test]
fn assign_options_default() {
    let change = AssignTask::new(Task::new(1, "Task_1", 0), User::new(0, "User_0"));
    assert!(!change.ensure_published());
    assert!(change.add_if_missing());
}

#[test]
fn ensure_published_on_pinned_task_keeps_chain() {
    let mut director = SimpleScoreDirector::new(disable_fixture());
    let before = director.working_solution().chain_of(UserId(0));

    AssignTask::new(Task::new(0, "Task_0", 0), User::new(0, "User_0"))
        .with_ensure_published(true)
        .apply(&mut director)
        .unwrap();

    let solution = director.working_solution();
    assert_eq!(solution.chain_of(UserId(0)), before);
    assert!(solution.task(TaskId(0)).unwrap().is_published());
    assert_eq!(director.trigger_count(), 1);
}

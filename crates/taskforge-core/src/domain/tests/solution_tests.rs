use crate::domain::{EntityRef, Task, TaskAssigningSolution, TaskId, TaskOrUser, User, UserId};
use crate::error::TaskForgeError;

fn solution(users: usize, tasks: usize) -> TaskAssigningSolution {
    TaskAssigningSolution::from_parts(
        (0..users as i64).map(|i| User::new(i, format!("User_{i}"))).collect(),
        (0..tasks as i64).map(|i| Task::new(i, format!("Task_{i}"), 0)).collect(),
    )
    .unwrap()
}

fn link(solution: &mut TaskAssigningSolution, task: i64, previous: TaskOrUser) {
    solution
        .set_previous_task_or_user(TaskId(task), Some(previous))
        .unwrap();
}

#[test]
fn test_from_parts_rejects_duplicate_task() {
    let err = TaskAssigningSolution::from_parts(
        vec![User::new(1, "u")],
        vec![Task::new(2, "a", 0), Task::new(2, "b", 0)],
    )
    .unwrap_err();

    assert_eq!(
        err,
        TaskForgeError::DuplicateIdentifier {
            entity: EntityRef::Task(TaskId(2))
        }
    );
    assert!(err.to_string().contains('2'));
}

#[test]
fn test_user_and_task_id_spaces_are_independent() {
    let solution =
        TaskAssigningSolution::from_parts(vec![User::new(1, "u")], vec![Task::new(1, "t", 0)])
            .unwrap();

    assert!(solution.contains_user(UserId(1)));
    assert!(solution.contains_task(TaskId(1)));
}

#[test]
fn test_push_discards_prototype_chain_state() {
    let mut source = solution(1, 1);
    link(&mut source, 0, TaskOrUser::User(UserId(0)));
    source.set_pinned(TaskId(0), true).unwrap();
    let prototype = source.task(TaskId(0)).unwrap().clone();

    let mut target = solution(0, 0);
    target.push_task(prototype).unwrap();

    let task = target.task(TaskId(0)).unwrap();
    assert!(!task.is_pinned());
    assert!(!task.is_assigned());
}

#[test]
fn test_set_previous_maintains_inverse() {
    let mut solution = solution(2, 3);
    link(&mut solution, 0, TaskOrUser::User(UserId(0)));
    link(&mut solution, 1, TaskOrUser::Task(TaskId(0)));

    assert_eq!(solution.user(UserId(0)).unwrap().next_task(), Some(TaskId(0)));
    assert_eq!(solution.task(TaskId(0)).unwrap().next_task(), Some(TaskId(1)));
    assert_eq!(solution.chain_of(UserId(0)), vec![TaskId(0), TaskId(1)]);

    // moving the tail to another user clears the old inverse
    link(&mut solution, 1, TaskOrUser::User(UserId(1)));
    assert_eq!(solution.task(TaskId(0)).unwrap().next_task(), None);
    assert_eq!(solution.chain_of(UserId(1)), vec![TaskId(1)]);
    assert!(solution.validate().is_ok());
}

#[test]
fn test_set_previous_unknown_link_is_missing_reference() {
    let mut solution = solution(1, 1);
    let err = solution
        .set_previous_task_or_user(TaskId(0), Some(TaskOrUser::User(UserId(42))))
        .unwrap_err();

    assert_eq!(
        err,
        TaskForgeError::MissingReference {
            entity: EntityRef::User(UserId(42))
        }
    );
    assert!(!solution.task(TaskId(0)).unwrap().is_assigned());
}

#[test]
fn test_pinning_unassigned_task_is_rejected() {
    let mut solution = solution(1, 1);
    assert!(matches!(
        solution.set_pinned(TaskId(0), true),
        Err(TaskForgeError::InvariantViolation(_))
    ));
}

#[test]
fn test_user_of_and_last_pinned_position() {
    let mut solution = solution(1, 3);
    link(&mut solution, 0, TaskOrUser::User(UserId(0)));
    link(&mut solution, 1, TaskOrUser::Task(TaskId(0)));
    link(&mut solution, 2, TaskOrUser::Task(TaskId(1)));

    assert_eq!(
        solution.last_pinned_position(UserId(0)),
        Some(TaskOrUser::User(UserId(0)))
    );

    solution.set_pinned(TaskId(0), true).unwrap();
    solution.set_pinned(TaskId(1), true).unwrap();

    assert_eq!(solution.user_of(TaskId(2)), Some(UserId(0)));
    assert_eq!(
        solution.last_pinned_position(UserId(0)),
        Some(TaskOrUser::Task(TaskId(1)))
    );
    assert_eq!(solution.last_pinned_position(UserId(9)), None);
}

#[test]
fn test_remove_user_reindexes() {
    let mut solution = solution(3, 0);
    let removed = solution.remove_user(UserId(0)).unwrap();

    assert_eq!(removed.id, UserId(0));
    assert_eq!(solution.users().len(), 2);
    assert_eq!(solution.user(UserId(2)).unwrap().id, UserId(2));
    assert!(solution.remove_user(UserId(0)).is_none());
    assert!(solution.validate().is_ok());
}

#[test]
fn test_validate_detects_dangling_chain() {
    let mut solution = solution(1, 2);
    link(&mut solution, 0, TaskOrUser::User(UserId(0)));
    link(&mut solution, 1, TaskOrUser::Task(TaskId(0)));
    assert!(solution.validate().is_ok());

    // detaching the head without stitching leaves task 1 orphaned
    solution.set_previous_task_or_user(TaskId(0), None).unwrap();
    assert!(matches!(
        solution.validate(),
        Err(TaskForgeError::InvariantViolation(_))
    ));
}

#[test]
fn test_validate_detects_removed_anchor() {
    let mut solution = solution(1, 1);
    link(&mut solution, 0, TaskOrUser::User(UserId(0)));
    solution.remove_user(UserId(0));

    assert!(solution.validate().is_err());
}

#[test]
fn test_default_planning_user() {
    let solution = TaskAssigningSolution::new();
    assert_eq!(solution.planning_user_id(), User::PLANNING_USER_ID);
    assert!(solution.is_planning_user(UserId(-1)));
}

#[test]
fn test_with_planning_user_adds_and_records_it() {
    let solution = solution(2, 0)
        .with_planning_user(User::new(-100, "pool"))
        .unwrap();

    assert!(solution.contains_user(UserId(-100)));
    assert!(solution.is_planning_user(UserId(-100)));
    assert!(!solution.is_planning_user(User::PLANNING_USER_ID));
    assert_eq!(solution.users().len(), 3);
}

#[test]
fn test_with_planning_user_reuses_existing_user() {
    let solution = solution(2, 0)
        .with_planning_user(User::new(1, "User_1"))
        .unwrap();

    assert_eq!(solution.users().len(), 2);
    assert_eq!(solution.planning_user_id(), UserId(1));
}

#[test]
fn test_with_planning_user_rejects_name_clash() {
    let result = solution(2, 0).with_planning_user(User::new(1, "pool"));
    assert!(matches!(result, Err(TaskForgeError::InvariantViolation(_))));
}

#[test]
fn test_set_published() {
    let mut solution = solution(1, 1);
    solution.set_published(TaskId(0), true).unwrap();
    assert!(solution.task(TaskId(0)).unwrap().is_published());

    assert_eq!(
        solution.set_published(TaskId(9), true),
        Err(TaskForgeError::MissingReference {
            entity: EntityRef::Task(TaskId(9))
        })
    );
}

use super::*;
use taskforge_core::{EntityRef, Task, TaskForgeError, TaskId, User, UserId};
use taskforge_director::SimpleScoreDirector;
use taskforge_test::{assert_assigned, assert_chain_invariants, disable_fixture};

use crate::{AddTask, AddUser, AssignTask, ReleaseTask};

// Opens a property bracket and never closes it.
#[derive(Debug)]
struct UnclosedBracket;

impl ProblemChange for UnclosedBracket {
    fn apply(&self, score_director: &mut dyn ScoreDirector) -> Result<()> {
        score_director.before_problem_property_changed(EntityRef::User(UserId(0)));
        score_director.trigger_variable_listeners();
        Ok(())
    }
}

// Drops a user without releasing its chain.
#[derive(Debug)]
struct DropAnchor;

impl ProblemChange for DropAnchor {
    fn apply(&self, score_director: &mut dyn ScoreDirector) -> Result<()> {
        let entity = EntityRef::User(UserId(0));
        score_director.before_problem_fact_removed(entity);
        score_director.working_solution_mut().remove_user(UserId(0));
        score_director.after_problem_fact_removed(entity);
        score_director.trigger_variable_listeners();
        Ok(())
    }
}

fn executor(mode: EnvironmentMode) -> ProblemChangeExecutor {
    ProblemChangeExecutor::new(EngineConfig::new().with_environment_mode(mode))
}

#[test]
fn test_default_executor_is_production() {
    let executor = ProblemChangeExecutor::default();
    assert_eq!(executor.environment_mode(), EnvironmentMode::Production);
    assert_eq!(executor.config(), &EngineConfig::default());
}

#[test]
fn test_production_skips_contract_checks() {
    let mut director = SimpleScoreDirector::new(disable_fixture());
    assert!(executor(EnvironmentMode::Production)
        .apply(&UnclosedBracket, &mut director)
        .is_ok());
}

#[test]
fn test_full_assert_rejects_unclosed_bracket() {
    let mut director = SimpleScoreDirector::new(disable_fixture());
    let err = executor(EnvironmentMode::FullAssert)
        .apply(&UnclosedBracket, &mut director)
        .unwrap_err();
    assert!(matches!(err, TaskForgeError::InvariantViolation(_)));
    assert!(err.to_string().contains("notification contract"));
}

#[test]
fn test_fast_assert_detects_broken_chain() {
    let mut director = SimpleScoreDirector::new(disable_fixture());
    let err = executor(EnvironmentMode::FastAssert)
        .apply(&DropAnchor, &mut director)
        .unwrap_err();
    assert!(matches!(err, TaskForgeError::InvariantViolation(_)));
}

#[test]
fn test_full_assert_accepts_builtin_changes() {
    let mut director = SimpleScoreDirector::new(disable_fixture());
    let executor = executor(EnvironmentMode::FullAssert);
    let changes: Vec<BoxedProblemChange> = vec![
        Box::new(AddUser::new(User::new(3, "User_3"))),
        Box::new(AddTask::new(Task::new(7, "Task_7", 1))),
        Box::new(AssignTask::new(Task::new(7, "Task_7", 1), User::new(3, "User_3"))),
        Box::new(AssignTask::new(Task::new(5, "Task_5", 2), User::new(0, "User_0"))),
        Box::new(ReleaseTask::new(Task::new(1, "Task_1", 1))),
    ];

    assert_eq!(executor.apply_all(changes, &mut director).unwrap(), 5);

    let solution = director.working_solution();
    assert_assigned(solution, TaskId(7), UserId(3));
    assert_assigned(solution, TaskId(5), UserId(0));
    assert_chain_invariants(solution);
}

#[test]
fn test_apply_all_stops_at_first_failure() {
    let mut director = SimpleScoreDirector::new(disable_fixture());
    let changes: Vec<BoxedProblemChange> = vec![
        Box::new(AddTask::new(Task::new(7, "Task_7", 1))),
        Box::new(AddTask::new(Task::new(7, "Task_7", 1))),
        Box::new(AddTask::new(Task::new(8, "Task_8", 1))),
    ];

    let err = executor(EnvironmentMode::Production)
        .apply_all(changes, &mut director)
        .unwrap_err();

    assert!(matches!(err, TaskForgeError::DuplicateIdentifier { .. }));
    let solution = director.working_solution();
    assert!(solution.contains_task(TaskId(7)));
    assert!(!solution.contains_task(TaskId(8)));
}

#[test]
fn test_install_configured_planning_user() {
    let config = EngineConfig::from_toml_str(
        r#"
        [planning_user]
        id = -100
        name = "pool"
    "#,
    )
    .unwrap();
    let executor = ProblemChangeExecutor::new(config.with_environment_mode(EnvironmentMode::FullAssert));
    let mut director = SimpleScoreDirector::new(disable_fixture());

    assert!(executor.install_planning_user(&mut director).unwrap());
    assert!(!executor.install_planning_user(&mut director).unwrap());

    let solution = director.working_solution();
    assert!(solution.contains_user(UserId(-100)));
    assert!(solution.is_planning_user(UserId(-100)));
    assert!(!solution.is_planning_user(User::PLANNING_USER_ID));
    assert!(executor.config().is_planning_user(solution.planning_user_id()));
    assert_eq!(director.trigger_count(), 1);

    executor
        .apply(
            &AssignTask::new(Task::new(6, "Task_6", 0), executor.config().planning_user()),
            &mut director,
        )
        .unwrap();
    assert_assigned(director.working_solution(), TaskId(6), UserId(-100));
}

#[test]
fn test_install_planning_user_rejects_id_clash() {
    let executor = ProblemChangeExecutor::new(EngineConfig::new().with_planning_user(1, "pool"));
    let mut director = SimpleScoreDirector::new(disable_fixture());

    let err = executor.install_planning_user(&mut director).unwrap_err();

    assert!(matches!(err, TaskForgeError::InvariantViolation(_)));
    assert_eq!(director.working_solution().users().len(), 3);
}

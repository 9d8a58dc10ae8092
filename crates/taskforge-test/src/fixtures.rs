//! Solution fixtures.

use taskforge_core::{Task, TaskAssigningSolution, TaskId, TaskOrUser, User, UserId};

/// Builds a working solution with `User_i` / `Task_i` entities and chains.
///
/// Panics on inconsistent input; intended for tests only.
#[derive(Debug, Default)]
pub struct SolutionBuilder {
    users: Vec<User>,
    tasks: Vec<Task>,
    chains: Vec<(UserId, Vec<(TaskId, bool)>)>,
    planning_user: bool,
}

impl SolutionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds users with ids `0..n`.
    pub fn users(mut self, n: usize) -> Self {
        let start = self.users.len() as i64;
        self.users
            .extend((start..start + n as i64).map(|i| User::new(i, format!("User_{i}"))));
        self
    }

    /// Adds tasks with ids `0..n`, priority equal to the id modulo 3.
    pub fn tasks(mut self, n: usize) -> Self {
        let start = self.tasks.len() as i64;
        self.tasks.extend(
            (start..start + n as i64).map(|i| Task::new(i, format!("Task_{i}"), (i % 3) as i32)),
        );
        self
    }

    pub fn user(mut self, user: User) -> Self {
        self.users.push(user);
        self
    }

    pub fn task(mut self, task: Task) -> Self {
        self.tasks.push(task);
        self
    }

    /// Also adds the sentinel planning user.
    pub fn with_planning_user(mut self) -> Self {
        self.planning_user = true;
        self
    }

    /// Chains `(task id, pinned)` pairs to `user`, in order.
    pub fn chain(mut self, user: i64, tasks: &[(i64, bool)]) -> Self {
        self.chains.push((
            UserId(user),
            tasks.iter().map(|&(id, pinned)| (TaskId(id), pinned)).collect(),
        ));
        self
    }

    pub fn build(self) -> TaskAssigningSolution {
        let mut users = self.users;
        if self.planning_user {
            users.push(User::planning_user());
        }
        let mut solution = TaskAssigningSolution::from_parts(users, self.tasks)
            .expect("fixture ids must be unique");
        for (user, chain) in self.chains {
            let mut previous = TaskOrUser::User(user);
            for (task, pinned) in chain {
                solution
                    .set_previous_task_or_user(task, Some(previous))
                    .expect("fixture chain must reference known entities");
                if pinned {
                    solution.set_pinned(task, true).expect("assigned task can be pinned");
                }
                previous = TaskOrUser::Task(task);
            }
        }
        solution
    }
}

/// User 0 owns `[pinned 0, pinned 1, free 2, free 3]`, user 1 owns
/// `[pinned 4, free 5]`, user 2 has no tasks and task 6 is unassigned.
pub fn disable_fixture() -> TaskAssigningSolution {
    SolutionBuilder::new()
        .users(3)
        .tasks(7)
        .chain(0, &[(0, true), (1, true), (2, false), (3, false)])
        .chain(1, &[(4, true), (5, false)])
        .build()
}

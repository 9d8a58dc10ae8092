//! The working solution aggregate.

use std::collections::HashMap;

use super::{EntityRef, Task, TaskId, TaskOrUser, User, UserId};
use crate::error::{Result, TaskForgeError};

/// Users and tasks of a task assigning problem.
///
/// Both lists keep insertion order. Id indexes give O(1) lookups and are
/// rebuilt when a user is removed. Chain links are stored as ids, and
/// [`set_previous_task_or_user`](Self::set_previous_task_or_user) keeps the
/// `next_task` inverse of every node consistent with them.
///
/// # Example
///
/// ```
/// use taskforge_core::{Task, TaskAssigningSolution, TaskId, TaskOrUser, User, UserId};
///
/// let mut solution = TaskAssigningSolution::new();
/// solution.push_user(User::new(1, "john")).unwrap();
/// solution.push_task(Task::new(10, "review", 1)).unwrap();
/// solution.push_task(Task::new(11, "approve", 1)).unwrap();
///
/// solution
///     .set_previous_task_or_user(TaskId(10), Some(TaskOrUser::User(UserId(1))))
///     .unwrap();
/// solution
///     .set_previous_task_or_user(TaskId(11), Some(TaskOrUser::Task(TaskId(10))))
///     .unwrap();
///
/// assert_eq!(solution.chain_of(UserId(1)), vec![TaskId(10), TaskId(11)]);
/// assert_eq!(solution.user_of(TaskId(11)), Some(UserId(1)));
/// assert!(solution.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct TaskAssigningSolution {
    users: Vec<User>,
    tasks: Vec<Task>,
    user_index: HashMap<UserId, usize>,
    task_index: HashMap<TaskId, usize>,
    planning_user: UserId,
}

impl Default for TaskAssigningSolution {
    fn default() -> Self {
        Self {
            users: Vec::new(),
            tasks: Vec::new(),
            user_index: HashMap::new(),
            task_index: HashMap::new(),
            planning_user: User::PLANNING_USER_ID,
        }
    }
}

impl TaskAssigningSolution {
    /// Creates an empty solution.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a solution from detached users and tasks.
    ///
    /// Chain state carried by the inputs is discarded.
    ///
    /// # Errors
    ///
    /// Returns [`TaskForgeError::DuplicateIdentifier`] on the first repeated id.
    pub fn from_parts(users: Vec<User>, tasks: Vec<Task>) -> Result<Self> {
        let mut solution = Self {
            users: Vec::with_capacity(users.len()),
            tasks: Vec::with_capacity(tasks.len()),
            user_index: HashMap::with_capacity(users.len()),
            task_index: HashMap::with_capacity(tasks.len()),
            planning_user: User::PLANNING_USER_ID,
        };
        for user in users {
            solution.push_user(user)?;
        }
        for task in tasks {
            solution.push_task(task)?;
        }
        Ok(solution)
    }

    /// Makes `user` the planning user of this solution, adding it if absent.
    ///
    /// # Errors
    ///
    /// Returns [`TaskForgeError::InvariantViolation`] if a user with the same
    /// id but a different name is already present.
    ///
    /// ```
    /// use taskforge_core::{TaskAssigningSolution, User, UserId};
    ///
    /// let solution = TaskAssigningSolution::new()
    ///     .with_planning_user(User::new(-100, "pool"))
    ///     .unwrap();
    /// assert!(solution.is_planning_user(UserId(-100)));
    /// assert!(!solution.is_planning_user(User::PLANNING_USER_ID));
    /// ```
    pub fn with_planning_user(mut self, user: User) -> Result<Self> {
        let existing = self.user(user.id).map(|u| u.name.clone());
        match existing {
            Some(name) if name != user.name => {
                return Err(violation(format!(
                    "planning user {} conflicts with existing user '{name}'",
                    user.id
                )));
            }
            Some(_) => {}
            None => self.push_user(user.clone())?,
        }
        self.planning_user = user.id;
        Ok(self)
    }

    /// Id of the user standing for "not yet assigned".
    pub fn planning_user_id(&self) -> UserId {
        self.planning_user
    }

    /// Records which user id acts as the planning user.
    pub fn set_planning_user_id(&mut self, id: UserId) {
        self.planning_user = id;
    }

    pub fn is_planning_user(&self, id: UserId) -> bool {
        self.planning_user == id
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn user(&self, id: UserId) -> Option<&User> {
        self.user_index.get(&id).map(|&idx| &self.users[idx])
    }

    pub fn user_mut(&mut self, id: UserId) -> Option<&mut User> {
        self.user_index.get(&id).map(|&idx| &mut self.users[idx])
    }

    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.task_index.get(&id).map(|&idx| &self.tasks[idx])
    }

    pub fn task_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.task_index.get(&id).map(|&idx| &mut self.tasks[idx])
    }

    pub fn contains_user(&self, id: UserId) -> bool {
        self.user_index.contains_key(&id)
    }

    pub fn contains_task(&self, id: TaskId) -> bool {
        self.task_index.contains_key(&id)
    }

    /// Returns true if the chain link resolves to an entity of this solution.
    pub fn contains(&self, link: TaskOrUser) -> bool {
        match link {
            TaskOrUser::Task(id) => self.contains_task(id),
            TaskOrUser::User(id) => self.contains_user(id),
        }
    }

    /// Appends a user with an empty chain.
    pub fn push_user(&mut self, user: User) -> Result<()> {
        if self.user_index.contains_key(&user.id) {
            return Err(TaskForgeError::DuplicateIdentifier {
                entity: EntityRef::User(user.id),
            });
        }
        self.user_index.insert(user.id, self.users.len());
        self.users.push(user.detached());
        Ok(())
    }

    /// Appends a detached, unpinned task.
    pub fn push_task(&mut self, task: Task) -> Result<()> {
        if self.task_index.contains_key(&task.id) {
            return Err(TaskForgeError::DuplicateIdentifier {
                entity: EntityRef::Task(task.id),
            });
        }
        self.task_index.insert(task.id, self.tasks.len());
        self.tasks.push(task.detached());
        Ok(())
    }

    /// Removes a user from the user list, preserving the order of the others.
    ///
    /// The caller must have released the user's chain first; tasks still
    /// pointing at a removed user fail [`validate`](Self::validate).
    pub fn remove_user(&mut self, id: UserId) -> Option<User> {
        let idx = self.user_index.remove(&id)?;
        let user = self.users.remove(idx);
        for (i, u) in self.users.iter().enumerate().skip(idx) {
            self.user_index.insert(u.id, i);
        }
        Some(user)
    }

    /// The task following `node` in its chain.
    pub fn next_task_of(&self, node: TaskOrUser) -> Option<TaskId> {
        match node {
            TaskOrUser::Task(id) => self.task(id).and_then(|t| t.next_task),
            TaskOrUser::User(id) => self.user(id).and_then(|u| u.next_task),
        }
    }

    fn set_next_task_of(&mut self, node: TaskOrUser, next: Option<TaskId>) {
        match node {
            TaskOrUser::Task(id) => {
                if let Some(task) = self.task_mut(id) {
                    task.next_task = next;
                }
            }
            TaskOrUser::User(id) => {
                if let Some(user) = self.user_mut(id) {
                    user.next_task = next;
                }
            }
        }
    }

    /// Sets the chained variable of `task` and updates the `next_task` inverse.
    ///
    /// The old predecessor loses its `next_task` only if it still pointed at
    /// `task`; the new predecessor's `next_task` becomes `task`. A task that
    /// previously followed the new predecessor is not moved: callers re-link it.
    ///
    /// # Errors
    ///
    /// Returns [`TaskForgeError::MissingReference`] if `task` or `previous`
    /// is not part of this solution.
    pub fn set_previous_task_or_user(
        &mut self,
        task: TaskId,
        previous: Option<TaskOrUser>,
    ) -> Result<()> {
        let old = self
            .task(task)
            .ok_or(TaskForgeError::MissingReference {
                entity: EntityRef::Task(task),
            })?
            .previous_task_or_user;
        if let Some(link) = previous {
            if !self.contains(link) {
                return Err(TaskForgeError::MissingReference {
                    entity: link.into(),
                });
            }
        }
        if old == previous {
            return Ok(());
        }

        if let Some(old) = old {
            if self.next_task_of(old) == Some(task) {
                self.set_next_task_of(old, None);
            }
        }
        if let Some(new) = previous {
            self.set_next_task_of(new, Some(task));
        }
        if let Some(t) = self.task_mut(task) {
            t.previous_task_or_user = previous;
        }
        Ok(())
    }

    /// Pins or unpins a task.
    ///
    /// # Errors
    ///
    /// Pinning an unassigned task is rejected with
    /// [`TaskForgeError::InvariantViolation`].
    pub fn set_pinned(&mut self, task: TaskId, pinned: bool) -> Result<()> {
        let t = self.task_mut(task).ok_or(TaskForgeError::MissingReference {
            entity: EntityRef::Task(task),
        })?;
        if pinned && t.previous_task_or_user.is_none() {
            return Err(TaskForgeError::InvariantViolation(format!(
                "task {task} cannot be pinned while unassigned"
            )));
        }
        t.pinned = pinned;
        Ok(())
    }

    /// Marks a task as published or not.
    pub fn set_published(&mut self, task: TaskId, published: bool) -> Result<()> {
        let t = self.task_mut(task).ok_or(TaskForgeError::MissingReference {
            entity: EntityRef::Task(task),
        })?;
        t.published = published;
        Ok(())
    }

    /// Walks the previous links of `task` back to its anchor.
    ///
    /// Returns `None` for unassigned tasks and for broken chains.
    pub fn user_of(&self, task: TaskId) -> Option<UserId> {
        let mut current = self.task(task)?.previous_task_or_user?;
        for _ in 0..=self.tasks.len() {
            match current {
                TaskOrUser::User(id) => return self.contains_user(id).then_some(id),
                TaskOrUser::Task(id) => current = self.task(id)?.previous_task_or_user?,
            }
        }
        None
    }

    /// Snapshot of the task ids chained to `user`, head first.
    pub fn chain_of(&self, user: UserId) -> Vec<TaskId> {
        let mut chain = Vec::new();
        let mut next = self.user(user).and_then(|u| u.next_task);
        while let Some(id) = next {
            if chain.len() > self.tasks.len() {
                break;
            }
            chain.push(id);
            next = self.task(id).and_then(|t| t.next_task);
        }
        chain
    }

    /// The last node of the pinned prefix of `user`'s chain.
    ///
    /// This is the user itself when the chain starts with an unpinned task
    /// or is empty.
    pub fn last_pinned_position(&self, user: UserId) -> Option<TaskOrUser> {
        self.user(user)?;
        let mut position = TaskOrUser::User(user);
        for id in self.chain_of(user) {
            match self.task(id) {
                Some(task) if task.pinned => position = TaskOrUser::Task(id),
                _ => break,
            }
        }
        Some(position)
    }

    /// Checks every structural invariant of the working solution.
    ///
    /// - ids are unique per id space
    /// - `previous_task_or_user` and `next_task` are mutual inverses
    /// - every assigned task reaches a user, without cycles
    /// - pinned tasks are assigned
    pub fn validate(&self) -> Result<()> {
        if self.user_index.len() != self.users.len() || self.task_index.len() != self.tasks.len() {
            return Err(TaskForgeError::InvariantViolation(
                "duplicate identifiers in the working solution".to_string(),
            ));
        }
        for (idx, user) in self.users.iter().enumerate() {
            if self.user_index.get(&user.id) != Some(&idx) {
                return Err(violation(format!("user {} is not indexed", user.id)));
            }
            if let Some(head) = user.next_task {
                let points_back = self
                    .task(head)
                    .is_some_and(|t| t.previous_task_or_user == Some(TaskOrUser::User(user.id)));
                if !points_back {
                    return Err(violation(format!(
                        "user {} has next task {head} which does not point back",
                        user.id
                    )));
                }
            }
        }
        for (idx, task) in self.tasks.iter().enumerate() {
            if self.task_index.get(&task.id) != Some(&idx) {
                return Err(violation(format!("task {} is not indexed", task.id)));
            }
            if task.pinned && task.previous_task_or_user.is_none() {
                return Err(violation(format!("task {} is pinned but unassigned", task.id)));
            }
            if let Some(next) = task.next_task {
                let points_back = self
                    .task(next)
                    .is_some_and(|t| t.previous_task_or_user == Some(TaskOrUser::Task(task.id)));
                if !points_back {
                    return Err(violation(format!(
                        "task {} has next task {next} which does not point back",
                        task.id
                    )));
                }
            }
            if let Some(previous) = task.previous_task_or_user {
                if self.next_task_of(previous) != Some(task.id) {
                    return Err(violation(format!(
                        "{previous} does not have task {} as next task",
                        task.id
                    )));
                }
                if self.user_of(task.id).is_none() {
                    return Err(violation(format!(
                        "task {} is not connected to a user",
                        task.id
                    )));
                }
            }
        }
        Ok(())
    }
}

fn violation(message: String) -> TaskForgeError {
    TaskForgeError::InvariantViolation(message)
}

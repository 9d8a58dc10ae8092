//! The user entity: a worker anchoring a chain of tasks.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use super::{TaskId, UserId};

/// Value of a user attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum AttributeValue {
    Boolean(bool),
    Integer(i64),
    Text(String),
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        AttributeValue::Boolean(value)
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        AttributeValue::Integer(value)
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::Text(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        AttributeValue::Text(value)
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Boolean(v) => write!(f, "{v}"),
            AttributeValue::Integer(v) => write!(f, "{v}"),
            AttributeValue::Text(v) => f.write_str(v),
        }
    }
}

/// A worker that tasks get assigned to.
///
/// A user is the anchor of its chain: `next_task` is the first task of the
/// chain, maintained by [`TaskAssigningSolution`](super::TaskAssigningSolution)
/// as the inverse of the tasks' `previous_task_or_user`.
///
/// # Example
///
/// ```
/// use taskforge_core::{User, UserId};
///
/// let user = User::new(1, "john")
///     .with_group("HR")
///     .with_attribute("seniority", 3)
///     .with_label_value("skills", "java");
///
/// assert_eq!(user.id, UserId(1));
/// assert!(user.enabled);
/// assert!(user.groups.contains("HR"));
/// assert!(user.next_task().is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub enabled: bool,
    pub attributes: BTreeMap<String, AttributeValue>,
    pub label_values: BTreeMap<String, BTreeSet<String>>,
    pub groups: BTreeSet<String>,
    #[cfg_attr(feature = "serde", serde(skip))]
    pub(crate) next_task: Option<TaskId>,
}

impl User {
    /// Id of the sentinel user representing "not yet assigned".
    pub const PLANNING_USER_ID: UserId = UserId(-1);

    /// Name of the sentinel user.
    pub const PLANNING_USER_NAME: &'static str = "planninguser";

    /// Creates an enabled user with no attributes and an empty chain.
    pub fn new(id: impl Into<UserId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            enabled: true,
            attributes: BTreeMap::new(),
            label_values: BTreeMap::new(),
            groups: BTreeSet::new(),
            next_task: None,
        }
    }

    /// Creates the default planning user placeholder.
    ///
    /// Which user acts as the planning user is decided by the working
    /// solution; see [`TaskAssigningSolution::is_planning_user`](super::TaskAssigningSolution::is_planning_user).
    pub fn planning_user() -> Self {
        Self::new(Self::PLANNING_USER_ID, Self::PLANNING_USER_NAME)
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn with_label_value(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.label_values
            .entry(label.into())
            .or_default()
            .insert(value.into());
        self
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.groups.insert(group.into());
        self
    }

    /// First task of this user's chain, if any.
    pub fn next_task(&self) -> Option<TaskId> {
        self.next_task
    }

    /// Returns a copy of this user with its chain head cleared.
    ///
    /// Prototypes entering the working solution always start with an empty chain.
    pub fn detached(&self) -> Self {
        Self {
            next_task: None,
            ..self.clone()
        }
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "User{{id={}, name='{}', enabled={}}}", self.id, self.name, self.enabled)
    }
}

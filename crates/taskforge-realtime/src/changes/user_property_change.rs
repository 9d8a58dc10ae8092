use std::collections::{BTreeMap, BTreeSet};

use taskforge_core::{AttributeValue, EntityRef, Result, TaskForgeError, User, UserId};
use taskforge_director::ScoreDirector;
use tracing::debug;

use super::look_up_user;
use crate::{chain, ProblemChange};

/// Replaces the properties of a user and releases its unpinned tasks.
///
/// `enabled`, `attributes`, `label_values` and `groups` are overwritten as a
/// whole; nothing is merged with the previous values. Unpinned tasks are
/// released unconditionally since any property may change which tasks the
/// user is eligible for. An unknown user is ignored.
#[derive(Debug, Clone)]
pub struct UserPropertyChange {
    user: UserId,
    enabled: bool,
    attributes: BTreeMap<String, AttributeValue>,
    label_values: BTreeMap<String, BTreeSet<String>>,
    groups: BTreeSet<String>,
}

impl UserPropertyChange {
    pub fn new(
        user: impl Into<UserId>,
        enabled: bool,
        attributes: BTreeMap<String, AttributeValue>,
        label_values: BTreeMap<String, BTreeSet<String>>,
        groups: BTreeSet<String>,
    ) -> Self {
        Self {
            user: user.into(),
            enabled,
            attributes,
            label_values,
            groups,
        }
    }

    /// Takes the new property values from a user prototype.
    pub fn from_user(user: &User) -> Self {
        Self::new(
            user.id,
            user.enabled,
            user.attributes.clone(),
            user.label_values.clone(),
            user.groups.clone(),
        )
    }

    pub fn user(&self) -> UserId {
        self.user
    }
}

impl ProblemChange for UserPropertyChange {
    fn apply(&self, score_director: &mut dyn ScoreDirector) -> Result<()> {
        let Some(user) = look_up_user(score_director, self.user) else {
            debug!(event = "change_ignored", change = "user_property_change", user = %self.user);
            return Ok(());
        };

        let entity = EntityRef::User(user);
        score_director.before_problem_property_changed(entity);
        let working = score_director
            .working_solution_mut()
            .user_mut(user)
            .ok_or(TaskForgeError::MissingReference { entity })?;
        working.enabled = self.enabled;
        working.attributes = self.attributes.clone();
        working.label_values = self.label_values.clone();
        working.groups = self.groups.clone();
        score_director.after_problem_property_changed(entity);

        let released = chain::release_non_pinned_tasks(score_director, user)?;
        score_director.trigger_variable_listeners();

        debug!(
            event = "change_applied",
            change = "user_property_change",
            user = %user,
            enabled = self.enabled,
            released = released as u64
        );
        Ok(())
    }
}

//! Host / role metadata attached to a task.
//!
//! Metadata is advisory: it never changes how a task runs. The execution
//! engine reads it to decide where to fan a task out.

use serde::{Deserialize, Serialize};

/// Target hosts and roles of a task.
///
/// `None` means "not attached", which is different from an attached empty
/// list. Host strings are not validated here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hosts: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<String>>,
}

impl TaskMetadata {
    /// Replace the host list. Order and duplicates are kept as given.
    pub fn set_hosts<I, S>(&mut self, hosts: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.hosts = Some(hosts.into_iter().map(Into::into).collect());
    }

    /// Replace the role list.
    pub fn set_roles<I, S>(&mut self, roles: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.roles = Some(roles.into_iter().map(Into::into).collect());
    }
}

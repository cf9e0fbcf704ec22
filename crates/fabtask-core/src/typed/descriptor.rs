//! TaskDescriptor - task とそのメタデータ（hosts / roles）の束
//!
//! # 学習ポイント
//! - `&mut Self` を返す builder 風 setter（同じ descriptor を返す）
//! - descriptor 自身も `Task` を実装し、`run` を中身へ委譲する

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use super::once::guard_run_once;
use super::task::{Task, TaskResult};
use super::wrapped::{Invocable, wrap_as_task};
use crate::domain::{TaskArgs, TaskMetadata};

/// A task plus the hosts / roles it targets.
///
/// Setting metadata never changes what `run` does. Cloning is cheap and the
/// clone shares the underlying task, including any run-once state.
#[derive(Clone)]
pub struct TaskDescriptor {
    task: Arc<dyn Task>,
    metadata: TaskMetadata,
}

impl TaskDescriptor {
    pub fn new(invocable: Invocable) -> Self {
        Self {
            task: wrap_as_task(invocable),
            metadata: TaskMetadata::default(),
        }
    }

    pub fn task(&self) -> &Arc<dyn Task> {
        &self.task
    }

    pub fn metadata(&self) -> &TaskMetadata {
        &self.metadata
    }

    /// Replace the host list (last write wins).
    pub fn set_hosts<I, S>(&mut self, hosts: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.metadata.set_hosts(hosts);
        self
    }

    /// Replace the role list (last write wins).
    pub fn set_roles<I, S>(&mut self, roles: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.metadata.set_roles(roles);
        self
    }

    /// Put the current task behind a new run-once guard.
    pub fn set_runs_once(&mut self) -> &mut Self {
        self.task = guard_run_once(Arc::clone(&self.task));
        self
    }

    /// Apply a decorator built by [`crate::decorators`].
    pub fn decorate(self, decorator: impl FnOnce(Self) -> Self) -> Self {
        decorator(self)
    }
}

impl fmt::Debug for TaskDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskDescriptor")
            .field("name", &self.task.name())
            .field("metadata", &self.metadata)
            .field("has_run", &self.task.has_run())
            .finish()
    }
}

#[async_trait]
impl Task for TaskDescriptor {
    fn name(&self) -> &str {
        self.task.name()
    }

    fn description(&self) -> Option<&str> {
        self.task.description()
    }

    fn hosts(&self) -> Option<&[String]> {
        self.metadata.hosts.as_deref().or_else(|| self.task.hosts())
    }

    fn roles(&self) -> Option<&[String]> {
        self.metadata.roles.as_deref().or_else(|| self.task.roles())
    }

    fn has_run(&self) -> Option<bool> {
        self.task.has_run()
    }

    async fn run(&self, args: TaskArgs) -> TaskResult {
        self.task.run(args).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn noop() -> Invocable {
        Invocable::callable("noop", |_| Ok(None))
    }

    #[test]
    fn hosts_read_back_in_order_and_overwrite() {
        let mut d = TaskDescriptor::new(noop());
        d.set_hosts(["user1@host1", "host2"]);
        assert_eq!(
            d.hosts(),
            Some(&["user1@host1".to_string(), "host2".to_string()][..])
        );

        d.set_hosts(["host3"]);
        assert_eq!(d.hosts(), Some(&["host3".to_string()][..]));
    }

    #[test]
    fn roles_are_independent_of_hosts() {
        let mut d = TaskDescriptor::new(noop());
        d.set_roles(["webserver", "dbserver"]).set_hosts(["db1"]);

        assert_eq!(d.metadata().roles.as_ref().map(Vec::len), Some(2));
        assert_eq!(d.metadata().hosts, Some(vec!["db1".to_string()]));
    }

    #[tokio::test]
    async fn metadata_does_not_change_run() {
        let mut d = TaskDescriptor::new(Invocable::callable("answer", |_| Ok(Some(json!(7)))));
        d.set_hosts(["h1"]).set_roles(["r1"]);

        assert_eq!(d.run(TaskArgs::new()).await.unwrap(), Some(json!(7)));
        assert_eq!(d.run(TaskArgs::new()).await.unwrap(), Some(json!(7)));
    }

    #[tokio::test]
    async fn runs_once_keeps_metadata_and_clones_share_state() {
        let counter = Arc::new(AtomicUsize::new(0));
        let c = Arc::clone(&counter);
        let mut d = TaskDescriptor::new(Invocable::callable("setup", move |_| {
            c.fetch_add(1, Ordering::SeqCst);
            Ok(None)
        }));
        d.set_hosts(["a", "b"]).set_runs_once();

        let copy = d.clone();
        d.run(TaskArgs::new()).await.unwrap();
        copy.run(TaskArgs::new()).await.unwrap();

        assert_eq!(counter.load(Ordering::SeqCst), 1);
        assert_eq!(copy.has_run(), Some(true));
        assert_eq!(copy.hosts().map(<[String]>::len), Some(2));
    }

    #[test]
    fn outer_metadata_falls_back_to_inner_task() {
        let mut inner = TaskDescriptor::new(noop());
        inner.set_roles(["web"]);

        let outer = TaskDescriptor::new(Invocable::task(Arc::new(inner)));
        assert_eq!(outer.roles(), Some(&["web".to_string()][..]));
        assert_eq!(outer.hosts(), None);
    }
}

//! Task identity wrapper.
//!
//! Turns an [`Invocable`] into an `Arc<dyn Task>`. A value that is already a
//! task comes back as the same `Arc`; a raw callable is put behind a
//! [`WrappedCallableTask`].

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use super::task::{Task, TaskResult};
use crate::domain::TaskArgs;

/// A plain function or closure that has not been turned into a task yet.
pub type RawCallable = Arc<dyn Fn(TaskArgs) -> TaskResult + Send + Sync>;

/// Input of the identity wrapper.
///
/// The variant is the discriminant: `Task` is returned untouched, `Callable`
/// gets wrapped.
#[derive(Clone)]
pub enum Invocable {
    Callable { name: String, callable: RawCallable },
    Task(Arc<dyn Task>),
}

impl Invocable {
    pub fn callable<F>(name: impl Into<String>, f: F) -> Self
    where
        F: Fn(TaskArgs) -> TaskResult + Send + Sync + 'static,
    {
        Self::Callable {
            name: name.into(),
            callable: Arc::new(f),
        }
    }

    pub fn task(task: Arc<dyn Task>) -> Self {
        Self::Task(task)
    }
}

impl From<Arc<dyn Task>> for Invocable {
    fn from(task: Arc<dyn Task>) -> Self {
        Self::Task(task)
    }
}

impl fmt::Debug for Invocable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Callable { name, .. } => f.debug_struct("Callable").field("name", name).finish(),
            Self::Task(task) => f.debug_tuple("Task").field(&task.name()).finish(),
        }
    }
}

/// Task adapter around a raw callable.
///
/// `run` forwards the arguments and hands back whatever the callable
/// returned, errors included.
pub struct WrappedCallableTask {
    name: String,
    description: Option<String>,
    callable: RawCallable,
}

impl WrappedCallableTask {
    pub fn new<F>(name: impl Into<String>, f: F) -> Self
    where
        F: Fn(TaskArgs) -> TaskResult + Send + Sync + 'static,
    {
        Self::from_raw(name.into(), Arc::new(f))
    }

    fn from_raw(name: String, callable: RawCallable) -> Self {
        Self {
            name,
            description: None,
            callable,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl fmt::Debug for WrappedCallableTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WrappedCallableTask")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl Task for WrappedCallableTask {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    async fn run(&self, args: TaskArgs) -> TaskResult {
        (self.callable)(args)
    }
}

/// Normalize an invocable into a task.
///
/// Never fails. Wrapping an existing task is a no-op that returns the same
/// `Arc`, so nothing is ever wrapped twice.
pub fn wrap_as_task(invocable: Invocable) -> Arc<dyn Task> {
    match invocable {
        Invocable::Task(task) => task,
        Invocable::Callable { name, callable } => {
            tracing::debug!(task = %name, "wrapping callable as task");
            Arc::new(WrappedCallableTask::from_raw(name, callable))
        }
    }
}

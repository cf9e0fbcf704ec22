use std::sync::Arc;

use super::registry::TaskRegistry;
use crate::domain::TaskArgs;
use crate::error::TaskError;
use crate::typed::{Task, TaskResult};

/// Runtime dispatches a call by task name to the registered descriptor.
///
/// It does no host fan-out; callers invoke it once per target.
pub struct Runtime {
    registry: Arc<TaskRegistry>,
}

impl Runtime {
    pub fn new(registry: Arc<TaskRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &TaskRegistry {
        &self.registry
    }

    /// Run the task named `name` once.
    pub async fn execute(&self, name: &str, args: TaskArgs) -> TaskResult {
        let descriptor = self
            .registry
            .get(name)
            .ok_or_else(|| TaskError::NotFound(name.to_string()))?;

        tracing::debug!(task = %name, "executing task");
        descriptor.run(args).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decorators::{runs_once, task};
    use crate::typed::Invocable;
    use serde_json::json;

    fn runtime() -> Runtime {
        let mut reg = TaskRegistry::new();
        reg.register(task(Invocable::callable("greet", |args| {
            let who: String = args.named_as("who")?;
            Ok(Some(json!(format!("hello {who}"))))
        })))
        .unwrap();
        reg.register(runs_once(task(Invocable::callable("setup", |_| {
            Ok(Some(json!("prepared")))
        }))))
        .unwrap();
        Runtime::new(Arc::new(reg))
    }

    #[tokio::test]
    async fn runtime_executes_registered_task() {
        let rt = runtime();
        let out = rt
            .execute("greet", TaskArgs::new().kwarg("who", "web1"))
            .await
            .unwrap();
        assert_eq!(out, Some(json!("hello web1")));
    }

    #[tokio::test]
    async fn runtime_surfaces_task_errors_unchanged() {
        let rt = runtime();
        let err = rt.execute("greet", TaskArgs::new()).await.unwrap_err();
        assert!(matches!(err, TaskError::MissingArgument(k) if k == "who"));
    }

    #[tokio::test]
    async fn runtime_errors_when_task_missing() {
        let rt = runtime();
        let err = rt.execute("missing", TaskArgs::new()).await.unwrap_err();
        assert!(matches!(err, TaskError::NotFound(n) if n == "missing"));
    }

    #[tokio::test]
    async fn guarded_task_runs_once_per_runtime() {
        let rt = runtime();
        for host in ["a", "b", "c"] {
            let out = rt
                .execute("setup", TaskArgs::new().kwarg("host", host))
                .await
                .unwrap();
            assert_eq!(out.is_some(), host == "a");
        }
        assert_eq!(rt.registry().get("setup").unwrap().has_run(), Some(true));
    }
}

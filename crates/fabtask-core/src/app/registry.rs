//! TaskRegistry - task 名から descriptor を引く
//!
//! # 設計
//! - 初期化時に構築（mutable）
//! - 実行時は読み取りのみ（immutable）。ロック不要

use std::collections::HashMap;

use super::status::TaskSummary;
use crate::error::RegistryError;
use crate::typed::{Task, TaskDescriptor};

#[derive(Debug, Default)]
pub struct TaskRegistry {
    tasks: HashMap<String, TaskDescriptor>,
}

impl TaskRegistry {
    pub fn new() -> Self {
        Self {
            tasks: HashMap::new(),
        }
    }

    /// Register a task under its own name. Duplicate names are rejected.
    pub fn register(&mut self, descriptor: TaskDescriptor) -> Result<(), RegistryError> {
        let name = descriptor.name().to_string();
        if self.tasks.contains_key(&name) {
            return Err(RegistryError::AlreadyRegistered(name));
        }
        tracing::debug!(task = %name, "registered task");
        self.tasks.insert(name, descriptor);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&TaskDescriptor> {
        self.tasks.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tasks.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.tasks.keys().cloned().collect();
        names.sort();
        names
    }

    /// Listing rows, sorted by name.
    pub fn summaries(&self) -> Vec<TaskSummary> {
        let mut rows: Vec<TaskSummary> = self
            .tasks
            .values()
            .map(|d| TaskSummary::of(d))
            .collect();
        rows.sort_by(|a, b| a.name.cmp(&b.name));
        rows
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decorators::{roles, runs_once, task};
    use crate::typed::Invocable;

    fn named(name: &str) -> TaskDescriptor {
        task(Invocable::callable(name, |_| Ok(None)))
    }

    #[test]
    fn register_and_get() {
        let mut registry = TaskRegistry::new();
        registry.register(named("deploy")).unwrap();

        assert!(registry.get("deploy").is_some());
        assert!(registry.get("missing").is_none());
        assert!(registry.contains("deploy"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn duplicate_name_is_rejected() {
        let mut registry = TaskRegistry::new();
        registry.register(named("deploy")).unwrap();

        let result = registry.register(named("deploy"));
        assert!(matches!(result, Err(RegistryError::AlreadyRegistered(n)) if n == "deploy"));
    }

    #[test]
    fn names_and_summaries_are_sorted() {
        let mut registry = TaskRegistry::new();
        registry.register(named("restart")).unwrap();
        registry
            .register(runs_once(named("backup").decorate(roles(["db"]))))
            .unwrap();

        assert_eq!(registry.names(), vec!["backup".to_string(), "restart".to_string()]);

        let rows = registry.summaries();
        assert_eq!(rows[0].name, "backup");
        assert!(rows[0].runs_once);
        assert_eq!(rows[0].metadata.roles, Some(vec!["db".to_string()]));
        assert!(!rows[1].runs_once);
    }
}

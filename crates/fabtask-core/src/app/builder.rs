//! AppBuilder - task 登録と起動時検証
//!
//! # 学習ポイント
//! - Builder パターンの実装
//! - 起動時検証（Fail-fast 設計）

use std::sync::Arc;

use super::registry::TaskRegistry;
use super::runtime::Runtime;
use crate::error::RegistryError;
use crate::typed::TaskDescriptor;

/// AppBuilder は task を登録して App を構築する
///
/// # 使用例
/// ```ignore
/// let app = AppBuilder::new()
///     .register(runs_once(task(setup)))?
///     .register(task(deploy))?
///     .expect_tasks(&["setup", "deploy"])
///     .build()?;
/// let runtime = app.into_runtime();
/// ```
///
/// # Fail-fast 設計
/// - expect_tasks() で期待される task 名を登録
/// - build() 時に「期待集合 ⊆ 登録済み集合」をチェック
#[derive(Debug, Default)]
pub struct AppBuilder {
    registry: TaskRegistry,
    expected_tasks: Option<Vec<String>>,
}

#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Missing tasks: {0:?}. These tasks were expected but not registered.")]
    MissingTasks(Vec<String>),
}

impl AppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(mut self, descriptor: TaskDescriptor) -> Result<Self, RegistryError> {
        self.registry.register(descriptor)?;
        Ok(self)
    }

    pub fn expect_tasks(mut self, names: &[&str]) -> Self {
        self.expected_tasks = Some(names.iter().map(|n| n.to_string()).collect());
        self
    }

    pub fn build(self) -> Result<App, BuildError> {
        if let Some(expected) = &self.expected_tasks {
            let missing: Vec<String> = expected
                .iter()
                .filter(|name| !self.registry.contains(name))
                .cloned()
                .collect();
            if !missing.is_empty() {
                return Err(BuildError::MissingTasks(missing));
            }
        }
        Ok(App {
            registry: self.registry,
        })
    }
}

/// App holds the validated registry.
#[derive(Debug)]
pub struct App {
    pub registry: TaskRegistry,
}

impl App {
    pub fn into_runtime(self) -> Runtime {
        Runtime::new(Arc::new(self.registry))
    }
}

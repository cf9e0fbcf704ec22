//! fabtask-core
//!
//! Task building blocks for a deployment-automation tool: turn callables
//! into tasks, attach target hosts / roles, and guard tasks so they run once.
//!
//! # モジュール構成
//! - **domain**: 引数とメタデータ（TaskArgs, TaskMetadata）
//! - **typed**: `Task` trait, identity wrapper, run-once guard, descriptor
//! - **decorators**: `task` / `hosts` / `roles` / `runs_once`
//! - **app**: AppBuilder, TaskRegistry, Runtime, TaskSummary
//! - **error**: TaskError, RegistryError
//!
//! Connections, remote execution and host fan-out live in the execution
//! engine that calls into this crate.

pub mod domain;
pub mod typed;
pub mod decorators;
pub mod app;
pub mod error;

pub use domain::{TaskArgs, TaskMetadata};
pub use error::{RegistryError, TaskError};
pub use typed::{
    Invocable, RunsOnce, Task, TaskDescriptor, TaskResult, WrappedCallableTask, guard_run_once,
    wrap_as_task,
};

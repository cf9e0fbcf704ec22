//! Typed - Task 抽象とそのラッパー
//!
//! # 構成
//! - **task**: `Task` trait（エンジンが呼ぶ唯一の入口 `run`）
//! - **wrapped**: 生の callable を `Task` にする identity wrapper
//! - **once**: run-once guard
//! - **descriptor**: task + hosts / roles メタデータ

pub mod task;
pub mod wrapped;
pub mod once;
pub mod descriptor;

// 主要な trait/型 を再エクスポート
pub use self::task::{Task, TaskResult};
pub use self::wrapped::{Invocable, RawCallable, WrappedCallableTask, wrap_as_task};
pub use self::once::{RunsOnce, guard_run_once};
pub use self::descriptor::TaskDescriptor;

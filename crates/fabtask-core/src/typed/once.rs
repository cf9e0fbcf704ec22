//! RunsOnce - run-once guard
//!
//! # 学習ポイント
//! - `AtomicBool::swap` で「実行すべきか」の判定と Armed→Fired の遷移を 1 操作にする
//! - 状態は guard インスタンスのフィールドが持つ（グローバルではない）
//!
//! # 状態遷移
//! - Armed: まだ一度も呼ばれていない
//! - Fired: 一度呼ばれた（成功・失敗を問わない）。元に戻らない

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;

use super::task::{Task, TaskResult};
use crate::domain::TaskArgs;

/// Guard that lets the wrapped task do real work at most once.
///
/// The first call flips the guard to fired *before* delegating, so a failing
/// first run is not retried. Every later call returns `Ok(None)` without
/// touching the inner task, not the remembered first result.
///
/// Clones of an `Arc<RunsOnce>` share one flag. Guarding the same inner task
/// twice yields two independent guards.
pub struct RunsOnce {
    inner: Arc<dyn Task>,
    fired: AtomicBool,
}

impl RunsOnce {
    pub fn new(inner: Arc<dyn Task>) -> Self {
        Self {
            inner,
            fired: AtomicBool::new(false),
        }
    }

    pub fn inner(&self) -> &Arc<dyn Task> {
        &self.inner
    }

    pub fn is_fired(&self) -> bool {
        self.fired.load(Ordering::Acquire)
    }
}

impl fmt::Debug for RunsOnce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RunsOnce")
            .field("task", &self.inner.name())
            .field("fired", &self.is_fired())
            .finish()
    }
}

#[async_trait]
impl Task for RunsOnce {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn description(&self) -> Option<&str> {
        self.inner.description()
    }

    fn hosts(&self) -> Option<&[String]> {
        self.inner.hosts()
    }

    fn roles(&self) -> Option<&[String]> {
        self.inner.roles()
    }

    fn has_run(&self) -> Option<bool> {
        Some(self.is_fired())
    }

    async fn run(&self, args: TaskArgs) -> TaskResult {
        if self.fired.swap(true, Ordering::AcqRel) {
            tracing::info!(task = %self.name(), "already run once, skipping");
            return Ok(None);
        }

        tracing::debug!(task = %self.name(), "run-once guard fired");
        let result = self.inner.run(args).await;
        if let Err(err) = &result {
            tracing::warn!(task = %self.name(), error = %err, "run-once task failed, it will not run again");
        }
        result
    }
}

/// Put `task` behind a fresh run-once guard.
pub fn guard_run_once(task: Arc<dyn Task>) -> Arc<dyn Task> {
    tracing::debug!(task = %task.name(), "guarding task with runs_once");
    Arc::new(RunsOnce::new(task))
}

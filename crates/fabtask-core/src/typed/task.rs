//! Task trait - エンジンが呼び出す作業単位の定義
//!
//! # 学習ポイント
//! - `async_trait` で object-safe な async メソッドを持つ trait
//! - デフォルト実装でメタデータ系メソッドを任意にする
//! - `Arc<dyn Task>` で生の callable と組み立て済み task を同じように扱う

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::TaskArgs;
use crate::error::TaskError;

/// `Ok(None)` is the empty result: the task did no work or had nothing to
/// return.
pub type TaskResult = Result<Option<Value>, TaskError>;

/// A unit of work the execution engine can invoke.
///
/// # 使用例
/// ```ignore
/// struct Restart;
///
/// #[async_trait]
/// impl Task for Restart {
///     fn name(&self) -> &str {
///         "restart"
///     }
///
///     async fn run(&self, args: TaskArgs) -> TaskResult {
///         let service: String = args.positional_as(0)?;
///         Ok(Some(service.into()))
///     }
/// }
/// ```
///
/// # メタデータ
/// `hosts` / `roles` / `has_run` は wrapper や descriptor が上書きする。
/// 素の実装はデフォルトのままでよい。
#[async_trait]
pub trait Task: Send + Sync {
    fn name(&self) -> &str;

    /// One-line description shown in task listings.
    fn description(&self) -> Option<&str> {
        None
    }

    /// Attached target hosts, if any.
    fn hosts(&self) -> Option<&[String]> {
        None
    }

    /// Attached target roles, if any.
    fn roles(&self) -> Option<&[String]> {
        None
    }

    /// `Some(fired)` when this task is behind a run-once guard.
    fn has_run(&self) -> Option<bool> {
        None
    }

    /// The canonical invocation entry point.
    async fn run(&self, args: TaskArgs) -> TaskResult;
}

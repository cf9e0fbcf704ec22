//! Error types for running and registering tasks.

use thiserror::Error;

/// TaskError は Task の実行が返すエラー
///
/// Wrapper と run-once guard はこのエラーを変換せずにそのまま呼び出し元へ返す。
#[derive(Debug, Error)]
pub enum TaskError {
    #[error("task failed: {0}")]
    Failed(String),

    #[error("missing argument: {0}")]
    MissingArgument(String),

    #[error("invalid argument {name}: {reason}")]
    InvalidArgument { name: String, reason: String },

    #[error("task not found: {0}")]
    NotFound(String),

    #[error("{0}")]
    Other(#[from] Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl TaskError {
    pub fn failed(reason: impl Into<String>) -> Self {
        Self::Failed(reason.into())
    }
}

/// RegistryError は TaskRegistry の操作エラー
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("task '{0}' is already registered")]
    AlreadyRegistered(String),
}

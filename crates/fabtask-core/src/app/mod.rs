//! App - アプリケーション層
//!
//! # 主要コンポーネント
//! - **AppBuilder**: task 登録と起動時検証
//! - **TaskRegistry**: 名前 → descriptor
//! - **Runtime**: 名前で task を呼び出す
//! - **TaskSummary**: 一覧表示用ビュー

pub mod builder;
pub mod registry;
pub mod runtime;
pub mod status;

// 主要な型を再エクスポート
pub use self::builder::{App, AppBuilder, BuildError};
pub use self::registry::TaskRegistry;
pub use self::runtime::Runtime;
pub use self::status::TaskSummary;

//! TaskArgs - Task に渡す位置引数と名前付き引数
//!
//! # 学習ポイント
//! - `serde_json::Value` で引数の型を呼び出し側に委ねる
//! - `DeserializeOwned` で取り出し時に型付きの値へデコードする

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::TaskError;

/// Positional plus named arguments for one task invocation.
///
/// # 使用例
/// ```ignore
/// let args = TaskArgs::new().arg("v1.2.0").kwarg("host", "web1");
/// let version: String = args.positional_as(0)?;
/// let host: String = args.named_as("host")?;
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskArgs {
    #[serde(default)]
    positional: Vec<Value>,

    #[serde(default)]
    named: Map<String, Value>,
}

impl TaskArgs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a positional argument.
    pub fn arg(mut self, value: impl Into<Value>) -> Self {
        self.positional.push(value.into());
        self
    }

    /// Set a named argument. A repeated key replaces the earlier value.
    pub fn kwarg(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.named.insert(key.into(), value.into());
        self
    }

    pub fn positional(&self) -> &[Value] {
        &self.positional
    }

    pub fn named(&self) -> &Map<String, Value> {
        &self.named
    }

    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.named.is_empty()
    }

    /// Decode the positional argument at `index`.
    pub fn positional_as<T: DeserializeOwned>(&self, index: usize) -> Result<T, TaskError> {
        let name = format!("#{index}");
        let value = self
            .positional
            .get(index)
            .ok_or_else(|| TaskError::MissingArgument(name.clone()))?;
        decode(name, value)
    }

    /// Decode the named argument `key`.
    pub fn named_as<T: DeserializeOwned>(&self, key: &str) -> Result<T, TaskError> {
        let value = self
            .named
            .get(key)
            .ok_or_else(|| TaskError::MissingArgument(key.to_string()))?;
        decode(key.to_string(), value)
    }

    /// Like `named_as`, but an absent key is `Ok(None)`.
    pub fn named_opt<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, TaskError> {
        match self.named.get(key) {
            Some(value) => decode(key.to_string(), value).map(Some),
            None => Ok(None),
        }
    }
}

fn decode<T: DeserializeOwned>(name: String, value: &Value) -> Result<T, TaskError> {
    T::deserialize(value).map_err(|e| TaskError::InvalidArgument {
        name,
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn builder_keeps_argument_order() {
        let args = TaskArgs::new().arg(1).arg("two").kwarg("three", 3);

        assert_eq!(args.positional(), &[json!(1), json!("two")]);
        assert_eq!(args.named().get("three"), Some(&json!(3)));
        assert!(!args.is_empty());
        assert!(TaskArgs::new().is_empty());
    }

    #[test]
    fn typed_accessors_decode_values() {
        let args = TaskArgs::new().arg(42).kwarg("host", "web1");

        let n: u32 = args.positional_as(0).unwrap();
        let host: String = args.named_as("host").unwrap();
        assert_eq!(n, 42);
        assert_eq!(host, "web1");
    }

    #[test]
    fn missing_and_invalid_arguments_are_reported() {
        let args = TaskArgs::new().kwarg("port", "not-a-number");

        assert!(matches!(
            args.positional_as::<u32>(0),
            Err(TaskError::MissingArgument(name)) if name == "#0"
        ));
        assert!(matches!(
            args.named_as::<u16>("port"),
            Err(TaskError::InvalidArgument { name, .. }) if name == "port"
        ));
        assert_eq!(args.named_opt::<String>("user").unwrap(), None);
    }

    #[test]
    fn args_deserialize_with_missing_sections() {
        let args: TaskArgs = serde_json::from_str(r#"{ "positional": ["a"] }"#).unwrap();
        assert_eq!(args.positional(), &[json!("a")]);
        assert!(args.named().is_empty());
    }
}

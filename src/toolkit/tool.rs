// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use serde::Serialize;
use serde_json::{json, Value};

/// Outcome of a tool call.
///
/// Failures are values, not errors: an agent loop can hand either variant
/// straight back to the model. Serializes untagged, so a failure is exactly
/// `{"error": "..."}` and a success is the upstream body as-is.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ApiResult {
    Success(Value),
    Failure { error: String },
}

impl ApiResult {
    pub fn failure(error: impl Into<String>) -> Self {
        Self::Failure {
            error: error.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Failure { .. })
    }

    /// Convert into the JSON value handed to the invoking layer
    pub fn into_value(self) -> Value {
        match self {
            Self::Success(value) => value,
            Self::Failure { error } => json!({ "error": error }),
        }
    }
}

/// Trait for tools that can be called by agents.
///
/// # Optimization Notes
/// - `name()` and `description()` return `&str` to avoid allocation on every call
/// - `schema()` returns `&Value` to avoid cloning the schema on every access
/// - Implementations should store these values in struct fields
#[async_trait]
pub trait Tool: Send + Sync {
    /// Returns the tool name (must be unique within a registry)
    fn name(&self) -> &str;

    /// Returns a human-readable description of what the tool does
    fn description(&self) -> &str;

    /// Returns the JSON schema for the tool's input parameters
    fn schema(&self) -> &Value;

    /// Execute the tool with the given input. Never fails; errors come back
    /// as [`ApiResult::Failure`].
    async fn execute(&self, input: Value) -> ApiResult;

    /// Function-calling definition in the shape LLM providers expect
    fn definition(&self) -> Value {
        json!({
            "type": "function",
            "function": {
                "name": self.name(),
                "description": self.description(),
                "parameters": self.schema()
            }
        })
    }
}

// SPDX-License-Identifier: MIT

//! Typed error handling for colourlovers-rs
//!
//! `ApiError` covers everything that can go wrong inside a single tool call.
//! Those errors never escape a tool: they are flattened into the soft
//! `{ "error": ... }` value by [`ApiResult`](crate::toolkit::tool::ApiResult).
//! `Error` covers the surrounding machinery (configuration, registry, server).

use reqwest::StatusCode;
use std::error::Error as StdError;
use thiserror::Error;

/// Failure of a single upstream API call
#[derive(Debug, Error)]
pub enum ApiError {
    /// Upstream answered with a non-2xx status
    #[error("upstream returned {status}: {detail}")]
    UpstreamHttp { status: StatusCode, detail: String },

    /// No response was received (connection refused, DNS, timeout...)
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// Body was not valid JSON
    #[error("response body is not valid JSON: {0}")]
    Decode(String),

    /// A required argument was absent or null
    #[error("missing required parameter '{0}'")]
    MissingParameter(String),

    /// An argument did not match its declared type
    #[error("invalid value for parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// The configured base URL cannot carry path segments
    #[error("invalid request URL: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    pub fn invalid(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Render the error together with its source chain.
    ///
    /// reqwest hides the interesting part ("Connection refused") in the
    /// sources, so the plain `Display` output is not enough for callers that
    /// only ever see the message.
    pub fn detailed_message(&self) -> String {
        let mut message = self.to_string();
        let mut source = self.source();
        while let Some(err) = source {
            let text = err.to_string();
            if !message.contains(&text) {
                message.push_str(": ");
                message.push_str(&text);
            }
            source = err.source();
        }
        message
    }
}

/// Top-level error type for colourlovers-rs
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration errors (bad base URL, unknown tool name, bad env value)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Tool not found in the registry
    #[error("Tool '{name}' not found")]
    ToolNotFound { name: String },

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    /// URL parsing errors
    #[error(transparent)]
    Url(#[from] url::ParseError),

    /// HTTP client construction errors
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

impl Error {
    /// Create a tool not found error
    pub fn tool_not_found(name: impl Into<String>) -> Self {
        Self::ToolNotFound { name: name.into() }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

// SPDX-License-Identifier: MIT

//! LLM-callable tools for the COLOURlovers color and palette API.

pub mod colourlovers;
pub mod config;
pub mod server;
pub mod toolkit;

pub use toolkit::error::{ApiError, Error};
pub use toolkit::registry::ToolRegistry;
pub use toolkit::tool::{ApiResult, Tool};

// SPDX-License-Identifier: MIT

//! COLOURlovers API tools
//!
//! Every endpoint is a row in [`endpoint::ENDPOINTS`]; a single
//! [`client::ColourLoversClient`] executes all of them.

pub mod client;
pub mod endpoint;
pub mod params;
pub mod tools;

pub use client::ColourLoversClient;
pub use tools::{create_tools, ColourLoversTool};

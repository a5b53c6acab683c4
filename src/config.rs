// SPDX-License-Identifier: MIT

//! Runtime configuration
//!
//! Built-in defaults, overridden by an optional YAML file, overridden by
//! `COLOURLOVERS_*` environment variables.

use crate::colourlovers::endpoint::DEFAULT_BASE_URL;
use crate::toolkit::error::Error;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;
use std::time::Duration;
use url::Url;

pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Root of the upstream API; endpoint paths are appended to it
    pub base_url: Url,
    /// Per-request timeout. None means no timeout.
    pub timeout_secs: Option<u64>,
    /// Restrict the tool set to these names. None enables every tool.
    pub tools: Option<Vec<String>>,
    /// Port for `serve`
    pub port: u16,
}

/// On-disk shape of the YAML config file; every key is optional
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub tools: Option<Vec<String>>,
    pub port: Option<u16>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            timeout_secs: None,
            tools: None,
            port: DEFAULT_PORT,
        }
    }
}

impl Config {
    /// Defaults, then `path` if given, then the process environment
    pub fn load(path: Option<&Path>) -> Result<Self, Error> {
        let mut config = Self::default();
        if let Some(path) = path {
            log::info!("Loading config from {}", path.display());
            let content = fs::read_to_string(path)?;
            config.apply_file(serde_yaml::from_str(&content)?)?;
        }
        config.apply_env(|key| env::var(key).ok())?;
        Ok(config)
    }

    /// Parse a YAML document on top of the defaults
    pub fn from_yaml(content: &str) -> Result<Self, Error> {
        let mut config = Self::default();
        config.apply_file(serde_yaml::from_str(content)?)?;
        Ok(config)
    }

    pub fn apply_file(&mut self, file: ConfigFile) -> Result<(), Error> {
        if let Some(base_url) = file.base_url {
            self.base_url = parse_base_url(&base_url)?;
        }
        if file.timeout_secs.is_some() {
            self.timeout_secs = file.timeout_secs;
        }
        if file.tools.is_some() {
            self.tools = file.tools;
        }
        if let Some(port) = file.port {
            self.port = port;
        }
        Ok(())
    }

    /// Apply overrides from `lookup`, normally `std::env::var`
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(base_url) = lookup("COLOURLOVERS_BASE_URL") {
            self.base_url = parse_base_url(&base_url)?;
        }
        if let Some(secs) = lookup("COLOURLOVERS_TIMEOUT_SECS") {
            let secs = secs.trim().parse().map_err(|_| {
                Error::config(format!("COLOURLOVERS_TIMEOUT_SECS is not a number: {}", secs))
            })?;
            self.timeout_secs = Some(secs);
        }
        if let Some(tools) = lookup("COLOURLOVERS_TOOLS") {
            self.tools = Some(
                tools
                    .split(',')
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .map(String::from)
                    .collect(),
            );
        }
        if let Some(port) = lookup("COLOURLOVERS_PORT") {
            self.port = port
                .trim()
                .parse()
                .map_err(|_| Error::config(format!("COLOURLOVERS_PORT is not a port: {}", port)))?;
        }
        Ok(())
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

fn parse_base_url(raw: &str) -> Result<Url, Error> {
    let url = Url::parse(raw)?;
    if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
        return Err(Error::config(format!(
            "base_url must be an http(s) URL, got {}",
            raw
        )));
    }
    Ok(url)
}

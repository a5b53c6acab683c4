// SPDX-License-Identifier: MIT

use super::client::ColourLoversClient;
use super::endpoint::{self, Endpoint, ENDPOINTS};
use crate::config::Config;
use crate::toolkit::error::Error;
use crate::toolkit::tool::{ApiResult, Tool};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

/// One COLOURlovers endpoint exposed as a tool
pub struct ColourLoversTool {
    client: ColourLoversClient,
    endpoint: &'static Endpoint,
    schema: Value,
}

impl ColourLoversTool {
    pub fn new(client: ColourLoversClient, endpoint: &'static Endpoint) -> Self {
        Self {
            client,
            schema: endpoint.schema(),
            endpoint,
        }
    }
}

#[async_trait]
impl Tool for ColourLoversTool {
    fn name(&self) -> &str {
        self.endpoint.name
    }

    fn description(&self) -> &str {
        self.endpoint.description
    }

    fn schema(&self) -> &Value {
        &self.schema
    }

    async fn execute(&self, input: Value) -> ApiResult {
        match self.client.fetch(self.endpoint, input).await {
            Ok(body) => ApiResult::Success(body),
            Err(e) => {
                let message = e.detailed_message();
                log::error!("Error {}: {}", self.endpoint.action, message);
                ApiResult::failure(format!(
                    "An error occurred while {}: {}",
                    self.endpoint.action, message
                ))
            }
        }
    }
}

// --- Factory ---

/// Build one tool per endpoint, limited to `config.tools` when set
pub fn create_tools(config: &Config) -> Result<Vec<Arc<dyn Tool>>, Error> {
    let client = ColourLoversClient::new(config)?;

    let endpoints: Vec<&'static Endpoint> = match &config.tools {
        Some(names) => names
            .iter()
            .map(|name| {
                endpoint::find(name)
                    .ok_or_else(|| Error::config(format!("unknown tool in config: {}", name)))
            })
            .collect::<Result<_, _>>()?,
        None => ENDPOINTS.iter().collect(),
    };

    Ok(endpoints
        .into_iter()
        .map(|e| Arc::new(ColourLoversTool::new(client.clone(), e)) as Arc<dyn Tool>)
        .collect())
}

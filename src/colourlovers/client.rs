// SPDX-License-Identifier: MIT

//! Generic GET executor shared by every COLOURlovers tool

use super::endpoint::Endpoint;
use super::params::Placement;
use crate::config::Config;
use crate::toolkit::error::{ApiError, Error};
use reqwest::{Client, Url};
use serde_json::{Map, Value};

#[derive(Clone)]
pub struct ColourLoversClient {
    client: Client,
    base_url: Url,
}

impl ColourLoversClient {
    pub fn new(config: &Config) -> Result<Self, Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        log::info!(
            "COLOURlovers client: base_url={}, timeout={:?}",
            config.base_url,
            config.timeout()
        );

        Ok(Self {
            client: builder.build()?,
            base_url: config.base_url.clone(),
        })
    }

    /// Build the fully-qualified request URL for `endpoint`.
    ///
    /// Path parameters become single percent-encoded segments. Query
    /// parameters are form-encoded in declaration order; see
    /// [`ParamSpec::resolve`](super::params::ParamSpec::resolve) for which
    /// ones are sent.
    pub fn build_url(&self, endpoint: &Endpoint, args: &Map<String, Value>) -> Result<Url, ApiError> {
        for key in args.keys() {
            if endpoint.param(key).is_none() {
                log::debug!("{}: ignoring undeclared argument '{}'", endpoint.name, key);
            }
        }

        let mut segments = Vec::new();
        for segment in endpoint.path.split('/') {
            match segment
                .strip_prefix('{')
                .and_then(|s| s.strip_suffix('}'))
            {
                Some(name) => {
                    let param = endpoint
                        .param(name)
                        .filter(|p| p.placement == Placement::Path)
                        .ok_or_else(|| {
                            ApiError::InvalidUrl(format!(
                                "path template '{}' references undeclared parameter '{}'",
                                endpoint.path, name
                            ))
                        })?;
                    let value = param
                        .resolve(args)?
                        .ok_or_else(|| ApiError::MissingParameter(name.to_string()))?;
                    segments.push(value);
                }
                None => segments.push(segment.to_string()),
            }
        }

        let mut pairs = Vec::new();
        for param in endpoint.query_params() {
            if let Some(value) = param.resolve(args)? {
                pairs.push((param.name, value));
            }
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(format!("{} cannot be a base URL", self.base_url)))?
            .pop_if_empty()
            .extend(&segments);
        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs);
        }

        Ok(url)
    }

    /// Perform one GET against `endpoint` and decode the JSON body
    pub async fn fetch(&self, endpoint: &Endpoint, input: Value) -> Result<Value, ApiError> {
        let args = match input {
            Value::Object(map) => map,
            Value::Null => Map::new(),
            other => {
                return Err(ApiError::invalid(
                    "arguments",
                    format!("expected an object, got {}", other),
                ))
            }
        };

        if args.get("format").and_then(Value::as_str) == Some("xml") {
            log::warn!(
                "{}: format=xml requested; the response will not decode as JSON",
                endpoint.name
            );
        }

        let url = self.build_url(endpoint, &args)?;
        log::debug!("GET {}", url);

        let resp = self.client.get(url).send().await?;
        let status = resp.status();
        let text = resp.text().await?;

        if !status.is_success() {
            // Prefer the compact JSON form of the error body when there is one
            let detail = serde_json::from_str::<Value>(&text)
                .map(|v| v.to_string())
                .unwrap_or(text);
            return Err(ApiError::UpstreamHttp { status, detail });
        }

        serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

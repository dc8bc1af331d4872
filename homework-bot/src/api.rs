//! Client for the homework review API: one GET per poll, `from_date` cursor, OAuth header.

use std::time::Duration;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, StatusCode};
use serde_json::Value;
use tracing::{debug, instrument};

use crate::config::Config;
use crate::error::PollError;

/// Review API client. Holds the endpoint and token; no retries, the poll interval is the retry.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    endpoint: String,
    token: String,
}

impl ApiClient {
    pub fn new(endpoint: String, token: String, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint,
            token,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, reqwest::Error> {
        Self::new(
            config.endpoint.clone(),
            config.practicum_token.clone(),
            config.http_timeout(),
        )
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetches review statuses changed since `timestamp`. Returns the JSON body untouched.
    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    pub async fn fetch(&self, timestamp: i64) -> Result<Value, PollError> {
        let response = self
            .client
            .get(&self.endpoint)
            .header(AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&[("from_date", timestamp)])
            .send()
            .await
            .map_err(|e| PollError::Connection {
                endpoint: self.endpoint.clone(),
                cause: format!("{:#}", anyhow::Error::new(e)),
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            let content_type = response
                .headers()
                .get(CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .unwrap_or("none")
                .to_string();
            return Err(PollError::StatusCode {
                endpoint: self.endpoint.clone(),
                timestamp,
                content_type,
                status: status.as_u16(),
                url: response.url().to_string(),
            });
        }

        debug!(status = status.as_u16(), "Review API responded");

        response
            .json::<Value>()
            .await
            .map_err(|e| PollError::Decode(format!("invalid API response body: {}", e)))
    }
}

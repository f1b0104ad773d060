// src/utils/http.rs

//! HTTP transport utilities.
//!
//! All catalog and feed requests go through the [`Transport`] trait so
//! services can be exercised against canned responses in tests. The real
//! implementation applies a fixed delay after every request as a
//! self-imposed rate limit.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;
use crate::models::HttpConfig;

/// A GET-with-query-parameters JSON fetcher.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issue a GET request, returning the parsed JSON body.
    ///
    /// Fails on network errors, non-success status, and malformed JSON.
    async fn get_json(&self, url: &str, params: &[(&str, &str)]) -> Result<Value>;
}

/// Transport backed by a configured `reqwest` client.
pub struct HttpTransport {
    client: reqwest::Client,
    delay: Duration,
}

impl HttpTransport {
    /// Create a transport with the configured user agent, timeout, and
    /// inter-request delay.
    pub fn new(config: &HttpConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            delay: Duration::from_millis(config.request_delay_ms),
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get_json(&self, url: &str, params: &[(&str, &str)]) -> Result<Value> {
        let response = self.client.get(url).query(params).send().await?;

        // The delay applies regardless of response status.
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let response = response.error_for_status()?;
        Ok(response.json().await?)
    }
}

//! REST client for the terminal bridge.

use crate::error::{Mt5Error, Result};
use crate::types::{LoginRequest, StatusResponse};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

/// Default address of the local terminal bridge.
pub const DEFAULT_BRIDGE_URL: &str = "http://127.0.0.1:6542";

/// Configuration for the bridge client.
#[derive(Debug, Clone)]
pub struct Mt5ClientConfig {
    /// Base URL for the bridge.
    pub base_url: String,

    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for Mt5ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BRIDGE_URL.to_string(),
            timeout_secs: 30,
        }
    }
}

impl Mt5ClientConfig {
    /// Sets the base URL.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Typed REST client for a local terminal bridge.
pub struct Mt5BridgeClient {
    http: Client,
    base_url: String,
}

impl Mt5BridgeClient {
    /// Creates a client for the configured bridge.
    ///
    /// # Errors
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: Mt5ClientConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Reports whether the terminal behind the bridge is up and
    /// initialized.
    ///
    /// # Errors
    /// Returns an error when the bridge is unreachable or answers with an
    /// error status.
    pub async fn status(&self) -> Result<StatusResponse> {
        self.get("/status").await
    }

    /// Logs the trading account in on the terminal.
    ///
    /// # Errors
    /// Returns `Mt5Error::Authentication` when the terminal refuses the
    /// credentials, and transport/API errors otherwise.
    pub async fn login(&self, account: u64, password: &str, server: &str) -> Result<()> {
        let request = LoginRequest {
            account,
            password: password.to_string(),
            server: server.to_string(),
        };

        let response = self
            .http
            .post(self.url("/login"))
            .json(&request)
            .send()
            .await?;

        match response.status() {
            status if status.is_success() => Ok(()),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                Err(Mt5Error::Authentication(error_detail(response).await))
            }
            status => Err(Mt5Error::api(
                status.as_u16(),
                error_detail(response).await,
            )),
        }
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let response = self.http.get(self.url(endpoint)).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Mt5Error::api(status.as_u16(), error_detail(response).await));
        }

        Ok(response.json().await?)
    }

    pub(crate) async fn get_optional<T: DeserializeOwned>(
        &self,
        endpoint: &str,
    ) -> Result<Option<T>> {
        let response = self.http.get(self.url(endpoint)).send().await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(Mt5Error::api(status.as_u16(), error_detail(response).await));
        }

        Ok(Some(response.json().await?))
    }

    pub(crate) async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T> {
        let response = self
            .http
            .post(self.url(endpoint))
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Mt5Error::api(status.as_u16(), error_detail(response).await));
        }

        Ok(response.json().await?)
    }

    pub(crate) fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }
}

async fn error_detail(response: reqwest::Response) -> String {
    response
        .text()
        .await
        .unwrap_or_else(|_| "no detail".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_points_at_local_bridge() {
        let config = Mt5ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_BRIDGE_URL);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn builder_methods_chain() {
        let config = Mt5ClientConfig::default()
            .with_base_url("http://10.0.0.5:8080")
            .with_timeout_secs(5);

        assert_eq!(config.base_url, "http://10.0.0.5:8080");
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn url_joins_base_and_endpoint() {
        let client = Mt5BridgeClient::new(
            Mt5ClientConfig::default().with_base_url("http://127.0.0.1:6542"),
        )
        .unwrap();

        assert_eq!(
            client.url("/symbols/EURUSD/tick"),
            "http://127.0.0.1:6542/symbols/EURUSD/tick"
        );
    }
}

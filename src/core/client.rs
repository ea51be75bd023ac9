use crate::core::{AuthToken, ConfigProvider, Credentials, CustomerApi, CustomerPayload};
use crate::utils::error::{Result, VanMoofError};
use async_trait::async_trait;
use reqwest::{Client, Response};
use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "https://my.vanmoof.com/api/v8";
pub const DEFAULT_API_KEY: &str = "fcb38d47-f14b-30cf-843b-26283f6a5819";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub(crate) const API_KEY_HEADER: &str = "Api-Key";

/// HTTP client for the vendor account API.
///
/// Base URL, API key and timeout come from configuration so tests can point
/// the client at a mock server. Idle connections are not kept, so every
/// request opens its own connection.
#[derive(Debug, Clone)]
pub struct ApiClient {
    pub(crate) client: Client,
    pub(crate) base_url: String,
    pub(crate) api_key: String,
}

impl ApiClient {
    pub fn new(base_url: &str, api_key: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(0)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Self::new(
            config.api_base_url(),
            config.api_key(),
            config.request_timeout(),
        )
    }

    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Turns a non-success status into an error carrying the response body.
    pub(crate) async fn ensure_success(endpoint: &str, response: Response) -> Result<Response> {
        let status = response.status();
        tracing::debug!("{} responded with {}", endpoint, status);

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(VanMoofError::HttpStatusError {
            endpoint: endpoint.to_string(),
            status: status.as_u16(),
            body,
        })
    }
}

#[async_trait]
impl CustomerApi for ApiClient {
    async fn authenticate(&self, credentials: Credentials) -> Result<AuthToken> {
        ApiClient::authenticate(self, credentials).await
    }

    async fn fetch_customer_data(&self, token: &AuthToken) -> Result<CustomerPayload> {
        ApiClient::fetch_customer_data(self, token).await
    }
}

use crate::core::client::{ApiClient, API_KEY_HEADER};
use crate::core::{AuthToken, CustomerPayload};
use crate::utils::error::{Result, VanMoofError};
use reqwest::header::AUTHORIZATION;

impl ApiClient {
    /// Fetches the full account payload, bike details included.
    ///
    /// The body is returned unvalidated; only the extractor interprets it.
    pub async fn fetch_customer_data(&self, token: &AuthToken) -> Result<CustomerPayload> {
        let endpoint = self.endpoint("getCustomerData");

        let response = self
            .client
            .get(&endpoint)
            .header(API_KEY_HEADER, &self.api_key)
            .header(AUTHORIZATION, format!("Bearer {}", token.as_str()))
            .query(&[("includeBikeDetails", "")])
            .send()
            .await?;

        let response = Self::ensure_success(&endpoint, response).await?;
        let raw = response.bytes().await?.to_vec();
        tracing::debug!("Received {} bytes of customer data", raw.len());

        CustomerPayload::from_slice(raw)
            .map_err(|source| VanMoofError::InvalidResponseError { endpoint, source })
    }
}

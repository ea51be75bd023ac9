use crate::core::client::{ApiClient, API_KEY_HEADER};
use crate::core::{AuthToken, Credentials};
use crate::utils::error::{Result, VanMoofError};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::header::AUTHORIZATION;

/// `Basic` authorization value for the given credentials.
pub fn basic_auth_header(credentials: &Credentials) -> String {
    let pair = format!("{}:{}", credentials.username, credentials.password);
    format!("Basic {}", STANDARD.encode(pair.as_bytes()))
}

/// Pulls the token out of an `/authenticate` response body.
///
/// An `error` key wins over any token that may also be present.
pub fn token_from_response(body: &serde_json::Value) -> Result<AuthToken> {
    let Some(object) = body.as_object() else {
        return Err(VanMoofError::authentication(
            "unexpected authentication response",
        ));
    };

    if let Some(error) = object.get("error") {
        tracing::error!(response = %body, "authentication rejected");
        return Err(VanMoofError::authentication(format!(
            "server reported {}",
            error
        )));
    }

    object
        .get("token")
        .and_then(serde_json::Value::as_str)
        .filter(|token| !token.is_empty())
        .map(AuthToken::new)
        .ok_or_else(|| VanMoofError::authentication("No token in response"))
}

impl ApiClient {
    /// Exchanges credentials for a session token with a single POST.
    pub async fn authenticate(&self, credentials: Credentials) -> Result<AuthToken> {
        let endpoint = self.endpoint("authenticate");
        let authorization = basic_auth_header(&credentials);
        drop(credentials);

        let response = self
            .client
            .post(&endpoint)
            .header(API_KEY_HEADER, &self.api_key)
            .header(AUTHORIZATION, authorization)
            .send()
            .await?;

        let response = Self::ensure_success(&endpoint, response).await?;
        let body: serde_json::Value = response.json().await?;

        token_from_response(&body)
    }
}

use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use crate::error::{ApiError, ApiResult};
use crate::types::{parse_request_token_body, AuthorizeRequest, RequestTokenGrant};

#[derive(Debug, Clone)]
pub struct AuthApi {
    client: Client,
    base_url: String,
}

impl AuthApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .user_agent("pocket-tui/0.1")
            .connect_timeout(Duration::from_secs(5))
            .timeout(Duration::from_secs(20))
            .build()
            .unwrap_or_else(|_| Client::new());
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Asks the backend for a fresh request token and the authorization URI
    /// the user has to visit. One call per login attempt, no retries.
    pub async fn request_token(&self) -> ApiResult<RequestTokenGrant> {
        let response = self
            .client
            .post(format!("{}/auth/pocket", self.base_url))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }

        let body = response.text().await?;
        debug!("request-token response received");
        parse_request_token_body(&body)
    }

    /// Exchanges the stored request token for the final authorization
    /// result. Only the status code matters; the body is ignored. A missing
    /// token is sent as null, for backends that do not require one.
    pub async fn authorize(&self, request_token: Option<&str>) -> ApiResult<()> {
        let response = self
            .client
            .post(format!("{}/auth/authorize", self.base_url))
            .json(&AuthorizeRequest { request_token })
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(ApiError::Status(status))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn transport_failure_maps_to_network_error() {
        // Nothing listens on a reserved port; the connect fails immediately.
        let api = AuthApi::new("http://127.0.0.1:1");
        match api.authorize(Some("abc")).await {
            Err(ApiError::Network(_)) => {}
            other => panic!("expected network error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn request_token_transport_failure_maps_to_network_error() {
        let api = AuthApi::new("http://127.0.0.1:1");
        match api.request_token().await {
            Err(ApiError::Network(_)) => {}
            other => panic!("expected network error, got {other:?}"),
        }
    }
}

use crate::domain::install::AccessToken;
use crate::error::{AppError, AppResult};

const SITES_PATH: &str = "/beta/sites";
const ACCEPT_VERSION: &str = "1.0.0";

/// Raw upstream reply, passed back to callers untouched
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

/// Webflow API client bound to one access token.
///
/// Built per request from the stored token and dropped afterwards; the
/// underlying `reqwest::Client` is only a shared connection pool.
pub struct WebflowApiClient {
    http_client: reqwest::Client,
    base_url: String,
    token: AccessToken,
}

impl WebflowApiClient {
    pub fn new(http_client: reqwest::Client, base_url: &str, token: AccessToken) -> Self {
        Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    /// List the sites the installed app can access
    pub async fn list_sites(&self) -> AppResult<UpstreamResponse> {
        self.get(SITES_PATH).await
    }

    /// Issue an authenticated GET and return the reply verbatim
    pub async fn get(&self, path: &str) -> AppResult<UpstreamResponse> {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .http_client
            .get(&url)
            .bearer_auth(self.token.as_str())
            .header("Accept", "application/json")
            .header("accept-version", ACCEPT_VERSION)
            .send()
            .await
            .map_err(|e| AppError::ExternalService(format!("Webflow request failed: {}", e)))?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response
            .bytes()
            .await
            .map_err(|e| AppError::ExternalService(format!("Failed to read Webflow response: {}", e)))?
            .to_vec();

        tracing::debug!(url = %url, status, bytes = body.len(), "Webflow API call completed");

        Ok(UpstreamResponse {
            status,
            content_type,
            body,
        })
    }
}

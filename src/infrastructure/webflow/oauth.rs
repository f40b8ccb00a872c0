use crate::error::{AppError, AppResult};
use crate::infrastructure::config::WebflowConfig;
use async_trait::async_trait;
use serde::Deserialize;
use std::fmt;

const TOKEN_PATH: &str = "/oauth/access_token";

/// Access token returned by a successful code exchange
#[derive(Clone, Deserialize)]
pub struct WebflowAccessToken {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub scope: Option<String>,
}

impl fmt::Debug for WebflowAccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebflowAccessToken")
            .field("access_token", &"[redacted]")
            .field("token_type", &self.token_type)
            .field("scope", &self.scope)
            .finish()
    }
}

/// Body of the token endpoint. Webflow reports some failures with a 200 and
/// an `error` field, so every field is optional here.
#[derive(Debug, Deserialize)]
struct TokenEndpointResponse {
    access_token: Option<String>,
    token_type: Option<String>,
    scope: Option<String>,
    error: Option<String>,
    error_description: Option<String>,
}

/// The authorization-server half of the install flow.
#[async_trait]
pub trait OAuthProvider: Send + Sync {
    /// URL the user is sent to in order to approve the install
    fn authorization_url(&self) -> String;

    /// Exchange an authorization code for an access token
    ///
    /// # Errors
    /// Returns `AppError::UpstreamAuth` if the code is rejected or the token
    /// endpoint cannot be reached. The call is never retried.
    async fn exchange_code(&self, code: &str) -> AppResult<WebflowAccessToken>;
}

pub struct WebflowOAuthClient {
    client_id: String,
    client_secret: String,
    redirect_uri: Option<String>,
    scopes: Vec<String>,
    authorize_url: String,
    token_url: String,
    http_client: reqwest::Client,
}

impl WebflowOAuthClient {
    pub fn new(config: &WebflowConfig, http_client: reqwest::Client) -> Self {
        Self {
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
            redirect_uri: config.redirect_uri.clone(),
            scopes: config.scopes.clone(),
            authorize_url: config.authorize_url.clone(),
            token_url: format!("{}{}", config.api_base_url.trim_end_matches('/'), TOKEN_PATH),
            http_client,
        }
    }
}

#[async_trait]
impl OAuthProvider for WebflowOAuthClient {
    fn authorization_url(&self) -> String {
        let mut url = format!(
            "{}?response_type=code&client_id={}",
            self.authorize_url,
            urlencoding::encode(&self.client_id)
        );

        if let Some(redirect_uri) = &self.redirect_uri {
            url.push_str("&redirect_uri=");
            url.push_str(&urlencoding::encode(redirect_uri));
        }

        if !self.scopes.is_empty() {
            url.push_str("&scope=");
            url.push_str(&urlencoding::encode(&self.scopes.join(" ")));
        }

        url
    }

    async fn exchange_code(&self, code: &str) -> AppResult<WebflowAccessToken> {
        let mut params = vec![
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
            ("code", code),
            ("grant_type", "authorization_code"),
        ];
        if let Some(redirect_uri) = &self.redirect_uri {
            params.push(("redirect_uri", redirect_uri.as_str()));
        }

        let response = self
            .http_client
            .post(&self.token_url)
            .header("Accept", "application/json")
            .form(&params)
            .send()
            .await
            .map_err(|e| AppError::UpstreamAuth(format!("token exchange request failed: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::UpstreamAuth(format!("failed to read token response: {}", e)))?;

        let parsed = serde_json::from_str::<TokenEndpointResponse>(&body).ok();

        if !status.is_success() {
            let reason = parsed
                .and_then(|p| p.error_description.or(p.error))
                .unwrap_or(body);
            return Err(AppError::UpstreamAuth(format!(
                "token exchange rejected ({}): {}",
                status.as_u16(),
                reason
            )));
        }

        let parsed = parsed.ok_or_else(|| {
            AppError::UpstreamAuth("token response is not valid JSON".to_string())
        })?;

        if let Some(error) = parsed.error {
            return Err(AppError::UpstreamAuth(format!(
                "token exchange rejected: {}",
                parsed.error_description.unwrap_or(error)
            )));
        }

        match parsed.access_token {
            Some(access_token) if !access_token.is_empty() => Ok(WebflowAccessToken {
                access_token,
                token_type: parsed.token_type,
                scope: parsed.scope,
            }),
            _ => Err(AppError::UpstreamAuth(
                "token response has no access_token".to_string(),
            )),
        }
    }
}

use super::error::InstallServiceError;
use super::model::AccessToken;
use crate::infrastructure::repositories::{TokenRepository, ACCESS_TOKEN_KEY};
use crate::infrastructure::webflow::OAuthProvider;
use async_trait::async_trait;
use std::sync::Arc;

/// Drives the OAuth authorization-code install and owns the stored token.
pub struct InstallService {
    oauth_client: Arc<dyn OAuthProvider>,
    token_repo: Arc<dyn TokenRepository>,
}

impl InstallService {
    pub fn new(oauth_client: Arc<dyn OAuthProvider>, token_repo: Arc<dyn TokenRepository>) -> Self {
        Self {
            oauth_client,
            token_repo,
        }
    }
}

#[async_trait]
pub trait InstallServiceApi: Send + Sync {
    /// Authorization URL that starts the install; pure for a fixed config
    fn build_install_url(&self) -> String;

    /// Trade an authorization code for an access token. Nothing is stored.
    async fn complete_install(&self, code: &str) -> Result<AccessToken, InstallServiceError>;

    /// Replace the stored token
    async fn persist_token(&self, token: &AccessToken) -> Result<(), InstallServiceError>;

    /// Most recently stored token
    async fn current_token(&self) -> Result<AccessToken, InstallServiceError>;

    /// `complete_install` followed by `persist_token`
    async fn install(&self, code: &str) -> Result<AccessToken, InstallServiceError> {
        let token = self.complete_install(code).await?;
        self.persist_token(&token).await?;
        Ok(token)
    }
}

#[async_trait]
impl InstallServiceApi for InstallService {
    fn build_install_url(&self) -> String {
        self.oauth_client.authorization_url()
    }

    async fn complete_install(&self, code: &str) -> Result<AccessToken, InstallServiceError> {
        let exchanged = self.oauth_client.exchange_code(code).await?;

        tracing::info!(
            token_type = exchanged.token_type.as_deref().unwrap_or("unknown"),
            scope = exchanged.scope.as_deref().unwrap_or(""),
            "Webflow install completed"
        );

        Ok(AccessToken::new(exchanged.access_token))
    }

    async fn persist_token(&self, token: &AccessToken) -> Result<(), InstallServiceError> {
        self.token_repo
            .save(ACCESS_TOKEN_KEY, token.as_str())
            .await
            .map_err(InstallServiceError::from)?;

        tracing::debug!("Access token stored");
        Ok(())
    }

    async fn current_token(&self) -> Result<AccessToken, InstallServiceError> {
        self.token_repo
            .load(ACCESS_TOKEN_KEY)
            .await
            .map_err(InstallServiceError::from)?
            .map(AccessToken::new)
            .ok_or(InstallServiceError::NotInstalled)
    }
}

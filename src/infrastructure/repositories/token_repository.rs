use crate::error::AppResult;
use async_trait::async_trait;

/// Key under which the installed app's access token is stored
pub const ACCESS_TOKEN_KEY: &str = "webflow_access_token";

/// Key/value storage for app credentials.
///
/// Each key holds at most one value and `save` overwrites whatever was there
/// before (last write wins). The install flow only ever uses
/// [`ACCESS_TOKEN_KEY`].
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// Store `value` under `key`, replacing any previous value
    ///
    /// # Errors
    /// Returns `AppError::Storage` if the underlying medium rejects the write
    async fn save(&self, key: &str, value: &str) -> AppResult<()>;

    /// Load the value stored under `key`, or `None` if nothing was saved yet
    async fn load(&self, key: &str) -> AppResult<Option<String>>;

    /// Whether the storage medium is reachable
    async fn health_check(&self) -> bool;
}

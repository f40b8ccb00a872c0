use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum InstallServiceError {
    #[error("upstream authorization failed: {0}")]
    Upstream(String),
    #[error("storage error: {0}")]
    Storage(String),
    #[error("app not installed")]
    NotInstalled,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<AppError> for InstallServiceError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::UpstreamAuth(msg) => InstallServiceError::Upstream(msg),
            AppError::Storage(msg) => InstallServiceError::Storage(msg),
            AppError::NotInstalled => InstallServiceError::NotInstalled,
            other => InstallServiceError::Other(anyhow::anyhow!(other.to_string())),
        }
    }
}

impl From<InstallServiceError> for AppError {
    fn from(err: InstallServiceError) -> Self {
        match err {
            InstallServiceError::Upstream(msg) => AppError::UpstreamAuth(msg),
            InstallServiceError::Storage(msg) => AppError::Storage(msg),
            InstallServiceError::NotInstalled => AppError::NotInstalled,
            InstallServiceError::Other(e) => AppError::Internal(e.to_string()),
        }
    }
}

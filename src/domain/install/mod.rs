pub mod error;
pub mod model;
pub mod service;

pub use error::InstallServiceError;
pub use model::AccessToken;
pub use service::{InstallService, InstallServiceApi};

use serde::Deserialize;

/// Query parameters of the install endpoint
#[derive(Debug, Deserialize)]
pub struct InstallationRequest {
    pub code: Option<String>,
}

impl InstallationRequest {
    /// The authorization code, treating an empty value as absent
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref().filter(|c| !c.is_empty())
    }
}

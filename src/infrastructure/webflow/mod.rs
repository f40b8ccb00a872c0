pub mod api;
pub mod oauth;

pub use api::{UpstreamResponse, WebflowApiClient};
pub use oauth::{OAuthProvider, WebflowAccessToken, WebflowOAuthClient};

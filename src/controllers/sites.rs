use axum::{
    body::Body,
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use crate::{
    domain::install::InstallServiceApi,
    error::{AppError, AppResult},
    infrastructure::webflow::WebflowApiClient,
};

pub struct SitesController {
    install_service: Arc<dyn InstallServiceApi>,
    http_client: reqwest::Client,
    api_base_url: String,
}

impl SitesController {
    pub fn new(
        install_service: Arc<dyn InstallServiceApi>,
        http_client: reqwest::Client,
        api_base_url: String,
    ) -> Self {
        Self {
            install_service,
            http_client,
            api_base_url,
        }
    }

    /// GET /sites - List Webflow sites with the stored token
    ///
    /// The upstream status, content type and body are returned untouched.
    pub async fn list_sites(State(controller): State<Arc<SitesController>>) -> AppResult<Response> {
        let token = controller.install_service.current_token().await?;

        let webflow = WebflowApiClient::new(
            controller.http_client.clone(),
            &controller.api_base_url,
            token,
        );
        let upstream = webflow.list_sites().await?;

        let status = StatusCode::from_u16(upstream.status).map_err(|_| {
            AppError::ExternalService(format!("Invalid upstream status {}", upstream.status))
        })?;
        let content_type = upstream
            .content_type
            .unwrap_or_else(|| "application/json".to_string());

        Ok((
            status,
            [(header::CONTENT_TYPE, content_type)],
            Body::from(upstream.body),
        )
            .into_response())
    }
}

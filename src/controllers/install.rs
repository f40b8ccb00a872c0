use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
};
use std::sync::Arc;

use crate::{
    domain::install::{InstallServiceApi, InstallationRequest},
    error::{AppError, AppResult},
    infrastructure::static_site::StaticSite,
};

pub struct InstallController {
    install_service: Arc<dyn InstallServiceApi>,
    site: Arc<StaticSite>,
}

impl InstallController {
    pub fn new(install_service: Arc<dyn InstallServiceApi>, site: Arc<StaticSite>) -> Self {
        Self {
            install_service,
            site,
        }
    }

    /// GET /auth - Install the app on Webflow
    ///
    /// Query params:
    /// - code: Optional authorization code. Without it the user is redirected
    ///   (302) to Webflow to approve the install. With it the code is
    ///   exchanged, the token stored, and the front-end served so the page
    ///   load itself signals success.
    pub async fn install(
        State(controller): State<Arc<InstallController>>,
        query: Result<Query<InstallationRequest>, QueryRejection>,
    ) -> AppResult<Response> {
        let Query(params) = query.map_err(|e| AppError::BadRequest(e.body_text()))?;

        let Some(code) = params.code() else {
            let install_url = controller.install_service.build_install_url();
            tracing::debug!("No authorization code, redirecting to Webflow");
            return Ok((StatusCode::FOUND, [(header::LOCATION, install_url)]).into_response());
        };

        controller.install_service.install(code).await?;

        let html = controller.site.index_document().await?;
        Ok(Html(html).into_response())
    }
}

use axum::{extract::State, response::Html};
use std::sync::Arc;

use crate::{error::AppResult, infrastructure::static_site::StaticSite};

pub struct HomeController {
    site: Arc<StaticSite>,
}

impl HomeController {
    pub fn new(site: Arc<StaticSite>) -> Self {
        Self { site }
    }

    /// GET / - Front-end entry document
    pub async fn index(State(controller): State<Arc<HomeController>>) -> AppResult<Html<String>> {
        Ok(Html(controller.site.index_document().await?))
    }
}

pub mod request_id;

use axum::{middleware, routing::get, Router};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::controllers::{
    health, home::HomeController, install::InstallController, sites::SitesController,
};
use crate::infrastructure::config::Config;
use crate::infrastructure::repositories::TokenRepository;
use crate::infrastructure::static_site::StaticSite;

pub use request_id::{request_id_middleware, RequestId, X_REQUEST_ID};

/// Build the application router
pub fn create_router(
    site: Arc<StaticSite>,
    token_repo: Arc<dyn TokenRepository>,
    home_controller: Arc<HomeController>,
    install_controller: Arc<InstallController>,
    sites_controller: Arc<SitesController>,
) -> Router {
    let home_routes = Router::new()
        .route("/", get(HomeController::index))
        .with_state(home_controller);

    // Install flow (OAuth authorization-code exchange)
    let install_routes = Router::new()
        .route("/auth", get(InstallController::install))
        .with_state(install_controller);

    // Webflow API proxy
    let sites_routes = Router::new()
        .route("/sites", get(SitesController::list_sites))
        .with_state(sites_controller);

    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::health_ready))
        .with_state(token_repo)
        .merge(home_routes)
        .merge(install_routes)
        .merge(sites_routes)
        // Remaining front-end assets
        .fallback_service(ServeDir::new(site.root()))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn(request_id_middleware)),
        )
}

/// Start the HTTP server with all routes configured
pub async fn start_http_server(
    config: Arc<Config>,
    router: Router,
) -> Result<(), Box<dyn std::error::Error>> {
    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, router).await?;

    Ok(())
}

use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use webflow_installer::controllers::{
    home::HomeController, install::InstallController, sites::SitesController,
};
use webflow_installer::domain::install::InstallService;
use webflow_installer::infrastructure::config::{Config, LogFormat};
use webflow_installer::infrastructure::db::{check_connection, create_pool, run_migrations};
use webflow_installer::infrastructure::http::{create_router, start_http_server};
use webflow_installer::infrastructure::repositories::{
    InMemoryTokenRepository, PostgresTokenRepository, TokenRepository,
};
use webflow_installer::infrastructure::static_site::StaticSite;
use webflow_installer::infrastructure::webflow::WebflowOAuthClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting Webflow installer on {}:{}",
        config.host,
        config.port
    );

    // Token store: Postgres when configured, otherwise process memory
    let token_repo: Arc<dyn TokenRepository> = match &config.database_url {
        Some(database_url) => {
            let pool = create_pool(database_url).await?;
            check_connection(&pool).await?;
            run_migrations(&pool).await?;
            tracing::info!("Token store: postgres");
            Arc::new(PostgresTokenRepository::new(Arc::new(pool)))
        }
        None => {
            tracing::warn!("DATABASE_URL not set, tokens will be lost on restart");
            Arc::new(InMemoryTokenRepository::new())
        }
    };

    let config = Arc::new(config);
    let http_client = reqwest::Client::new();
    let site = Arc::new(StaticSite::new(config.static_dir.clone()));

    let oauth_client = Arc::new(WebflowOAuthClient::new(&config.webflow, http_client.clone()));
    let install_service = Arc::new(InstallService::new(oauth_client, token_repo.clone()));

    let home_controller = Arc::new(HomeController::new(site.clone()));
    let install_controller = Arc::new(InstallController::new(install_service.clone(), site.clone()));
    let sites_controller = Arc::new(SitesController::new(
        install_service,
        http_client,
        config.webflow.api_base_url.clone(),
    ));

    let router = create_router(
        site,
        token_repo,
        home_controller,
        install_controller,
        sites_controller,
    );

    start_http_server(config, router).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "webflow_installer=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "webflow_installer=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}

use serde::Deserialize;
use std::env;
use std::path::PathBuf;

pub const DEFAULT_WEBFLOW_AUTHORIZE_URL: &str = "https://webflow.com/oauth/authorize";
pub const DEFAULT_WEBFLOW_API_URL: &str = "https://api.webflow.com";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub log_format: LogFormat,
    pub static_dir: PathBuf,
    /// Token store backend; the in-memory store is used when unset
    pub database_url: Option<String>,
    // Webflow OAuth
    pub webflow: WebflowConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WebflowConfig {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: Option<String>,
    pub scopes: Vec<String>,
    pub authorize_url: String,
    pub api_base_url: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let config = Config {
            host: env::var("SERVER_HOST").unwrap_or_else(|_| "localhost".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()?,
            log_format: env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "pretty".to_string())
                .parse::<String>()
                .map(|s| match s.as_str() {
                    "json" => LogFormat::Json,
                    _ => LogFormat::Pretty,
                })?,
            static_dir: env::var("STATIC_DIR")
                .unwrap_or_else(|_| "static".to_string())
                .into(),
            database_url: optional_var("DATABASE_URL"),
            webflow: WebflowConfig {
                client_id: env::var("WEBFLOW_CLIENT_ID")?,
                client_secret: env::var("WEBFLOW_SECRET")?,
                redirect_uri: optional_var("WEBFLOW_REDIRECT_URI"),
                scopes: optional_var("WEBFLOW_SCOPES")
                    .map(|s| parse_scopes(&s))
                    .unwrap_or_default(),
                authorize_url: env::var("WEBFLOW_AUTHORIZE_URL")
                    .unwrap_or_else(|_| DEFAULT_WEBFLOW_AUTHORIZE_URL.to_string()),
                api_base_url: env::var("WEBFLOW_API_URL")
                    .unwrap_or_else(|_| DEFAULT_WEBFLOW_API_URL.to_string()),
            },
        };

        Ok(config)
    }
}

fn optional_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Scopes may be separated by commas, whitespace, or both
pub fn parse_scopes(raw: &str) -> Vec<String> {
    raw.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

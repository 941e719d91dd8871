//! Configuration management

use anyhow::{Context, Result};

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// PostgreSQL connection string
    pub database_url: String,

    /// HTTP server bind address
    pub bind_addr: String,

    /// Mapbox Directions API access token (optional, falls through if absent)
    pub mapbox_access_token: Option<String>,

    /// OpenRouteService API key (optional, falls through if absent)
    pub ors_api_key: Option<String>,

    /// Timezone used when a driver's own timezone is unavailable
    pub default_driver_tz: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = std::env::var("DATABASE_URL")
            .context("DATABASE_URL must be set")?;

        let bind_addr = std::env::var("BIND_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8000".to_string());

        let mapbox_access_token = non_empty(std::env::var("MAPBOX_ACCESS_TOKEN").ok());
        let ors_api_key = non_empty(std::env::var("ORS_API_KEY").ok());

        let default_driver_tz = std::env::var("DEFAULT_DRIVER_TZ")
            .unwrap_or_else(|_| "UTC".to_string());

        Ok(Self {
            database_url,
            bind_addr,
            mapbox_access_token,
            ors_api_key,
            default_driver_tz,
        })
    }
}

/// Empty/absent tokens fall through silently — normalize `Some("")` to `None`.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

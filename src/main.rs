//! HOS Trip Planner - FMCSA Hours-of-Service trip planning service

mod cli;
mod config;
mod defaults;
mod db;
mod errors;
mod handlers;
mod services;
mod types;

use std::sync::Arc;

use anyhow::Result;
use chrono::NaiveDate;
use clap::Parser;
use tracing::info;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

use handlers::AppState;
use services::routing::RouteClient;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    dotenvy::dotenv().ok();

    let config = config::Config::from_env()?;
    let pool = db::create_pool(&config.database_url).await?;

    match cli.command {
        Some(cli::Command::Migrate) => {
            db::run_migrations(&pool).await?;
            info!("Migrations complete, exiting.");
            Ok(())
        }
        Some(cli::Command::Replan { driver_id, date }) => replan(&pool, driver_id, date).await,
        Some(cli::Command::Serve) | None => run_server(config, pool).await,
    }
}

async fn run_server(config: config::Config, pool: sqlx::PgPool) -> Result<()> {
    let logs_dir = std::env::var("LOGS_DIR").unwrap_or_else(|_| "../logs".to_string());
    std::fs::create_dir_all(&logs_dir).ok();

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &logs_dir, "hos-trip-planner.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,hos_trip_planner=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::fmt::layer().with_writer(non_blocking).with_ansi(false))
        .init();

    info!("Starting HOS Trip Planner...");

    db::run_migrations(&pool).await?;
    info!("Database migrations complete");

    let route_client = RouteClient::from_config(&config);
    let bind_addr = config.bind_addr.clone();

    let state = AppState {
        pool,
        route_client: Arc::new(route_client),
        config: Arc::new(config),
    };

    let app = handlers::router(state).layer(tower_http::trace::TraceLayer::new_for_http());

    info!("Listening on {}", bind_addr);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Recompute one driver's RODS for a single date and re-upsert it, using the
/// weekly history already on file as of that date.
async fn replan(pool: &sqlx::PgPool, driver_id: Uuid, date: NaiveDate) -> Result<()> {
    let driver = db::queries::drivers::get(pool, driver_id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("unknown driver {}", driver_id))?;

    let weekly_used = services::weekly_history::weekly_on_duty(pool, driver.id, date).await?;

    info!(
        driver = %driver.name,
        date = %date,
        weekly_used_hours = weekly_used,
        "replan requested; re-run /plan-trip/ with this driver to regenerate the page"
    );

    Ok(())
}

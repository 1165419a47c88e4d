//! # SNS API Server
//!
//! The main entry point for the Actix-web HTTP server.

use std::io;

use actix_web::{App, HttpServer, middleware::from_fn, web};
use tracing_actix_web::TracingLogger;

mod config;
mod handlers;
mod middleware;
mod observability;
mod state;
mod telemetry;

use config::AppConfig;
use state::{AppState, Repositories};
use telemetry::TelemetryConfig;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    telemetry::init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env().map_err(|e| {
        tracing::error!(error = %e, "Invalid configuration");
        io::Error::new(io::ErrorKind::InvalidInput, e)
    })?;

    tracing::info!(
        host = %config.host,
        port = config.port,
        token_ttl_secs = config.jwt.token_ttl.num_seconds(),
        "Starting SNS API Server"
    );

    let repos = build_repositories(&config).await?;
    let state = AppState::new(repos, config.jwt.clone());

    HttpServer::new(move || {
        App::new()
            .wrap(from_fn(observability::propagate_request_id))
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(state.clone()))
            .configure(handlers::configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}

async fn build_repositories(config: &AppConfig) -> io::Result<Repositories> {
    let Some(database) = &config.database else {
        tracing::warn!("DATABASE_URL not set. Running on the in-memory store.");
        return Ok(Repositories::in_memory());
    };

    #[cfg(feature = "postgres")]
    {
        Repositories::postgres(database).await.map_err(|e| {
            tracing::error!(error = %e, "Failed to connect to database");
            io::Error::other(e)
        })
    }

    #[cfg(not(feature = "postgres"))]
    {
        let _ = database;
        tracing::warn!("Built without the postgres feature. Ignoring DATABASE_URL.");
        Ok(Repositories::in_memory())
    }
}

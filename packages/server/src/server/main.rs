// Main entry point for API server

use std::sync::Arc;

use anyhow::{Context, Result};
use rent_core::common::Validator;
use rent_core::domains::auth::JwtService;
use rent_core::kernel::{BaseNotifier, LogNotifier, ServerDeps, TxTimeouts, WebhookNotifier};
use rent_core::{server::build_app, Config};
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,rent_core=debug,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting rental listings API");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!("Configuration loaded");

    // Connect to database
    tracing::info!("Connecting to database...");
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connected");

    // Run migrations
    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Migrations complete");

    let notifier: Arc<dyn BaseNotifier> = match &config.notify_webhook_url {
        Some(url) => {
            tracing::info!(endpoint = %url, "Subscriber notifications via webhook");
            Arc::new(
                WebhookNotifier::new(url.clone(), config.notify_timeout)
                    .context("Failed to create webhook notifier")?,
            )
        }
        None => {
            tracing::info!("NOTIFY_WEBHOOK_URL not set, subscriber notifications are logged only");
            Arc::new(LogNotifier)
        }
    };

    let deps = ServerDeps::new(
        pool,
        Validator::new(),
        notifier,
        Arc::new(JwtService::new(&config.jwt_secret, config.jwt_issuer.clone())),
        TxTimeouts::uniform(config.db_statement_timeout),
    );

    // Build application
    let app = build_app(deps, &config.allowed_origins);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        return;
    }
    tracing::info!("Shutdown signal received");
}

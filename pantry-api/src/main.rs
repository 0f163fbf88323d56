use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use pantry_api::{app, AppState, AuthConfig};
use pantry_catalog::ProductFeed;
use pantry_core::{Clock, ExpenseRepository, ExpenseService, SystemClock};
use pantry_store::app_config::{Config, StorageBackend};
use pantry_store::{
    DbClient, InMemoryExpenseRepository, InMemoryProductFeed, StoreExpenseRepository,
    StoreProductFeed,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "pantry_api=debug,pantry_core=debug,tower_http=debug,axum::rejection=trace".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().context("Failed to load config")?;
    tracing::info!("Starting Pantry API on port {}", config.server.port);

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let repo: Arc<dyn ExpenseRepository>;
    let catalog: Arc<dyn ProductFeed>;
    match config.storage.backend {
        StorageBackend::Postgres => {
            let db = DbClient::new(&config.database)
                .await
                .context("Failed to connect to Postgres")?;
            if config.database.run_migrations {
                db.migrate().await.context("Failed to run migrations")?;
            }
            repo = Arc::new(StoreExpenseRepository::new(db.pool.clone()));
            catalog = Arc::new(StoreProductFeed::new(db.pool.clone()));
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage; expenses are lost on restart");
            let feed = match &config.catalog.products_file {
                Some(path) => InMemoryProductFeed::from_file(path)?,
                None => InMemoryProductFeed::default(),
            };
            repo = Arc::new(InMemoryExpenseRepository::new(clock.clone()));
            catalog = Arc::new(feed);
        }
    }

    let app_state = AppState {
        expenses: ExpenseService::new(repo, clock).with_range_days(config.expenses.range_days),
        catalog,
        auth: AuthConfig {
            secret: config.auth.jwt_secret.clone(),
            expiration: config.auth.jwt_expiration_seconds,
        },
        page_size: config.catalog.page_size.max(1),
    };

    let app = app(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    tracing::info!("Shutting down");
}

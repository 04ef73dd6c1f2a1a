mod core;
mod features;
mod shared;

use crate::core::app::build_router;
use crate::core::config::Config;
use crate::core::openapi::{ApiDoc, SwaggerInfoModifier};
use crate::core::{database, server};
use crate::features::locations::{LocationService, PgLocationStore};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::{Modify, OpenApi};

fn main() -> anyhow::Result<()> {
    // Build Tokio runtime with configurable worker threads
    let worker_threads = std::env::var("TOKIO_WORKER_THREADS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|p| p.get())
                .unwrap_or(4)
        });

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(worker_threads)
        .max_blocking_threads(worker_threads * 4)
        .enable_all()
        .build()?;

    runtime.block_on(async_main(worker_threads))
}

async fn async_main(worker_threads: usize) -> anyhow::Result<()> {
    // Load .env file BEFORE initializing logger so RUST_LOG is available
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().map_err(|e| {
        tracing::error!("Invalid configuration: {}", e);
        anyhow::anyhow!(e)
    })?;

    tracing::info!(
        "Configuration loaded: tokio_worker_threads={}, pid={}",
        worker_threads,
        std::process::id()
    );

    // No retry: the service is useless without its store
    let pool = database::create_pool(&config.database)
        .await
        .map_err(|e| {
            tracing::error!("Failed to connect to database: {}", e);
            anyhow::anyhow!("Failed to connect to database: {}", e)
        })?;
    tracing::info!("Database connection pool created");

    if config.database.run_migrations {
        tracing::info!("Running database migrations...");
        database::run_migrations(&pool).await.map_err(|e| {
            tracing::error!("Migration failed: {}", e);
            anyhow::anyhow!("Migration failed: {}", e)
        })?;
        tracing::info!("Database migrations completed successfully");
    }

    let store = Arc::new(PgLocationStore::new(pool));
    let location_service = Arc::new(LocationService::new(store));

    let mut openapi = ApiDoc::openapi();
    SwaggerInfoModifier {
        title: config.swagger.title.clone(),
        version: config.swagger.version.clone(),
        description: config.swagger.description.clone(),
    }
    .modify(&mut openapi);

    let app = build_router(location_service, openapi);

    let addr = config.app.server_address();
    let listener = server::bind_listener(&addr)?;
    tracing::info!("Server listening on http://{}", addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui/", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(server::shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

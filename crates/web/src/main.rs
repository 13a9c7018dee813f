use std::sync::Arc;

use anyhow::Context;
use storage::{Database, MemoryCatalog, SharedCatalog};
use web::config::{Backend, Config};

async fn connect_catalog(config: &Config) -> anyhow::Result<SharedCatalog> {
    match config.backend {
        Backend::Memory => {
            tracing::warn!("Using the in-memory catalog; changes are lost on restart");
            Ok(Arc::new(MemoryCatalog::seeded()))
        }
        Backend::Postgres => {
            let database_url = config
                .database_url
                .as_deref()
                .context("DATABASE_URL is required for the postgres backend")?;

            tracing::info!(
                "Connecting to database at: {}",
                database_url.split('@').next_back().unwrap_or("unknown")
            );
            let db = Database::new(database_url)
                .await
                .context("Failed to initialize database")?;
            tracing::info!("Database connection established");

            tracing::info!("Running database migrations");
            db.run_migrations()
                .await
                .context("Failed to run migrations")?;
            db.seed().await.context("Failed to load seed data")?;
            tracing::info!("Database migrations completed successfully");

            Ok(Arc::new(db))
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting Survivor catalog API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    let catalog = connect_catalog(&config).await?;

    let bind_address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    axum::serve(listener, web::app(catalog)).await?;

    Ok(())
}

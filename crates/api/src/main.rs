use std::sync::Arc;

use anyhow::Result;
use domain::services::{GameNightStore, InMemoryGameNightStore};
use persistence::PgGameNightStore;
use tracing::{info, warn};

use game_night_api::{
    app,
    config::{self, StorageBackend},
    middleware,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let config = config::Config::load()?;

    middleware::logging::init_logging(&config.logging);
    middleware::init_metrics()?;

    info!("Starting Game Night API v{}", env!("CARGO_PKG_VERSION"));

    let store: Arc<dyn GameNightStore> = match config.storage.backend {
        StorageBackend::Postgres => {
            let pool = persistence::db::create_pool(&config.database.pool_config()).await?;

            info!("Running database migrations...");
            persistence::db::run_migrations(&pool).await?;
            info!("Migrations completed");

            Arc::new(PgGameNightStore::new(pool))
        }
        StorageBackend::Memory => {
            warn!("Using in-memory storage; data is lost on shutdown");
            Arc::new(InMemoryGameNightStore::new())
        }
    };

    let addr = config.socket_addr()?;
    let app = app::create_app(config, store);

    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

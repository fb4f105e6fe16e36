use std::sync::Arc;

use companions::companion::{CompanionStore, MemoryStore, PgCompanionStore};
use companions::config::{AppConfig, StoreKind};
use companions::{db, routes, state};

#[tokio::main]
async fn main() {
    // A missing .env is fine; real deployments set the environment directly.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = AppConfig::from_env().expect("invalid configuration");

    let store: Arc<dyn CompanionStore> = match &config.store {
        StoreKind::Postgres { database_url, max_connections } => {
            let pool = db::init_pool(database_url, *max_connections)
                .await
                .expect("database init failed");
            Arc::new(PgCompanionStore::new(pool))
        }
        StoreKind::Memory => {
            tracing::warn!("using in-memory companion store; data is not persisted");
            Arc::new(MemoryStore::with_default_categories())
        }
    };

    let app = routes::app(state::AppState::new(store));
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, "companions listening");
    axum::serve(listener, app).await.expect("server failed");
}

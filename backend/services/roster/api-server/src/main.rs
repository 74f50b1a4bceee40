// backend/services/roster/api-server/src/main.rs

use std::net::SocketAddr;
use std::sync::Arc;
use shared_kernel::clock::SystemClock;
use tracing_subscriber::EnvFilter;

use roster::infrastructure::config::AppConfig;
use roster_api_server::build_router;
use roster_api_server::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // 1. Configuration (échec immédiat si MOCK_AI=false sans clé)
    let config = AppConfig::from_env()?;

    // 2. Câblage
    let state = AppState::from_config(&config, Arc::new(SystemClock)).await?;
    let app = build_router(state);

    // 3. Serveur
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("🚀 Celebration planner listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

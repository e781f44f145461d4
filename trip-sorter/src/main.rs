use tracing::info;
use tracing_subscriber::EnvFilter;

use trip_sorter::config::AppConfig;
use trip_sorter::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    // RUST_LOG overrides the default filter
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("trip_sorter=info,tower_http=info")),
        )
        .init();

    // Fail fast on bad configuration
    let config = AppConfig::from_env().expect("Invalid configuration");
    let addr = config.bind_addr;
    let max_cards = config.max_cards;

    let state = AppState::new(config);
    let app = create_router(state);

    info!(%addr, max_cards, "Trip sorter listening");
    info!("API Endpoints:");
    info!("  GET  /health        - Health check");
    info!("  GET  /trip/sample   - Sorted sample trip");
    info!("  POST /trip/sort     - Sort boarding cards");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    axum::serve(listener, app).await.expect("Server error");
}

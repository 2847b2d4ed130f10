use std::sync::Arc;
use std::time::Duration;

use catalog_search_api::config;
use catalog_search_api::handlers::AppState;
use catalog_search_api::proxy::HttpSearchProxy;
use catalog_search_api::routes;

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up SEARCH_BACKEND_URL etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = config::config();
    tracing::info!("Starting catalog search API in {:?} mode", config.environment);

    let proxy = HttpSearchProxy::new(
        &config.search.backend_url,
        Duration::from_secs(config.search.request_timeout_secs),
    )
    .unwrap_or_else(|e| panic!("failed to construct search proxy: {}", e));

    let app = routes::app(AppState { proxy: Arc::new(proxy) });

    // Allow tests or deployments to override port via env
    let port = std::env::var("SEARCH_API_PORT")
        .ok()
        .or_else(|| std::env::var("PORT").ok())
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(5001);

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    tracing::info!("catalog search API listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}

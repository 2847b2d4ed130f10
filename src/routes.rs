use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config;
use crate::handlers::{search, system, AppState};

/// Build the service router around the wired-in application state.
pub fn app(state: AppState) -> Router {
    let mut app = Router::new()
        .route("/", get(system::root))
        .route("/healthcheck", get(system::health))
        .merge(search_routes())
        .layer(DefaultBodyLimit::max(config::config().api.max_request_size_bytes))
        .layer(CorsLayer::permissive())
        .with_state(state);

    if config::config().api.enable_request_logging {
        app = app.layer(TraceLayer::new_for_http());
    }

    app
}

fn search_routes() -> Router<AppState> {
    Router::new()
        .route("/search/filter/table", post(search::table_filter_post))
        .route("/search/filter/dashboard", post(search::dashboard_filter_post))
}

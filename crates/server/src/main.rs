//! TONPool development server.
//!
//! In-memory stand-in for the remote REST service consumed by the webview
//! frontend. Implements the documented wire contract and serves the built
//! frontend assets, so the dashboard can be run and tested end to end
//! without the production backend.

mod config;
mod error;
mod routes;
mod state;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use config::Config;
use routes::{generate_label, get_balance, get_operations, get_referrals};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = Config::from_env();
    let bind_addr = config.bind_addr;
    let static_dir = config.static_dir.clone();
    let state = AppState::new(config);

    // Webview host origins vary (t.me, web.telegram.org, local dev)
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/balance", get(get_balance))
        .route("/generate_label", post(generate_label))
        .route("/referrals", get(get_referrals))
        .route("/operations", get(get_operations));

    let app = Router::new()
        .nest("/api", api_routes)
        .fallback_service(ServeDir::new(static_dir).append_index_html_on_directories(true))
        .layer(cors)
        .with_state(state);

    tracing::info!("listening on http://{}", bind_addr);
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}

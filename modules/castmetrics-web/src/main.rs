use std::sync::Arc;

use anyhow::Result;
use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use castmetrics_common::Config;
use neynar_client::NeynarClient;

mod routes;
use routes::*;

// --- App State ---

pub(crate) struct AppState {
    /// `None` when NEYNAR_API_KEY is unset; data endpoints then answer with
    /// an explicit configuration error instead of attempting the call.
    client: Option<NeynarClient>,
}

// --- Main ---

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("castmetrics_web=info".parse()?)
                .add_directive("castmetrics_core=info".parse()?),
        )
        .init();

    let config = Config::from_env();
    if config.neynar_api_key.is_none() {
        warn!("NEYNAR_API_KEY is not set; data endpoints will return config errors");
    }

    let state = Arc::new(AppState {
        client: config.neynar_api_key.map(NeynarClient::new),
    });

    let app = Router::new()
        .route("/api/user-stats/{fid}", get(user_stats))
        .route("/api/user-stats/username/{username}", get(user_stats_by_username))
        .route("/api/leaderboard", get(leaderboard))
        .route("/api/discovery", get(discovery))
        .route("/api/health", get(health))
        .with_state(state)
        // The dashboard frontend is served from a different origin
        .layer(CorsLayer::permissive())
        // Logging layer: method + path + status + latency
        .layer(
            tower_http::trace::TraceLayer::new_for_http().make_span_with(
                |request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        path = %request.uri().path(),
                    )
                },
            ),
        );

    let addr = format!("{}:{}", config.web_host, config.web_port);
    info!("CastMetrics web server starting on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

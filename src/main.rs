use std::sync::Arc;

use axum::http::HeaderValue;
use axum::routing::get;
use axum::Router;
use clap::Parser;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use booklink::cli::{delivery_mode, Cli, Command};
use booklink::config::AppConfig;
use booklink::handlers;
use booklink::services::booking::BookingLinks;
use booklink::services::surface::browser::BrowserSurface;
use booklink::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    let links = BookingLinks::with_defaults(Arc::new(BrowserSurface::new()))
        .features(config.window_features())
        .policy(config.error_policy());
    if !config.endpoint_overrides.is_empty() {
        tracing::info!("applying {} endpoint overrides", config.endpoint_overrides.len());
        links.update_endpoints(config.endpoint_overrides.clone());
    }

    let port = match cli.command() {
        Command::Open { intent, inline } => {
            links.invoke_with(&intent, delivery_mode(inline))?;
            return Ok(());
        }
        Command::Serve { port } => port.unwrap_or(config.port),
    };

    let cors = match &config.allowed_origin {
        Some(origin) => {
            let origin: HeaderValue = origin.parse()?;
            CorsLayer::new().allow_origin(origin)
        }
        None => CorsLayer::new(),
    };

    let state = Arc::new(AppState {
        config: config.clone(),
        links,
    });

    let app = Router::new()
        .route("/health", get(handlers::health::health))
        .route("/book/:intent", get(handlers::booking::book))
        .route("/api/intents", get(handlers::booking::list_intents))
        .route("/api/links/:intent", get(handlers::booking::get_link))
        .route(
            "/api/admin/endpoints",
            get(handlers::admin::get_endpoints).post(handlers::admin::update_endpoints),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = format!("0.0.0.0:{port}");
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

use axum::{
    extract::DefaultBodyLimit,
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod constants;
mod error;
mod handlers;
mod models;

use config::Config;
use constants::MAX_CONTENT_LENGTH;

async fn serve_index() -> impl IntoResponse {
    match tokio::fs::read_to_string("static/index.html").await {
        Ok(content) => Html(content).into_response(),
        Err(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Failed to load page").into_response(),
    }
}

pub fn app() -> Router {
    Router::new()
        // Frontend routes
        .route("/", get(serve_index))
        // API routes
        .route("/health", get(handlers::health))
        .route("/upload", post(handlers::upload))
        // Static files
        .nest_service("/static", ServeDir::new("static"))
        // API docs
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", handlers::ApiDoc::openapi()))
        .layer(DefaultBodyLimit::max(MAX_CONTENT_LENGTH))
        .layer(TraceLayer::new_for_http())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    // Initialize tracing
    // VULNERABILITY (intentional): debug mode turns on verbose diagnostics
    // that leak internals to whoever can read the output.
    let default_filter = if config.debug {
        "memeforge=debug,tower_http=debug,axum=trace"
    } else {
        "memeforge=info,tower_http=warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if config.secret_key == constants::DEFAULT_SECRET_KEY {
        tracing::warn!("SECRET_KEY not set; using the insecure built-in default");
    }

    let addr = SocketAddr::new(config.host.parse()?, config.port);

    tracing::info!("memeforge listening on {}", addr);
    tracing::info!("API docs available at http://{}/docs", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app()).await?;

    Ok(())
}

//! Flowxtra edge server
//!
//! Serves the marketing site's server-side surface: API proxy routes
//! (CORS avoidance for forms and the app store) and the SEO surface
//! (sitemaps, RSS feeds, llms.txt, robots.txt).

mod error;
mod routes;

use axum::routing::{get, post};
use axum::Router;
use clap::Parser;
use flowxtra_api_client::{BackendClient, ClientConfig};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Resolved edge configuration
    pub config: Arc<ClientConfig>,
    /// Backend client (shared connection pool)
    pub client: BackendClient,
}

/// Flowxtra marketing-site edge server
#[derive(Parser)]
#[command(name = "flowxtra-edge")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Address to bind
    #[arg(long, env = "FLOWXTRA_BIND", default_value = "0.0.0.0:3080")]
    bind: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let config = ClientConfig::from_env()?;
    error::set_environment(config.environment);

    let client = BackendClient::with_config(config.clone())?;
    let state = AppState {
        config: Arc::new(config),
        client,
    };

    tracing::info!(
        backend = %state.config.backend_url,
        site = %state.config.site_url,
        environment = ?state.config.environment,
        "edge configuration resolved"
    );

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&cli.bind).await?;
    tracing::info!("Flowxtra edge server listening on http://{}", cli.bind);
    axum::serve(listener, app).await?;

    Ok(())
}

fn create_router(state: AppState) -> Router {
    // Permissive CORS: the proxy surface exists so browsers can avoid
    // talking to the backend origin directly.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health
        .route("/health", get(routes::meta::health))
        // Proxy surface
        .route("/api/contact", post(routes::proxy::contact))
        .route("/api/data-request", post(routes::proxy::data_request))
        .route("/api/app-store", get(routes::proxy::app_store_list))
        .route("/api/app-store/:slug", get(routes::proxy::app_store_by_slug))
        // SEO surface
        .route("/sitemap.xml", get(routes::sitemap::root_index))
        .route("/sitemap-all.xml", get(routes::sitemap::all))
        .route("/sitemap/:locale", get(routes::sitemap::locale_index))
        .route("/feed", get(routes::feed::default_feed))
        .route("/feed/:locale", get(routes::feed::locale_feed))
        .route("/llms.txt", get(routes::meta::llms))
        .route("/robots.txt", get(routes::meta::robots))
        // Flat sitemap documents (sitemap-{locale}-blog-{n}.xml, ...)
        .route("/:doc", get(routes::sitemap::content_doc))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

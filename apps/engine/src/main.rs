mod config;
mod errors;
mod export;
mod interaction;
mod layout;
mod models;
mod render;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::render::headless::{BlockRasterizer, HeadlessRenderer};
use crate::render::surface::{SurfaceStyle, ViewHandle};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Vitae engine v{}", env!("CARGO_PKG_VERSION"));

    // The live preview surface. The headless pair serves it server-side; a
    // browser-backed renderer plugs in through the same traits.
    let preview = ViewHandle::new(SurfaceStyle::preview(0.6));
    info!(
        "Preview surface initialized ({}x{} canonical units)",
        layout::PAGE_WIDTH,
        layout::PAGE_HEIGHT
    );

    let state = AppState {
        config: config.clone(),
        preview,
        renderer: Arc::new(HeadlessRenderer),
        rasterizer: Arc::new(BlockRasterizer),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

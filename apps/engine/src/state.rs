use std::sync::Arc;

use crate::config::Config;
use crate::render::surface::ViewHandle;
use crate::render::{Rasterizer, ViewRenderer};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// The live preview surface — the single shared mutable resource the
    /// export pipeline temporarily reconfigures.
    pub preview: ViewHandle,
    /// Pluggable view renderer. Default: the headless renderer.
    pub renderer: Arc<dyn ViewRenderer>,
    /// Pluggable rasterizer. Default: the block rasterizer.
    pub rasterizer: Arc<dyn Rasterizer>,
}

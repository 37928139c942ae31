use std::sync::Arc;

use crate::config::Config;
use crate::render::Renderer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Shared by preview and download so both render through the same icon catalog.
    pub renderer: Arc<Renderer>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        AppState {
            config,
            renderer: Arc::new(Renderer::default()),
        }
    }
}

pub mod api_client;
pub mod config;
pub mod controllers;
pub mod filters;
pub mod models;
pub mod views;

use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

// Shared state для всего приложения
#[derive(Clone)]
pub struct AppState {
    pub api: api_client::ApiClient,
    pub config: config::Config,
}

impl AppState {
    pub fn new(config: config::Config) -> Result<Arc<Self>, api_client::ApiError> {
        let api = api_client::ApiClient::from_config(&config.api)?;
        Ok(Arc::new(Self { api, config }))
    }
}

/// Роутер со страницами списка и события.
pub fn app(state: Arc<AppState>) -> Router {
    controllers::routes()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

pub mod detail;
pub mod listing;

use axum::{routing::get, Router};
use std::sync::Arc;

pub fn routes() -> Router<Arc<crate::AppState>> {
    Router::new()
        .route("/health", get(|| async { "OK" }))
        .merge(listing::routes())
        .merge(detail::routes())
}

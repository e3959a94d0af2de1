pub(crate) mod auth;
pub(crate) mod data;
pub(crate) mod filestore;
pub(crate) mod health;
pub(crate) mod index;

use crate::state::AppState;
use axum::{routing::get, Router};

/// Combines all API routes into a single router
pub(super) fn router() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(example_routes())
}

/// The example pages, each a thin adapter over the gateway or the data API
fn example_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index::index_handler))
        .route("/examples/auth", get(auth::auth_handler))
        .route("/examples/data", get(data::data_handler))
        .route("/examples/filestore", get(filestore::filestore_handler))
}

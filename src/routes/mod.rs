//! Router assembly.

mod api;
mod common;

pub use api::api_routes;
pub use common::common_routes;

use crate::state::AppState;
use axum::Router;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

/// Full application: API and operational routes, request tracing, and a body size cap.
pub fn app(state: AppState, body_limit_bytes: usize) -> Router {
    Router::new()
        .merge(api_routes(state.clone()))
        .merge(common_routes(state))
        .layer(RequestBodyLimitLayer::new(body_limit_bytes))
        .layer(TraceLayer::new_for_http())
}

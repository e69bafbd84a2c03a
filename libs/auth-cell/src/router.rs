use std::sync::Arc;

use axum::{middleware, routing::get, Router};

use shared_config::AppConfig;
use shared_utils::extractor::auth_middleware;

use crate::handlers;

/// `/login` is public; `/self` needs a valid token.
pub fn auth_routes(state: Arc<AppConfig>) -> Router {
    let public_routes = Router::new().route("/login", get(handlers::login));

    let protected_routes = Router::new()
        .route("/self", get(handlers::get_self))
        .layer(middleware::from_fn_with_state(state.clone(), auth_middleware));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .with_state(state)
}

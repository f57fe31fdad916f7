use crate::interface_adapters::dispatcher::dispatch_failures;
use crate::interface_adapters::handlers::{index, route_not_found, show, show_v2};
use crate::interface_adapters::state::AppState;
use axum::{middleware, routing::get, Router};

pub fn app(state: AppState) -> Router {
    // Wire the HTTP routes; the dispatcher layer covers the fallback too.
    Router::new()
        .route("/app", get(index))
        .route("/app/show/{id}", get(show))
        .route("/app/show-v2/{id}", get(show_v2))
        .fallback(route_not_found)
        .layer(middleware::map_response_with_state(
            state.clone(),
            dispatch_failures,
        ))
        .with_state(state)
}

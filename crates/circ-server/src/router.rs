use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use circ_protocol::endpoints;

use crate::config::ServerConfig;
use crate::handler;
use crate::state::AppState;

/// Build the axum router with all ledger endpoints.
pub fn build_router(state: AppState, config: &ServerConfig) -> Router {
    let mut router = Router::new()
        .route(endpoints::HEALTH, get(handler::health_handler))
        .route(endpoints::INFO, get(handler::info_handler))
        .route(endpoints::LEDGER, get(handler::ledger_handler))
        .route(endpoints::CHECKOUT, post(handler::checkout_handler))
        .route(endpoints::AUDIT, get(handler::audit_handler))
        .route(
            endpoints::ITEMS,
            post(handler::register_item_handler).get(handler::list_items_handler),
        )
        .layer(DefaultBodyLimit::max(config.max_body_bytes));

    if config.trace_requests {
        router = router.layer(TraceLayer::new_for_http());
    }

    router.with_state(state)
}

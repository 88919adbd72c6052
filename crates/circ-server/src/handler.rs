use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use serde_json::json;

use circ_ledger::{ChainAuditor, ChainError, LedgerEntry};
use circ_protocol::{AuditResponse, CheckoutRequest, HealthResponse, RegisterItemRequest};
use circ_types::CatalogItem;

use crate::error::{ServerError, ServerResult};
use crate::state::AppState;

/// Health check handler.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::default())
}

/// Info handler.
pub async fn info_handler() -> Json<serde_json::Value> {
    Json(json!({
        "name": "circ-server",
        "version": env!("CARGO_PKG_VERSION"),
        "api_version": circ_protocol::API_VERSION,
    }))
}

/// `GET /v1/ledger` — snapshot of all entries in position order.
pub async fn ledger_handler(
    State(state): State<AppState>,
) -> ServerResult<Json<Vec<LedgerEntry>>> {
    let snapshot = state.with_ledger(|ledger| ledger.snapshot())?;
    Ok(Json(snapshot))
}

/// `POST /v1/checkout` — record one checkout event on the chain.
///
/// Payload content validation happens here; the ledger itself is agnostic
/// to event semantics beyond hashing them.
pub async fn checkout_handler(
    State(state): State<AppState>,
    Json(request): Json<CheckoutRequest>,
) -> ServerResult<(StatusCode, Json<LedgerEntry>)> {
    if request.item_id.trim().is_empty() {
        return Err(ServerError::InvalidRequest("item_id must not be empty".into()));
    }
    if request.borrower.trim().is_empty() {
        return Err(ServerError::InvalidRequest("borrower must not be empty".into()));
    }
    if request.date.trim().is_empty() {
        return Err(ServerError::InvalidRequest("date must not be empty".into()));
    }

    let committed: Result<LedgerEntry, ChainError> = state.with_ledger_mut(|ledger| {
        ledger.append(request.into_event())?;
        Ok(ledger.tail().clone())
    })?;
    let committed = committed?;

    tracing::info!(
        position = committed.position,
        hash = %committed.content_hash.short_hex(),
        "checkout recorded"
    );
    Ok((StatusCode::CREATED, Json(committed)))
}

/// `GET /v1/audit` — re-verify the whole chain from genesis to tail.
pub async fn audit_handler(State(state): State<AppState>) -> ServerResult<Json<AuditResponse>> {
    let report = state.with_ledger(|ledger| ChainAuditor::audit(ledger.entries()))?;
    if !report.is_valid() {
        tracing::warn!(violations = report.violations.len(), "chain audit failed");
    }
    Ok(Json(AuditResponse::from(&report)))
}

/// `POST /v1/items` — register a catalog item under its derived id.
pub async fn register_item_handler(
    State(state): State<AppState>,
    Json(request): Json<RegisterItemRequest>,
) -> ServerResult<(StatusCode, Json<CatalogItem>)> {
    if request.isbn.trim().is_empty() {
        return Err(ServerError::InvalidRequest("isbn must not be empty".into()));
    }
    if request.title.trim().is_empty() {
        return Err(ServerError::InvalidRequest("title must not be empty".into()));
    }

    let item = state.with_catalog_mut(|catalog| catalog.register(request))?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// `GET /v1/items` — list registered items in id order.
pub async fn list_items_handler(
    State(state): State<AppState>,
) -> ServerResult<Json<Vec<CatalogItem>>> {
    let items = state.with_catalog(|catalog| catalog.list())?;
    Ok(Json(items))
}

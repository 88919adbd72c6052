use serde::{Deserialize, Serialize};

use circ_ledger::{AuditReport, ChainError};
use circ_types::CheckoutEvent;

/// Body of `POST /v1/checkout`: one checkout to record.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CheckoutRequest {
    pub item_id: String,
    pub borrower: String,
    pub date: String,
}

impl CheckoutRequest {
    /// Convert into the ledger payload. The ledger never sees request
    /// framing, only the event.
    pub fn into_event(self) -> CheckoutEvent {
        CheckoutEvent::new(self.item_id, self.borrower, self.date)
    }
}

/// Body of `POST /v1/items`: immutable metadata for a new catalog item.
/// The item's stable id is derived server-side.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RegisterItemRequest {
    pub title: String,
    pub author: String,
    pub publish_date: String,
    pub isbn: String,
}

/// One chain violation, positioned for diagnostics.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViolationBody {
    pub position: u64,
    pub kind: String,
    pub detail: String,
}

impl From<&ChainError> for ViolationBody {
    fn from(error: &ChainError) -> Self {
        Self {
            position: error.position(),
            kind: error.kind().into(),
            detail: error.to_string(),
        }
    }
}

/// Body of `GET /v1/audit`: the result of a full-chain audit.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AuditResponse {
    pub valid: bool,
    pub entry_count: u64,
    pub violations: Vec<ViolationBody>,
}

impl From<&AuditReport> for AuditResponse {
    fn from(report: &AuditReport) -> Self {
        Self {
            valid: report.is_valid(),
            entry_count: report.entry_count,
            violations: report.violations.iter().map(ViolationBody::from).collect(),
        }
    }
}

/// Structured error body returned on request failure.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub kind: String,
}

impl ErrorBody {
    pub fn new(kind: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            kind: kind.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checkout_request_maps_to_event() {
        let request = CheckoutRequest {
            item_id: "B1".into(),
            borrower: "alice".into(),
            date: "2024-01-01".into(),
        };
        let event = request.into_event();
        assert_eq!(event.item_id, "B1");
        assert_eq!(event.borrower, "alice");
        assert_eq!(event.checkout_date, "2024-01-01");
        assert!(!event.is_genesis);
    }

    #[test]
    fn checkout_request_decodes_from_json() {
        let request: CheckoutRequest =
            serde_json::from_str(r#"{"item_id":"B1","borrower":"alice","date":"2024-01-01"}"#)
                .unwrap();
        assert_eq!(request.item_id, "B1");
    }

    #[test]
    fn violation_body_carries_kind_and_position() {
        let error = ChainError::PositionGap {
            expected: 2,
            found: 5,
        };
        let body = ViolationBody::from(&error);
        assert_eq!(body.position, 5);
        assert_eq!(body.kind, "position_gap");
        assert!(body.detail.contains("expected 2"));
    }

    #[test]
    fn audit_response_from_report() {
        let report = AuditReport {
            entry_count: 3,
            violations: vec![ChainError::HashMismatch { position: 1 }],
        };
        let response = AuditResponse::from(&report);
        assert!(!response.valid);
        assert_eq!(response.entry_count, 3);
        assert_eq!(response.violations.len(), 1);
        assert_eq!(response.violations[0].kind, "hash_mismatch");
    }
}

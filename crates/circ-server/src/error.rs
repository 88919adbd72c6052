use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use thiserror::Error;

use circ_ledger::ChainError;
use circ_protocol::ErrorBody;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("chain rejected the entry: {0}")]
    Chain(#[from] ChainError),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServerResult<T> = Result<T, ServerError>;

impl ServerError {
    fn status(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            // The candidate conflicts with the current tail state.
            Self::Chain(_) => StatusCode::CONFLICT,
            Self::Config(_) | Self::Io(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Self::InvalidRequest(_) => "invalid_request",
            Self::Chain(error) => error.kind(),
            Self::Config(_) => "config",
            Self::Io(_) => "io",
            Self::Internal(_) => "internal",
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody::new(self.kind(), self.to_string());
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chain_errors_are_conflicts() {
        let error = ServerError::Chain(ChainError::PositionGap {
            expected: 1,
            found: 5,
        });
        assert_eq!(error.status(), StatusCode::CONFLICT);
        assert_eq!(error.kind(), "position_gap");
    }

    #[test]
    fn invalid_request_is_bad_request() {
        let error = ServerError::InvalidRequest("borrower must not be empty".into());
        assert_eq!(error.status(), StatusCode::BAD_REQUEST);
        assert_eq!(error.kind(), "invalid_request");
    }

    #[test]
    fn chain_error_converts_via_from() {
        let error: ServerError = ChainError::HashMismatch { position: 2 }.into();
        assert_eq!(error.kind(), "hash_mismatch");
    }
}

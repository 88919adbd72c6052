//! HTTP API surface for the circulation ledger.
//!
//! Defines the endpoint paths and the request/response types exchanged
//! between the service and its clients. Wire format is JSON throughout.

pub mod endpoint;
pub mod message;

pub use endpoint::{endpoints, HealthResponse, API_VERSION};
pub use message::{
    AuditResponse, CheckoutRequest, ErrorBody, RegisterItemRequest, ViolationBody,
};

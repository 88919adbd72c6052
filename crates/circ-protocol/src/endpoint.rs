/// Version of the HTTP API surface.
pub const API_VERSION: u32 = 1;

/// HTTP endpoint paths served by the ledger service.
pub mod endpoints {
    pub const HEALTH: &str = "/v1/health";
    pub const INFO: &str = "/v1/info";
    pub const LEDGER: &str = "/v1/ledger";
    pub const CHECKOUT: &str = "/v1/checkout";
    pub const AUDIT: &str = "/v1/audit";
    pub const ITEMS: &str = "/v1/items";
}

/// Health check response.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub api_version: u32,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".into(),
            version: env!("CARGO_PKG_VERSION").into(),
            api_version: API_VERSION,
        }
    }
}

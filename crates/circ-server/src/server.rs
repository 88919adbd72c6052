use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::router::build_router;
use crate::state::AppState;

/// The circulation ledger service.
///
/// This is the composition root: the ledger and catalog are constructed
/// here and handed to handlers through [`AppState`], never through
/// process-wide globals.
pub struct CircServer {
    config: ServerConfig,
    state: AppState,
}

impl CircServer {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config,
            state: AppState::new(),
        }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        build_router(self.state.clone(), &self.config)
    }

    /// Start serving requests.
    pub async fn serve(self) -> ServerResult<()> {
        let app = build_router(self.state.clone(), &self.config);
        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        tracing::info!("circulation ledger listening on {}", self.config.bind_addr);
        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))
    }
}

use std::sync::Arc;

use tokio::net::TcpListener;

use tally_store::InMemoryScoreStore;

use crate::config::ServerConfig;
use crate::error::ServerResult;
use crate::router::build_router;
use crate::service::ReceiptService;

/// Receipt points server.
pub struct TallyServer {
    config: ServerConfig,
    service: Arc<ReceiptService>,
}

impl TallyServer {
    /// Create a server with a fresh in-memory score store.
    pub fn new(config: ServerConfig) -> Self {
        let store = Arc::new(InMemoryScoreStore::new());
        Self {
            config,
            service: Arc::new(ReceiptService::new(store)),
        }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        build_router(Arc::clone(&self.service))
    }

    /// Start serving requests.
    pub async fn serve(self) -> ServerResult<()> {
        let app = self.router();
        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        tracing::info!("tally server listening on {}", self.config.bind_addr);
        axum::serve(listener, app)
            .await
            .map_err(|e| crate::error::ServerError::Internal(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_construction() {
        let server = TallyServer::new(ServerConfig::default());
        assert_eq!(server.config().bind_addr, "127.0.0.1:8080".parse().unwrap());
    }

    #[test]
    fn router_builds() {
        let server = TallyServer::new(ServerConfig::default());
        let _router = server.router();
    }
}

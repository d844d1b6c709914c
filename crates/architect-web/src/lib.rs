//! HTTP endpoint for Make scenario generation.
//!
//! `architect-web` exposes the [`ScenarioService`] from `architect` as a
//! single JSON endpoint. Each request is independent: one problem in, one
//! model call, one scenario (or a fixed error) out.
//!
//! # Quick start
//!
//! ```ignore
//! use architect::prelude::*;
//! use architect_web::{WebConfig, spawn_web};
//!
//! let service = ScenarioService::from_config(&ArchitectConfig::from_env())?;
//! let addr = spawn_web(service, WebConfig::default()).await?;
//! println!("Endpoint: http://{addr}/api/generate-scenario");
//! ```
//!
//! # Endpoint
//!
//! ```text
//! POST /api/generate-scenario   {"problem": "..."}
//!   200 {"scenario": {...}}
//!   400 {"error": "Le problème est requis"}
//!   500 {"error": "Erreur lors de la génération du scénario"}
//! ```

mod api;
mod server;

pub use api::{ApiError, AppState};
pub use server::build_router;

use std::io;
use std::net::SocketAddr;
use std::path::PathBuf;

use architect::service::ScenarioService;

/// Configuration for the web server.
pub struct WebConfig {
    /// Address to bind to. Default: `127.0.0.1:3001`.
    pub bind_addr: SocketAddr,
    /// Directory of a static frontend build served for non-API paths.
    ///
    /// If `None`, only the API endpoint is served.
    pub static_dir: Option<PathBuf>,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3001)),
            static_dir: None,
        }
    }
}

/// Spawn the web server on a Tokio task and return the bound address.
///
/// The server runs until the Tokio runtime shuts down.
pub async fn spawn_web(service: ScenarioService, config: WebConfig) -> io::Result<SocketAddr> {
    let router = server::build_router(service, config.static_dir);
    server::start_server(router, config.bind_addr).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn web_config_default() {
        let config = WebConfig::default();
        assert_eq!(config.bind_addr.port(), 3001);
        assert!(config.bind_addr.ip().is_loopback());
        assert!(config.static_dir.is_none());
    }
}

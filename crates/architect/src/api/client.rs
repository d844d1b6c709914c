//! HTTP client for the generation endpoint.

use thiserror::Error;
use tracing::{debug, warn};

use super::{GENERATE_SCENARIO_PATH, GenerateRequest, GenerateResponse};
use crate::scenario::Scenario;

/// Failure of an endpoint call, as seen by a client.
///
/// Frontends do not distinguish variants; any of them shows the same
/// generic message.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never got a response.
    #[error("endpoint unreachable: {0}")]
    Network(String),
    /// The endpoint answered with a non-success status.
    #[error("endpoint returned HTTP {0}")]
    Status(u16),
    /// The success body could not be decoded.
    #[error("invalid endpoint response: {0}")]
    Decode(String),
}

/// Calls `POST /api/generate-scenario` on a running server.
#[derive(Clone)]
pub struct ScenarioClient {
    client: reqwest::Client,
    endpoint: String,
}

impl ScenarioClient {
    /// Create a client for the server at `base_url` (e.g.
    /// `http://127.0.0.1:3001`).
    pub fn new(base_url: &str) -> Result<Self, String> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("architect/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| format!("failed to build HTTP client: {e}"))?;
        Ok(Self {
            client,
            endpoint: format!("{}{GENERATE_SCENARIO_PATH}", base_url.trim_end_matches('/')),
        })
    }

    /// Full URL of the generation endpoint.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Ask the server for a scenario.
    pub async fn generate(&self, problem: &str) -> Result<Scenario, ClientError> {
        debug!("POST {} ({} chars)", self.endpoint, problem.chars().count());
        let resp = self
            .client
            .post(&self.endpoint)
            .json(&GenerateRequest::new(problem))
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            warn!("Scenario endpoint returned HTTP {status}");
            return Err(ClientError::Status(status.as_u16()));
        }

        let body: GenerateResponse = resp
            .json()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))?;
        Ok(body.scenario)
    }
}

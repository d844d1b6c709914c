//! Wire contract of the generation endpoint.
//!
//! Shared by the server (`architect-web`) and every client:
//!
//! - `POST` [`GENERATE_SCENARIO_PATH`] with a [`GenerateRequest`] body.
//! - `200` → [`GenerateResponse`], `400`/`500` → [`ErrorBody`] carrying one of
//!   the fixed messages below.
//!
//! [`client::ScenarioClient`] is the client side.

pub mod client;

pub use client::{ClientError, ScenarioClient};

use serde::{Deserialize, Serialize};

use crate::scenario::Scenario;

/// Path of the generation endpoint.
pub const GENERATE_SCENARIO_PATH: &str = "/api/generate-scenario";

/// Returned with `400` when the problem is missing or blank.
pub const MSG_PROBLEM_REQUIRED: &str = "Le problème est requis";

/// Returned with `500` for any downstream failure.
pub const MSG_GENERATION_FAILED: &str = "Erreur lors de la génération du scénario";

/// Request body. `problem` may be absent; the server treats that like an
/// empty string.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct GenerateRequest {
    #[serde(default)]
    pub problem: Option<String>,
}

impl GenerateRequest {
    pub fn new(problem: impl Into<String>) -> Self {
        Self {
            problem: Some(problem.into()),
        }
    }
}

/// Success body.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GenerateResponse {
    pub scenario: Scenario,
}

/// Error body for `400` and `500`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_accepts_missing_problem() {
        let req: GenerateRequest = serde_json::from_str("{}").unwrap();
        assert!(req.problem.is_none());
    }

    #[test]
    fn request_accepts_null_problem() {
        let req: GenerateRequest = serde_json::from_str(r#"{"problem":null}"#).unwrap();
        assert!(req.problem.is_none());
    }

    #[test]
    fn error_body_shape() {
        let json = serde_json::to_value(ErrorBody::new(MSG_PROBLEM_REQUIRED)).unwrap();
        assert_eq!(json, serde_json::json!({"error": "Le problème est requis"}));
    }
}

//! Generation error taxonomy.
//!
//! Every server-side failure ends up as a [`GenerateError`]. At the HTTP
//! boundary only [`status()`](GenerateError::status) and
//! [`user_message()`](GenerateError::user_message) cross over; the
//! underlying cause stays in the server log.

use thiserror::Error;

use crate::api::{MSG_GENERATION_FAILED, MSG_PROBLEM_REQUIRED};
use crate::scenario::ExtractError;

/// Failure of one scenario generation.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Empty, whitespace-only or missing problem statement. Raised before
    /// any external call.
    #[error("problem statement is required")]
    InvalidInput,
    /// The text-generation call failed (network, auth, rate limit, HTTP
    /// error, unusable response).
    #[error("text generation failed: {0}")]
    ExternalCall(String),
    /// The completion is not a usable scenario after fence stripping.
    #[error("malformed model output: {0}")]
    MalformedOutput(#[from] ExtractError),
}

impl GenerateError {
    /// HTTP status code for this error.
    pub fn status(&self) -> u16 {
        match self {
            Self::InvalidInput => 400,
            Self::ExternalCall(_) | Self::MalformedOutput(_) => 500,
        }
    }

    /// Fixed user-facing message. Never includes model output or the
    /// underlying cause.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::InvalidInput => MSG_PROBLEM_REQUIRED,
            Self::ExternalCall(_) | Self::MalformedOutput(_) => MSG_GENERATION_FAILED,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_maps_to_400() {
        let err = GenerateError::InvalidInput;
        assert_eq!(err.status(), 400);
        assert_eq!(err.user_message(), "Le problème est requis");
    }

    #[test]
    fn downstream_failures_share_one_message() {
        let external = GenerateError::ExternalCall("HTTP 401: bad key".into());
        let malformed: GenerateError = ExtractError::NoModules.into();
        assert_eq!(external.status(), 500);
        assert_eq!(malformed.status(), 500);
        assert_eq!(external.user_message(), malformed.user_message());
        assert!(!external.user_message().contains("401"));
    }
}

//! Convenience re-exports for the common scenario workflow.
//!
//! ```ignore
//! use architect::prelude::*;
//! ```

// Client and wire types.
pub use crate::{AnthropicClient, Message, MessageRole, MessagesCompletion, MessagesRequest};

// Configuration and errors.
pub use crate::config::ArchitectConfig;
pub use crate::error::GenerateError;

// Scenario model.
pub use crate::scenario::{ExtractError, Module, Scenario, extract_scenario, strip_fences};

// Service.
pub use crate::service::{CompletionFuture, ScenarioService, TextGenerator};

// Endpoint contract and client.
pub use crate::api::{ClientError, ErrorBody, GenerateRequest, GenerateResponse, ScenarioClient};

// Presentation state.
pub use crate::ui::ViewState;

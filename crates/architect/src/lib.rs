//! Make.com scenario architect: turn a free-text problem into an automation
//! scenario designed by an LLM.
//!
//! `architect` sends a single prompt to the
//! [Anthropic Messages API](https://docs.anthropic.com/en/api/messages) and
//! parses the model's reply into a [`Scenario`](scenario::Scenario): a titled
//! sequence of Make modules, each with an ordered configuration map, plus a
//! handful of implementation tips.
//!
//! # Getting started
//!
//! ```ignore
//! use architect::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), String> {
//!     let config = ArchitectConfig::from_env();
//!     let service = ScenarioService::from_config(&config)?;
//!
//!     let scenario = service
//!         .generate("Notifier mon équipe quand une facture impayée dépasse 30 jours")
//!         .await
//!         .map_err(|e| e.to_string())?;
//!
//!     println!("{scenario}");
//!     Ok(())
//! }
//! ```
//!
//! # Where to find things
//!
//! - **Scenario data model:** [`scenario::Scenario`] and [`scenario::Module`].
//!   Lenient parsing of model output lives in [`scenario::extract`], the
//!   instruction template in [`scenario::prompt`].
//!
//! - **Generate a scenario:** [`ScenarioService`](service::ScenarioService)
//!   validates the problem, builds the prompt, calls a
//!   [`TextGenerator`](service::TextGenerator) and extracts the JSON.
//!   [`AnthropicClient`] is the production generator; tests plug in stubs.
//!
//! - **Talk to the HTTP endpoint:** the wire contract (path, request and
//!   response bodies, user-facing messages) is in [`api`], and
//!   [`ScenarioClient`](api::client::ScenarioClient) calls it.
//!
//! - **Drive a frontend:** [`ViewState`](ui::ViewState) holds the page state
//!   (input, last scenario, in-flight flag, error) shared by UI frontends.
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`scenario`] | Scenario model, prompt template, fence stripping and JSON extraction |
//! | [`service`] | [`TextGenerator`](service::TextGenerator) seam and [`ScenarioService`](service::ScenarioService) |
//! | [`api`] | Endpoint wire contract and the endpoint HTTP client |
//! | [`ui`] | Presentation view state shared by frontends |
//! | [`config`] | [`ArchitectConfig`](config::ArchitectConfig): model, token ceiling, API key |
//! | [`error`] | [`GenerateError`](error::GenerateError) taxonomy and boundary mapping |

pub mod api;
pub mod config;
pub mod error;
pub mod prelude;
pub mod scenario;
pub mod service;
pub mod ui;

use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, trace};

// ── Constants ──────────────────────────────────────────────────────

pub const ANTHROPIC_URL: &str = "https://api.anthropic.com";

/// Path of the Messages endpoint, relative to the API base URL.
pub const MESSAGES_PATH: &str = "/v1/messages";

/// Value of the `anthropic-version` header.
pub const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Default model for scenario generation.
pub const DEFAULT_MODEL: &str = "claude-3-5-sonnet-20241022";

/// Output token ceiling for one scenario.
pub const DEFAULT_MAX_TOKENS: u32 = 4000;

// ── Request types ──────────────────────────────────────────────────

/// Messages API request body.
///
/// Scenario generation is single-turn: one user message, no system prompt,
/// no streaming and no sampling overrides.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct MessagesRequest {
    pub model: String,
    pub max_tokens: u32,
    pub messages: Vec<Message>,
}

impl MessagesRequest {
    /// Build a single-turn request carrying one user message.
    pub fn single_turn(model: impl Into<String>, max_tokens: u32, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            max_tokens,
            messages: vec![Message::user(prompt)],
        }
    }
}

/// Role of a message. Scenario requests only ever carry user turns.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
}

/// A message in the conversation.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Message {
    pub role: MessageRole,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }
}

// ── Response types ─────────────────────────────────────────────────

/// Raw API response (internal deserialization target).
#[derive(Deserialize, Debug)]
struct RawMessagesResponse {
    #[serde(default)]
    content: Option<Vec<ContentBlock>>,
    #[serde(default)]
    error: Option<ApiErrorResponse>,
    #[serde(default)]
    usage: Option<UsageInfo>,
    #[serde(default)]
    stop_reason: Option<String>,
}

#[derive(Deserialize, Debug)]
struct ApiErrorResponse {
    message: String,
}

/// One typed block of model output.
///
/// Only `text` blocks carry [`text`](Self::text); other block types
/// (`tool_use`, `thinking`, ...) are kept with their type name only.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ContentBlock {
    #[serde(rename = "type")]
    pub block_type: String,
    #[serde(default)]
    pub text: Option<String>,
}

/// Clean return type from [`AnthropicClient::messages()`].
#[derive(Debug, Clone)]
pub struct MessagesCompletion {
    pub content: Vec<ContentBlock>,
    pub usage: Option<UsageInfo>,
    pub stop_reason: Option<String>,
}

impl MessagesCompletion {
    /// Text of the first content block, or an empty string when the first
    /// block is missing or not a `text` block.
    pub fn first_text(&self) -> String {
        match self.content.first() {
            Some(block) if block.block_type == "text" => block.text.clone().unwrap_or_default(),
            _ => String::new(),
        }
    }
}

/// Token usage statistics.
#[derive(Deserialize, Debug, Clone)]
pub struct UsageInfo {
    pub input_tokens: Option<u32>,
    pub output_tokens: Option<u32>,
}

// ── Client ─────────────────────────────────────────────────────────

/// Async HTTP client for the Anthropic Messages API.
pub struct AnthropicClient {
    pub(crate) client: reqwest::Client,
    pub(crate) api_key: String,
    pub(crate) base_url: String,
}

impl AnthropicClient {
    /// Create a client for the public Anthropic API.
    pub fn new(api_key: impl Into<String>) -> Result<Self, String> {
        Self::with_base_url(api_key, ANTHROPIC_URL)
    }

    /// Create a client against a custom base URL (proxies, local fakes).
    pub fn with_base_url(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, String> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("architect/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| format!("failed to build HTTP client: {e}"))?;
        Ok(Self {
            client,
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Send a Messages request and return the typed content blocks.
    pub async fn messages(&self, body: &MessagesRequest) -> Result<MessagesCompletion, String> {
        debug!(
            "LLM request: model={}, messages={}, max_tokens={}",
            body.model,
            body.messages.len(),
            body.max_tokens,
        );
        trace!(
            "Request payload size: {} bytes",
            serde_json::to_string(body).map_or(0, |s| s.len())
        );

        let start = Instant::now();

        let resp = self
            .client
            .post(format!("{}{MESSAGES_PATH}", self.base_url))
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(body)
            .send()
            .await
            .map_err(|e| format!("request failed: {e}"))?;

        let status = resp.status();
        let text = resp
            .text()
            .await
            .map_err(|e| format!("failed to read response: {e}"))?;

        debug!(
            "LLM response: HTTP {} in {:.1}s ({} bytes)",
            status,
            start.elapsed().as_secs_f64(),
            text.len()
        );

        if !status.is_success() {
            return Err(format!("Anthropic API HTTP {status}: {text}"));
        }

        let parsed: RawMessagesResponse =
            serde_json::from_str(&text).map_err(|e| format!("failed to parse response: {e}"))?;

        if let Some(err) = parsed.error {
            return Err(format!("Anthropic API error: {}", err.message));
        }

        if let Some(ref usage) = parsed.usage {
            debug!(
                "Token usage: input={}, output={}",
                usage.input_tokens.unwrap_or(0),
                usage.output_tokens.unwrap_or(0),
            );
        }

        let content = parsed.content.unwrap_or_default();
        debug!(
            "LLM output: {} block(s), stop_reason={}",
            content.len(),
            parsed.stop_reason.as_deref().unwrap_or("(none)")
        );

        Ok(MessagesCompletion {
            content,
            usage: parsed.usage,
            stop_reason: parsed.stop_reason,
        })
    }
}

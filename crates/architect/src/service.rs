//! Scenario generation service.
//!
//! [`ScenarioService::generate`] is the whole request pipeline: validate the
//! problem, build the prompt, make exactly one call through a
//! [`TextGenerator`], and extract the scenario from the completion. There is
//! no retry, no caching and no state kept between calls.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use tracing::{debug, error, info};

use crate::config::ArchitectConfig;
use crate::error::GenerateError;
use crate::scenario::{Scenario, extract_scenario, scenario_prompt};
use crate::{AnthropicClient, MessagesRequest};

/// Boxed future returned by [`TextGenerator::complete`].
pub type CompletionFuture<'a> = Pin<Box<dyn Future<Output = Result<String, String>> + Send + 'a>>;

/// A single-turn text-generation backend.
///
/// Implementations send `request` to a model and resolve to the completion
/// text (the first text block, or an empty string when there is none).
/// Errors are plain strings; the service folds them into
/// [`GenerateError::ExternalCall`].
pub trait TextGenerator: Send + Sync {
    fn complete(&self, request: MessagesRequest) -> CompletionFuture<'_>;
}

impl TextGenerator for AnthropicClient {
    fn complete(&self, request: MessagesRequest) -> CompletionFuture<'_> {
        Box::pin(async move {
            let completion = self.messages(&request).await?;
            Ok(completion.first_text())
        })
    }
}

/// Turns problem statements into scenarios.
///
/// Cheap to clone; clones share the same generator.
#[derive(Clone)]
pub struct ScenarioService {
    generator: Arc<dyn TextGenerator>,
    model: String,
    max_tokens: u32,
}

impl ScenarioService {
    /// Wrap an arbitrary generator, taking model and token ceiling from
    /// `config`.
    pub fn new(generator: impl TextGenerator + 'static, config: &ArchitectConfig) -> Self {
        Self {
            generator: Arc::new(generator),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
        }
    }

    /// Build a service backed by an [`AnthropicClient`].
    pub fn from_config(config: &ArchitectConfig) -> Result<Self, String> {
        let client = AnthropicClient::with_base_url(config.api_key.clone(), config.base_url.clone())?;
        Ok(Self::new(client, config))
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// The request sent for `problem`: one user message carrying the full
    /// prompt.
    pub fn build_request(&self, problem: &str) -> MessagesRequest {
        MessagesRequest::single_turn(&self.model, self.max_tokens, scenario_prompt(problem))
    }

    /// Generate a scenario for `problem`.
    ///
    /// Fails with [`GenerateError::InvalidInput`] without calling the model
    /// when `problem` is blank. Downstream failures are logged here with
    /// their cause.
    pub async fn generate(&self, problem: &str) -> Result<Scenario, GenerateError> {
        if problem.trim().is_empty() {
            debug!("Rejecting blank problem statement");
            return Err(GenerateError::InvalidInput);
        }

        info!(
            "Generating scenario: model={}, problem={} chars",
            self.model,
            problem.chars().count()
        );

        let result = self.call_and_extract(problem).await;
        match &result {
            Ok(scenario) => info!(
                "Scenario generated: {} module(s), {} AI, {} tip(s)",
                scenario.modules.len(),
                scenario.ai_module_count(),
                scenario.tips.len()
            ),
            Err(e) => error!("Error generating scenario: {e}"),
        }
        result
    }

    async fn call_and_extract(&self, problem: &str) -> Result<Scenario, GenerateError> {
        let request = self.build_request(problem);
        let text = self
            .generator
            .complete(request)
            .await
            .map_err(GenerateError::ExternalCall)?;
        debug!("Completion: {} chars", text.len());
        Ok(extract_scenario(&text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Records every request and answers with a canned completion.
    struct StubGenerator {
        reply: Result<String, String>,
        requests: Arc<Mutex<Vec<MessagesRequest>>>,
    }

    impl StubGenerator {
        fn new(reply: Result<&str, &str>) -> (Self, Arc<Mutex<Vec<MessagesRequest>>>) {
            let requests = Arc::new(Mutex::new(Vec::new()));
            let stub = Self {
                reply: reply.map(str::to_string).map_err(str::to_string),
                requests: requests.clone(),
            };
            (stub, requests)
        }
    }

    impl TextGenerator for StubGenerator {
        fn complete(&self, request: MessagesRequest) -> CompletionFuture<'_> {
            self.requests.lock().unwrap().push(request);
            let reply = self.reply.clone();
            Box::pin(async move { reply })
        }
    }

    const SCENARIO: &str = r#"{"title":"T","description":"D","modules":[{"name":"Webhook","description":"d","config":{"a":"1"}},{"name":"OpenAI","description":"d","config":{},"isAI":true}],"tips":["x","y","z"]}"#;

    #[tokio::test]
    async fn blank_problem_makes_no_call() {
        let (stub, requests) = StubGenerator::new(Ok(SCENARIO));
        let service = ScenarioService::new(stub, &ArchitectConfig::default());

        for problem in ["", "   ", "\n\t"] {
            let err = service.generate(problem).await.unwrap_err();
            assert!(matches!(err, GenerateError::InvalidInput));
        }
        assert!(requests.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn valid_problem_makes_exactly_one_call() {
        let (stub, requests) = StubGenerator::new(Ok(SCENARIO));
        let config = ArchitectConfig::default().with_model("stub-model").with_max_tokens(123);
        let service = ScenarioService::new(stub, &config);

        let scenario = service.generate("Relancer les factures").await.unwrap();
        assert_eq!(scenario.modules.len(), 2);

        let requests = requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        let req = &requests[0];
        assert_eq!(req.model, "stub-model");
        assert_eq!(req.max_tokens, 123);
        assert_eq!(req.messages.len(), 1);
        assert!(req.messages[0].content.contains("\"Relancer les factures\""));
    }

    #[tokio::test]
    async fn fenced_completion_is_accepted() {
        let fenced = format!("```json\n{SCENARIO}\n```");
        let (stub, _) = StubGenerator::new(Ok(&fenced));
        let service = ScenarioService::new(stub, &ArchitectConfig::default());
        let scenario = service.generate("x").await.unwrap();
        assert_eq!(scenario.title, "T");
    }

    #[tokio::test]
    async fn malformed_completion_is_malformed_output() {
        let (stub, requests) = StubGenerator::new(Ok(r#"{"malformed"#));
        let service = ScenarioService::new(stub, &ArchitectConfig::default());
        let err = service.generate("x").await.unwrap_err();
        assert!(matches!(err, GenerateError::MalformedOutput(_)));
        assert_eq!(requests.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn generator_error_is_external_call() {
        let (stub, _) = StubGenerator::new(Err("request failed: connection refused"));
        let service = ScenarioService::new(stub, &ArchitectConfig::default());
        let err = service.generate("x").await.unwrap_err();
        assert!(matches!(err, GenerateError::ExternalCall(ref m) if m.contains("refused")));
        assert_eq!(err.status(), 500);
    }

    #[tokio::test]
    async fn empty_completion_is_malformed_output() {
        let (stub, _) = StubGenerator::new(Ok(""));
        let service = ScenarioService::new(stub, &ArchitectConfig::default());
        let err = service.generate("x").await.unwrap_err();
        assert!(matches!(err, GenerateError::MalformedOutput(_)));
    }
}

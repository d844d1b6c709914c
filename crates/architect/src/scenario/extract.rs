//! Lenient extraction of a [`Scenario`] from raw model output.
//!
//! Models are told to answer with raw JSON but regularly wrap it in a
//! markdown code fence anyway. [`strip_fences`] removes those fences and
//! [`extract_scenario`] parses what is left. Both are pure functions with no
//! network dependency.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use super::Scenario;

const FENCE: &str = "```";

static JSON_FENCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"```json\n?").expect("valid json fence pattern"));

static BARE_FENCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"```\n?").expect("valid fence pattern"));

/// Why model output could not be turned into a [`Scenario`].
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Not JSON, or JSON that does not have the scenario shape.
    #[error("invalid scenario JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// Parsed, but the `modules` array is empty.
    #[error("scenario has no modules")]
    NoModules,
}

/// Remove markdown code fences from model output.
///
/// The text is trimmed. When it then starts with a fence, every ```` ```json ````
/// marker and every bare ```` ``` ```` marker (each with an optional trailing
/// newline) is removed wherever it occurs, not only at the ends. Text that
/// does not start with a fence is returned trimmed and otherwise untouched.
///
/// Idempotent: `strip_fences(&strip_fences(x)) == strip_fences(x)`.
pub fn strip_fences(raw: &str) -> String {
    let trimmed = raw.trim();
    if !trimmed.starts_with(FENCE) {
        return trimmed.to_string();
    }
    let without_json = JSON_FENCE_RE.replace_all(trimmed, "");
    let without_bare = BARE_FENCE_RE.replace_all(&without_json, "");
    without_bare.trim().to_string()
}

/// Strip fences from `raw` and parse the rest as a [`Scenario`].
pub fn extract_scenario(raw: &str) -> Result<Scenario, ExtractError> {
    let cleaned = strip_fences(raw);
    let scenario: Scenario = serde_json::from_str(&cleaned)?;
    if scenario.modules.is_empty() {
        return Err(ExtractError::NoModules);
    }
    Ok(scenario)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = r#"{"title":"T","description":"D","modules":[{"name":"Webhook","description":"d","config":{"k":"v"},"isAI":false}],"tips":["a"]}"#;

    #[test]
    fn unfenced_text_is_only_trimmed() {
        assert_eq!(strip_fences(&format!("  \n{BODY}\n ")), BODY);
    }

    #[test]
    fn json_fence_is_removed() {
        let raw = format!("```json\n{BODY}\n```");
        assert_eq!(strip_fences(&raw), BODY);
    }

    #[test]
    fn bare_fence_is_removed() {
        let raw = format!("```\n{BODY}\n```\n");
        assert_eq!(strip_fences(&raw), BODY);
    }

    #[test]
    fn fences_inside_text_are_removed_too() {
        let raw = "```json\n{\"a\":\n```\n1}\n```";
        assert_eq!(strip_fences(raw), "{\"a\":\n1}");
    }

    #[test]
    fn inner_fence_without_leading_fence_is_kept() {
        let raw = "{\"a\":\"```\"}";
        assert_eq!(strip_fences(raw), raw);
    }

    #[test]
    fn strip_is_idempotent() {
        let inputs = [
            BODY.to_string(),
            format!("```json\n{BODY}\n```"),
            format!("\n\n```\n  {BODY}  \n```"),
            "``````json`".to_string(),
            "````\n".to_string(),
            String::new(),
        ];
        for input in inputs {
            let once = strip_fences(&input);
            assert_eq!(strip_fences(&once), once, "input: {input:?}");
        }
    }

    #[test]
    fn fenced_and_unfenced_parse_identically() {
        let plain = extract_scenario(BODY).unwrap();
        let fenced = extract_scenario(&format!("```json\n{BODY}\n```")).unwrap();
        assert_eq!(plain, fenced);
    }

    #[test]
    fn truncated_output_is_rejected() {
        assert!(matches!(
            extract_scenario(r#"{"malformed"#),
            Err(ExtractError::Json(_))
        ));
    }

    #[test]
    fn trailing_comma_is_rejected() {
        let raw = r#"{"title":"T","modules":[{"name":"m"},],"tips":[]}"#;
        assert!(matches!(extract_scenario(raw), Err(ExtractError::Json(_))));
    }

    #[test]
    fn missing_modules_is_rejected() {
        let raw = r#"{"title":"T","description":"D","tips":[]}"#;
        assert!(matches!(extract_scenario(raw), Err(ExtractError::Json(_))));
    }

    #[test]
    fn empty_modules_is_rejected() {
        let raw = r#"{"title":"T","description":"D","modules":[],"tips":[]}"#;
        assert!(matches!(extract_scenario(raw), Err(ExtractError::NoModules)));
    }

    #[test]
    fn empty_output_is_rejected() {
        assert!(extract_scenario("").is_err());
    }
}

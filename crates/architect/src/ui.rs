//! Presentation state shared by scenario frontends.
//!
//! [`ViewState`] is the page model: current input, last scenario, in-flight
//! flag and last error. It has no rendering dependencies. Frontends share it
//! as `Arc<Mutex<ViewState>>` and update it through
//! [`ViewState::begin_submit`] / [`ViewState::finish_submit`], or let
//! [`submit`] drive a whole round trip.
//!
//! ```text
//! input ──begin_submit──▶ in flight ──finish_submit──▶ scenario | error
//!   └── blank ──▶ error (no request)
//! ```

use std::sync::{Arc, Mutex};

use tracing::warn;

use crate::api::{ClientError, ScenarioClient};
use crate::scenario::Scenario;

/// Page title.
pub const APP_TITLE: &str = "Architecte Make IA";
/// Page subtitle.
pub const APP_SUBTITLE: &str = "Transformez vos idées en scénarios Make intelligents";
/// Label of the input field.
pub const INPUT_LABEL: &str = "Décrivez votre idée ou problème :";
/// Placeholder shown while the input is empty.
pub const INPUT_PLACEHOLDER: &str = "Exemple : Je veux automatiser l'envoi d'emails personnalisés à mes clients en fonction de leur comportement sur mon site web...";
/// Busy indicator text.
pub const LOADING_TEXT: &str = "L'IA conçoit votre scénario Make...";
/// Shown when the user submits a blank problem.
pub const MSG_EMPTY_INPUT: &str = "Veuillez décrire votre idée ou problème";
/// Shown for any failed request, whatever the cause.
pub const MSG_REQUEST_FAILED: &str = "Une erreur est survenue. Veuillez réessayer.";

/// Per-session page state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    /// Text currently typed by the user.
    pub input: String,
    /// Last successfully generated scenario.
    pub scenario: Option<Scenario>,
    /// True while a request is outstanding.
    pub in_flight: bool,
    /// Last error message, already localized.
    pub error: Option<String>,
}

impl ViewState {
    /// Start a submission.
    ///
    /// Returns the problem text to send, or `None` when nothing should be
    /// sent: a blank input sets the empty-input error, and a request already
    /// in flight blocks re-submission.
    pub fn begin_submit(&mut self) -> Option<String> {
        if self.in_flight {
            return None;
        }
        if self.input.trim().is_empty() {
            self.error = Some(MSG_EMPTY_INPUT.to_string());
            return None;
        }
        self.error = None;
        self.scenario = None;
        self.in_flight = true;
        Some(self.input.clone())
    }

    /// Apply the outcome of a submission. The error kind is not inspected.
    pub fn finish_submit(&mut self, result: Result<Scenario, ClientError>) {
        match result {
            Ok(scenario) => {
                self.scenario = Some(scenario);
                self.error = None;
            }
            Err(e) => {
                warn!("Scenario request failed: {e}");
                self.error = Some(MSG_REQUEST_FAILED.to_string());
            }
        }
        self.in_flight = false;
    }

    /// The result area is hidden while a request is in flight.
    pub fn visible_scenario(&self) -> Option<&Scenario> {
        if self.in_flight {
            None
        } else {
            self.scenario.as_ref()
        }
    }
}

/// Run one submission against `client`, updating `state` before and after
/// the request. The lock is never held across the network call.
///
/// Returns `false` when no request was sent.
pub async fn submit(state: &Arc<Mutex<ViewState>>, client: &ScenarioClient) -> bool {
    let problem = {
        let mut s = state.lock().unwrap_or_else(|e| e.into_inner());
        s.begin_submit()
    };
    let Some(problem) = problem else {
        return false;
    };

    let result = client.generate(&problem).await;

    let mut s = state.lock().unwrap_or_else(|e| e.into_inner());
    s.finish_submit(result);
    true
}

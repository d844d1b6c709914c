//! Scenario data model.
//!
//! A [`Scenario`] is what the model designs for a problem: a title, a
//! description, an ordered list of Make [`Module`]s and a few tips. Values
//! are built once from the model's output and never mutated afterwards.

pub mod extract;
pub mod prompt;

pub use extract::{ExtractError, extract_scenario, strip_fences};
pub use prompt::scenario_prompt;

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

/// Marker appended to the name of AI-driven modules.
pub const AI_MARKER: &str = "🧠";

/// An automation scenario designed by the model.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Scenario {
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Steps of the scenario, in execution order.
    pub modules: Vec<Module>,
    /// Practical advice. The prompt asks for 3 to 5 entries; any count is
    /// accepted.
    #[serde(default)]
    pub tips: Vec<String>,
}

/// One step of a scenario, e.g. a Webhook trigger or an OpenAI call.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Module {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Open parameter map chosen by the model; iteration order is the order
    /// the model wrote the keys in.
    #[serde(default, deserialize_with = "deserialize_config")]
    pub config: IndexMap<String, String>,
    #[serde(rename = "isAI", default, skip_serializing_if = "is_false")]
    pub is_ai: bool,
}

fn is_false(v: &bool) -> bool {
    !*v
}

/// Accept any JSON scalar as a config value. Strings pass through, other
/// values keep their compact JSON text, `null` becomes an empty string.
fn deserialize_config<'de, D>(deserializer: D) -> Result<IndexMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<IndexMap<String, serde_json::Value>> = Option::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .map(|(k, v)| {
            let value = match v {
                serde_json::Value::String(s) => s,
                serde_json::Value::Null => String::new(),
                other => other.to_string(),
            };
            (k, value)
        })
        .collect())
}

impl Scenario {
    /// Number of modules flagged as AI-driven.
    pub fn ai_module_count(&self) -> usize {
        self.modules.iter().filter(|m| m.is_ai).count()
    }

    /// Modules paired with their 1-based ordinal.
    pub fn numbered_modules(&self) -> impl Iterator<Item = (usize, &Module)> {
        self.modules.iter().enumerate().map(|(i, m)| (i + 1, m))
    }
}

impl Module {
    /// Display name, with the AI marker appended when the module is AI-driven.
    pub fn display_name(&self) -> String {
        if self.is_ai {
            format!("{} {AI_MARKER}", self.name)
        } else {
            self.name.clone()
        }
    }
}

/// Plain-text rendering used by the command-line client.
impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "🎯 {}  [{AI_MARKER} IA Intégrée]", self.title)?;
        writeln!(f)?;
        writeln!(f, "{}", self.description)?;
        writeln!(f)?;
        writeln!(f, "📦 Modules du scénario :")?;
        for (ordinal, module) in self.numbered_modules() {
            writeln!(f)?;
            writeln!(f, "  {ordinal}. {}", module.display_name())?;
            if !module.description.is_empty() {
                writeln!(f, "     {}", module.description)?;
            }
            writeln!(f, "     Configuration :")?;
            for (key, value) in &module.config {
                writeln!(f, "       - {key} : {value}")?;
            }
        }
        if !self.tips.is_empty() {
            writeln!(f)?;
            writeln!(f, "💡 Conseils de mise en œuvre :")?;
            for (i, tip) in self.tips.iter().enumerate() {
                writeln!(f, "  {}. {tip}", i + 1)?;
            }
        }
        Ok(())
    }
}

//! Instruction template for scenario generation.

/// Build the single user prompt sent to the model for `problem`.
///
/// The template fixes the assistant's role, embeds the problem verbatim,
/// spells out the exact JSON shape and asks for raw JSON with at least one
/// AI module and 3 to 5 tips.
pub fn scenario_prompt(problem: &str) -> String {
    format!(
        r#"Tu es un expert en automatisation Make.com et en Intelligence Artificielle.

L'utilisateur te présente cette idée ou ce problème :
"{problem}"

Ta mission : concevoir un scénario Make détaillé qui résout ce problème en intégrant de l'IA de manière intelligente.

Réponds UNIQUEMENT avec un JSON valide (sans markdown, sans backticks) suivant EXACTEMENT cette structure :

{{
  "title": "Titre du scénario",
  "description": "Description claire du scénario et de son objectif",
  "modules": [
    {{
      "name": "Nom du module Make (ex: Webhook, OpenAI, Gmail, etc.)",
      "description": "Ce que fait ce module dans le flux",
      "config": {{
        "Paramètre 1": "Valeur ou explication",
        "Paramètre 2": "Valeur ou explication"
      }},
      "isAI": true
    }}
  ],
  "tips": [
    "Conseil pratique 1",
    "Conseil pratique 2"
  ]
}}

Règles importantes :
- Intègre TOUJOURS au moins un module IA (OpenAI, Claude, ChatGPT, ou autre)
- Utilise des modules Make réels et populaires
- Sois créatif et inventif dans tes solutions
- Le champ "isAI" doit être true uniquement pour les modules d'IA
- Fournis 3-5 conseils pratiques dans "tips"
- Reste flexible et ne t'enferme pas dans des règles techniques trop strictes

JSON (sans markdown) :"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embeds_problem_verbatim() {
        let problem = "Notifier mon équipe quand une facture impayée dépasse 30 jours";
        let prompt = scenario_prompt(problem);
        assert!(prompt.contains(&format!("\"{problem}\"")));
    }

    #[test]
    fn describes_required_shape() {
        let prompt = scenario_prompt("x");
        for field in ["\"title\"", "\"description\"", "\"modules\"", "\"config\"", "\"isAI\"", "\"tips\""] {
            assert!(prompt.contains(field), "missing {field}");
        }
        assert!(prompt.contains("sans markdown"));
        assert!(prompt.contains("au moins un module IA"));
        assert!(prompt.contains("3-5 conseils"));
    }

    #[test]
    fn braces_in_problem_are_not_interpreted() {
        let prompt = scenario_prompt("{title} {{x}}");
        assert!(prompt.contains("\"{title} {{x}}\""));
    }

    #[test]
    fn template_braces_are_single() {
        let prompt = scenario_prompt("x");
        assert!(prompt.contains("{\n  \"title\""));
        assert!(!prompt.contains("{{"));
    }
}

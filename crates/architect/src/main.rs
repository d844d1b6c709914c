//! Generate a Make scenario for a problem and print it.
//!
//! Calls the Anthropic API directly, without the web endpoint. Reads the
//! API key from the `ANTHROPIC_API_KEY` environment variable.
//!
//! # Examples
//!
//! ```sh
//! # Problem as an argument
//! architect --problem "Notifier mon équipe quand une facture impayée dépasse 30 jours"
//!
//! # Pipe the problem from stdin and print the raw scenario JSON
//! echo "Trier mes emails de support" | architect --stdin --json
//!
//! # Another model, more verbose logs
//! RUST_LOG=architect=debug architect --problem "..." --model claude-sonnet-4-20250514
//! ```

use std::io::{self, Read};
use std::process;

use architect::prelude::*;
use architect::{DEFAULT_MAX_TOKENS, DEFAULT_MODEL};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Generate a Make scenario for a problem and print it.
///
/// Reads the API key from the ANTHROPIC_API_KEY environment variable.
#[derive(Parser)]
#[command(name = "architect")]
struct Cli {
    /// Problem or idea to automate
    #[arg(long)]
    problem: Option<String>,

    /// Read the problem from stdin
    #[arg(long)]
    stdin: bool,

    /// Model to use
    #[arg(long, default_value = DEFAULT_MODEL)]
    model: String,

    /// Maximum tokens in the model's answer
    #[arg(long, default_value_t = DEFAULT_MAX_TOKENS)]
    max_tokens: u32,

    /// Print the scenario as JSON instead of formatted text
    #[arg(long)]
    json: bool,
}

fn read_problem(cli: &Cli) -> Result<String, String> {
    let stdin_text = if cli.stdin {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| format!("failed to read stdin: {e}"))?;
        Some(buf)
    } else {
        None
    };

    match (&cli.problem, stdin_text) {
        (Some(p), Some(piped)) => Ok(format!("{p}\n\n{piped}")),
        (Some(p), None) => Ok(p.clone()),
        (None, Some(piped)) => Ok(piped),
        (None, None) => Err("provide --problem, --stdin, or both".to_string()),
    }
}

async fn run(cli: &Cli) -> Result<String, String> {
    let problem = read_problem(cli)?;

    let config = ArchitectConfig::from_env()
        .with_model(&cli.model)
        .with_max_tokens(cli.max_tokens);
    let service = ScenarioService::from_config(&config)?;

    let scenario = service.generate(&problem).await.map_err(|e| e.to_string())?;

    if cli.json {
        serde_json::to_string_pretty(&scenario).map_err(|e| format!("failed to format scenario: {e}"))
    } else {
        Ok(scenario.to_string())
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    match run(&cli).await {
        Ok(output) => println!("{output}"),
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}

//! Terminal page for the Make scenario architect.
//!
//! Talks to a running `architect-web` server.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p architect-tui
//! cargo run -p architect-tui -- --endpoint http://127.0.0.1:8080
//! cargo run -p architect-tui -- --log-file architect-tui.log
//! ```

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use architect::prelude::*;
use architect_tui::{DEFAULT_ENDPOINT, file_log_writer, spawn_tui};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Terminal page for the Make scenario architect.
#[derive(Parser)]
#[command(about = "Describe a problem, get a Make scenario")]
struct Args {
    /// Base URL of the architect-web server.
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Write logs to this file. Without it nothing is logged, since the
    /// terminal is owned by the page.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), String> {
    let args = Args::parse();

    let _log_guard = match args.log_file {
        Some(ref path) => {
            let (writer, guard) = file_log_writer(path)
                .map_err(|e| format!("failed to open log file {}: {e}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
                )
                .with_writer(writer)
                .with_ansi(false)
                .init();
            Some(guard)
        }
        None => None,
    };

    let client = ScenarioClient::new(&args.endpoint)?;
    info!("Using endpoint {}", client.endpoint());

    let state = Arc::new(Mutex::new(ViewState::default()));
    let handle = spawn_tui(state, client, tokio::runtime::Handle::current());

    // Join on a blocking thread so the runtime keeps driving requests.
    tokio::task::spawn_blocking(move || handle.join())
        .await
        .map_err(|e| format!("TUI task failed: {e}"))?
        .map_err(|_| "TUI thread panicked".to_string())?;
    Ok(())
}

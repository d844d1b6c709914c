//! Make scenario endpoint server.
//!
//! Serves `POST /api/generate-scenario` backed by the Anthropic API. Reads
//! the API key from `ANTHROPIC_API_KEY`; a missing key is logged as a
//! warning at startup and every generation then fails with a 500.
//!
//! # Usage
//!
//! ```bash
//! ANTHROPIC_API_KEY=sk-ant-... cargo run -p architect-web
//! ANTHROPIC_API_KEY=sk-ant-... cargo run -p architect-web -- --port 8080
//! ANTHROPIC_API_KEY=sk-ant-... cargo run -p architect-web -- --static-dir ./out
//! ```
//!
//! Then:
//!
//! ```bash
//! curl -X POST http://127.0.0.1:3001/api/generate-scenario \
//!   -H 'Content-Type: application/json' \
//!   -d '{"problem": "Notifier mon équipe quand une facture impayée dépasse 30 jours"}'
//! ```

use std::net::IpAddr;
use std::path::PathBuf;

use architect::config::API_KEY_ENV;
use architect::prelude::*;
use architect::{DEFAULT_MAX_TOKENS, DEFAULT_MODEL};
use architect_web::{WebConfig, spawn_web};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Make scenario endpoint server.
#[derive(Parser)]
#[command(about = "HTTP endpoint that designs Make scenarios with Claude")]
struct Args {
    /// Model used for generation.
    #[arg(long, default_value = DEFAULT_MODEL)]
    model: String,

    /// Output token ceiling per scenario.
    #[arg(long, default_value_t = DEFAULT_MAX_TOKENS)]
    max_tokens: u32,

    /// Address to bind.
    #[arg(long, default_value = "127.0.0.1")]
    host: IpAddr,

    /// Port to listen on.
    #[arg(long, default_value_t = 3001)]
    port: u16,

    /// Serve a static frontend build from this directory.
    #[arg(long)]
    static_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), String> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    let config = ArchitectConfig::from_env()
        .with_model(&args.model)
        .with_max_tokens(args.max_tokens);
    if config.api_key.is_empty() {
        warn!("{API_KEY_ENV} is not set; generation requests will fail");
    }
    let service = ScenarioService::from_config(&config)?;

    let web_config = WebConfig {
        bind_addr: (args.host, args.port).into(),
        static_dir: args.static_dir,
    };
    let addr = spawn_web(service, web_config)
        .await
        .map_err(|e| format!("failed to start server: {e}"))?;
    info!("Listening on http://{addr} (model {})", config.model);

    tokio::signal::ctrl_c()
        .await
        .map_err(|e| format!("failed to listen for shutdown signal: {e}"))?;
    info!("Shutting down");
    Ok(())
}

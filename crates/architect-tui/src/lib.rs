//! Terminal page for the Make scenario architect.
//!
//! Renders a [`ViewState`] from `architect` with ratatui + crossterm: a
//! header, the problem input, and a result pane showing the busy indicator,
//! the last error, or the scenario card. Submissions go to the HTTP endpoint
//! through a [`ScenarioClient`] on Tokio tasks, so the render thread never
//! waits on the network.
//!
//! # Quick start
//!
//! ```ignore
//! use architect::prelude::*;
//! use architect_tui::spawn_tui;
//! use std::sync::{Arc, Mutex};
//!
//! let state = Arc::new(Mutex::new(ViewState::default()));
//! let client = ScenarioClient::new("http://127.0.0.1:3001")?;
//! let handle = spawn_tui(state, client, tokio::runtime::Handle::current());
//! handle.join().unwrap();
//! ```

use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::Duration;

use architect::api::ScenarioClient;
use architect::ui::{ViewState, submit};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use crossterm::{cursor, execute};
use ratatui::prelude::*;
use tokio::runtime::Handle;
use tracing::{debug, error};
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};

mod app;
mod input;
mod render;

pub use render::{result_lines, scenario_lines};

use app::App;
use input::handle_key_event;
use render::render;

/// Endpoint used when none is given on the command line.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:3001";

/// Non-blocking log writer appending to `path`, which is created if missing.
///
/// Keep the guard alive for as long as logs should be flushed; the terminal
/// itself is never written to.
pub fn file_log_writer(path: &Path) -> io::Result<(NonBlocking, WorkerGuard)> {
    let file = File::options().create(true).append(true).open(path)?;
    Ok(tracing_appender::non_blocking(file))
}

/// Spawn the TUI on a dedicated OS thread.
///
/// Requests are spawned on `runtime`. The TUI runs until the user quits;
/// a request still outstanding at that point is abandoned.
pub fn spawn_tui(
    state: Arc<Mutex<ViewState>>,
    client: ScenarioClient,
    runtime: Handle,
) -> JoinHandle<()> {
    std::thread::spawn(move || {
        if let Err(e) = run_tui(state, &client, &runtime) {
            error!("TUI error: {e}");
            eprintln!("TUI error: {e}");
        }
    })
}

/// Run the TUI event loop (blocking). Call this from a dedicated OS thread.
pub fn run_tui(
    state: Arc<Mutex<ViewState>>,
    client: &ScenarioClient,
    runtime: &Handle,
) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, cursor::Hide)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    let mut app = App::new();

    let mut on_submit = || {
        let state = state.clone();
        let client = client.clone();
        runtime.spawn(async move {
            if submit(&state, &client).await {
                debug!("Scenario request finished");
            }
        });
    };

    let result = loop {
        if app.should_quit {
            break Ok(());
        }

        if let Err(e) = terminal.draw(|frame| render(frame, &state, &mut app)) {
            break Err(e);
        }

        // Poll for input events (100ms timeout keeps the spinner moving).
        match event::poll(Duration::from_millis(100)) {
            Ok(true) => match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    handle_key_event(key, &mut app, &state, &mut on_submit);
                }
                Ok(_) => {}
                Err(e) => break Err(e),
            },
            Ok(false) => {}
            Err(e) => break Err(e),
        }

        app.tick = app.tick.wrapping_add(1);
    };

    // Restore terminal.
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, cursor::Show)?;
    terminal.show_cursor()?;
    result
}

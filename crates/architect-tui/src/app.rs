//! TUI-local state (not shared with the request tasks).

/// Input mode for the TUI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum InputMode {
    /// Keys edit the problem text; Enter submits, Esc leaves editing.
    Editing,
    /// Arrow keys scroll the result, `q` quits, `i`/Tab returns to editing.
    Browsing,
}

/// TUI-local state (not shared with the request tasks).
pub(crate) struct App {
    pub(crate) input_mode: InputMode,
    /// Lines scrolled from the top of the result pane.
    pub(crate) result_scroll: u16,
    /// Frame counter driving the busy spinner.
    pub(crate) tick: usize,
    pub(crate) should_quit: bool,
}

impl App {
    pub(crate) fn new() -> Self {
        Self {
            input_mode: InputMode::Editing,
            result_scroll: 0,
            tick: 0,
            should_quit: false,
        }
    }
}

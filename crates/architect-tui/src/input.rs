//! Key handling for the scenario page.

use std::sync::{Arc, Mutex};

use architect::ui::ViewState;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, InputMode};

pub(crate) fn handle_key_event(
    key: KeyEvent,
    app: &mut App,
    state: &Arc<Mutex<ViewState>>,
    on_submit: &mut dyn FnMut(),
) {
    // Ctrl+C always quits.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    match app.input_mode {
        InputMode::Editing => handle_editing_key(key, app, state, on_submit),
        InputMode::Browsing => handle_browsing_key(key, app, on_submit),
    }
}

fn handle_editing_key(
    key: KeyEvent,
    app: &mut App,
    state: &Arc<Mutex<ViewState>>,
    on_submit: &mut dyn FnMut(),
) {
    match key.code {
        KeyCode::Enter if key.modifiers.contains(KeyModifiers::ALT) => {
            state.lock().unwrap_or_else(|e| e.into_inner()).input.push('\n');
        }
        KeyCode::Enter => {
            app.result_scroll = 0;
            on_submit();
        }
        KeyCode::Backspace => {
            state.lock().unwrap_or_else(|e| e.into_inner()).input.pop();
        }
        KeyCode::Esc => app.input_mode = InputMode::Browsing,
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.lock().unwrap_or_else(|e| e.into_inner()).input.push(c);
        }
        _ => {}
    }
}

fn handle_browsing_key(key: KeyEvent, app: &mut App, on_submit: &mut dyn FnMut()) {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('i') | KeyCode::Tab => app.input_mode = InputMode::Editing,
        KeyCode::Enter => {
            app.result_scroll = 0;
            on_submit();
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.result_scroll = app.result_scroll.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.result_scroll = app.result_scroll.saturating_add(1);
        }
        KeyCode::PageUp => {
            app.result_scroll = app.result_scroll.saturating_sub(10);
        }
        KeyCode::PageDown => {
            app.result_scroll = app.result_scroll.saturating_add(10);
        }
        KeyCode::Home => app.result_scroll = 0,
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn setup() -> (App, Arc<Mutex<ViewState>>) {
        (App::new(), Arc::new(Mutex::new(ViewState::default())))
    }

    #[test]
    fn typing_edits_shared_input() {
        let (mut app, state) = setup();
        let mut submits = 0;
        for c in "abc".chars() {
            handle_key_event(key(KeyCode::Char(c)), &mut app, &state, &mut || submits += 1);
        }
        handle_key_event(key(KeyCode::Backspace), &mut app, &state, &mut || submits += 1);
        assert_eq!(state.lock().unwrap().input, "ab");
        assert_eq!(submits, 0);
    }

    #[test]
    fn enter_submits_and_alt_enter_inserts_newline() {
        let (mut app, state) = setup();
        let mut submits = 0;
        handle_key_event(
            KeyEvent::new(KeyCode::Enter, KeyModifiers::ALT),
            &mut app,
            &state,
            &mut || submits += 1,
        );
        assert_eq!(state.lock().unwrap().input, "\n");
        handle_key_event(key(KeyCode::Enter), &mut app, &state, &mut || submits += 1);
        assert_eq!(submits, 1);
    }

    #[test]
    fn q_types_while_editing_and_quits_while_browsing() {
        let (mut app, state) = setup();
        let mut noop = || {};
        handle_key_event(key(KeyCode::Char('q')), &mut app, &state, &mut noop);
        assert!(!app.should_quit);
        assert_eq!(state.lock().unwrap().input, "q");

        handle_key_event(key(KeyCode::Esc), &mut app, &state, &mut noop);
        assert_eq!(app.input_mode, InputMode::Browsing);
        handle_key_event(key(KeyCode::Char('q')), &mut app, &state, &mut noop);
        assert!(app.should_quit);
    }

    #[test]
    fn ctrl_c_quits_from_any_mode() {
        let (mut app, state) = setup();
        handle_key_event(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            &mut app,
            &state,
            &mut || {},
        );
        assert!(app.should_quit);
        assert!(state.lock().unwrap().input.is_empty());
    }

    #[test]
    fn browsing_scroll_saturates_at_top() {
        let (mut app, state) = setup();
        app.input_mode = InputMode::Browsing;
        let mut noop = || {};
        handle_key_event(key(KeyCode::Up), &mut app, &state, &mut noop);
        assert_eq!(app.result_scroll, 0);
        handle_key_event(key(KeyCode::PageDown), &mut app, &state, &mut noop);
        handle_key_event(key(KeyCode::Down), &mut app, &state, &mut noop);
        assert_eq!(app.result_scroll, 11);
        handle_key_event(key(KeyCode::Home), &mut app, &state, &mut noop);
        assert_eq!(app.result_scroll, 0);
    }
}

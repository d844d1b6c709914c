//! Rendering for the scenario page.

use std::sync::{Arc, Mutex};

use architect::scenario::{AI_MARKER, Scenario};
use architect::ui::{
    APP_SUBTITLE, APP_TITLE, INPUT_LABEL, INPUT_PLACEHOLDER, LOADING_TEXT, ViewState,
};
use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::app::{App, InputMode};

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

const AI_BADGE: &str = "🧠 IA Intégrée";
const MODULES_HEADING: &str = "📦 Modules du scénario :";
const CONFIG_HEADING: &str = "Configuration :";
const TIPS_HEADING: &str = "💡 Conseils de mise en œuvre :";
const SUBMIT_LABEL: &str = "✨ Générer le scénario Make";
const BUSY_LABEL: &str = "Génération en cours...";

// ── Scenario Card ─────────────────────────────────────────────────────

/// Lines of the scenario card: title and badge, description, numbered
/// modules with their configuration, then tips when there are any.
pub fn scenario_lines(scenario: &Scenario) -> Vec<Line<'static>> {
    let heading = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
    let dim = Style::default().fg(Color::DarkGray);

    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                format!("🎯 {}", scenario.title),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                format!("[{AI_BADGE}]"),
                Style::default().fg(Color::Magenta),
            ),
        ]),
        Line::from(scenario.description.clone()),
        Line::from(""),
        Line::styled(MODULES_HEADING, heading),
    ];

    for (ordinal, module) in scenario.numbered_modules() {
        lines.push(Line::from(""));
        let name_style = if module.is_ai {
            Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        };
        lines.push(Line::styled(
            format!("  {ordinal}. {}", module.display_name()),
            name_style,
        ));
        if !module.description.is_empty() {
            lines.push(Line::from(format!("     {}", module.description)));
        }
        lines.push(Line::styled(format!("     {CONFIG_HEADING}"), dim));
        for (key, value) in &module.config {
            lines.push(Line::from(vec![
                Span::styled(format!("       {key}"), Style::default().fg(Color::Cyan)),
                Span::styled(" : ", dim),
                Span::raw(value.clone()),
            ]));
        }
    }

    if !scenario.tips.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::styled(TIPS_HEADING, heading));
        for (i, tip) in scenario.tips.iter().enumerate() {
            lines.push(Line::from(format!("  {}. {tip}", i + 1)));
        }
    }

    lines
}

/// Contents of the result pane for the given page state.
///
/// While a request is in flight only the busy indicator is shown. An error
/// line precedes any scenario still on display.
pub fn result_lines(state: &ViewState, tick: usize) -> Vec<Line<'static>> {
    if state.in_flight {
        let frame = SPINNER[tick % SPINNER.len()];
        return vec![Line::styled(
            format!("{frame} {LOADING_TEXT}"),
            Style::default().fg(Color::Yellow),
        )];
    }

    let mut lines = Vec::new();
    if let Some(ref msg) = state.error {
        lines.push(Line::styled(
            format!("Erreur : {msg}"),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ));
    }
    if let Some(scenario) = state.visible_scenario() {
        if !lines.is_empty() {
            lines.push(Line::from(""));
        }
        lines.extend(scenario_lines(scenario));
    }
    lines
}

// ── Root Render ───────────────────────────────────────────────────────

pub(crate) fn render(frame: &mut Frame, state: &Arc<Mutex<ViewState>>, app: &mut App) {
    let area = frame.area();

    // [4] header | [6] input | [flex] result | [3] footer.
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(6),
            Constraint::Min(6),
            Constraint::Length(3),
        ])
        .split(area);

    // Clone what we need and release the lock before building widgets.
    let snap = state.lock().unwrap_or_else(|e| e.into_inner()).clone();

    render_header(frame, chunks[0]);
    render_input(frame, chunks[1], &snap, app);
    render_result(frame, chunks[2], &snap, app);
    render_footer(frame, chunks[3], &snap, app);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let text = vec![
        Line::styled(
            format!("🤖 {APP_TITLE}"),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Line::styled(APP_SUBTITLE, Style::default().fg(Color::DarkGray)),
    ];
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Blue));
    frame.render_widget(
        Paragraph::new(text).alignment(Alignment::Center).block(block),
        area,
    );
}

// ── Input Box ─────────────────────────────────────────────────────────

fn render_input(frame: &mut Frame, area: Rect, snap: &ViewState, app: &App) {
    let editing = app.input_mode == InputMode::Editing;
    let border = if editing {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let text: Text<'_> = if snap.input.is_empty() {
        let mut spans = Vec::new();
        if editing {
            spans.push(Span::raw("\u{2588}"));
        }
        spans.push(Span::styled(
            INPUT_PLACEHOLDER,
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
        ));
        Text::from(Line::from(spans))
    } else if editing {
        Text::raw(format!("{}\u{2588}", snap.input))
    } else {
        Text::raw(snap.input.as_str())
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(format!(" {INPUT_LABEL} "));
    frame.render_widget(
        Paragraph::new(text).wrap(Wrap { trim: false }).block(block),
        area,
    );
}

// ── Result Pane ───────────────────────────────────────────────────────

fn render_result(frame: &mut Frame, area: Rect, snap: &ViewState, app: &mut App) {
    let paragraph = Paragraph::new(result_lines(snap, app.tick)).wrap(Wrap { trim: false });

    // Scroll is in wrapped rows; clamp it so the last row stays reachable.
    let inner_width = area.width.saturating_sub(2);
    let inner_height = area.height.saturating_sub(2);
    let rows = u16::try_from(paragraph.line_count(inner_width)).unwrap_or(u16::MAX);
    app.result_scroll = app.result_scroll.min(rows.saturating_sub(inner_height));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Blue))
        .title(" Scénario ");
    frame.render_widget(
        paragraph.scroll((app.result_scroll, 0)).block(block),
        area,
    );
}

// ── Footer ────────────────────────────────────────────────────────────

fn render_footer(frame: &mut Frame, area: Rect, snap: &ViewState, app: &App) {
    let button = if snap.in_flight {
        Span::styled(BUSY_LABEL, Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(
            SUBMIT_LABEL,
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )
    };
    let hint = match app.input_mode {
        InputMode::Editing => "[Enter] générer  [Alt+Enter] nouvelle ligne  [Esc] parcourir",
        InputMode::Browsing => "[Enter] générer  [Up/Down] défiler  [i] éditer  [q] quitter",
    };

    let line = Line::from(vec![
        button,
        Span::raw("   "),
        Span::styled(hint, Style::default().fg(Color::DarkGray)),
    ]);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(Paragraph::new(line).block(block), area);
}

// ── Tests ─────────────────────────────────────────────────────────────

//! Left panel: Panel list + backend health.
//!
//! ```text
//! ┌──────────────────────┐
//! │   PANELS             │
//! │                      │
//! │  [1] Classrooms    3 │
//! │  [2] Teachers      5 │
//! │  [3] Ring History  2 │
//! │  [4] Backend         │
//! ├──────────────────────┤
//! │  BACKEND             │
//! │  REST: ● ONLINE      │
//! │  Ver:  1.4.2         │
//! │  Mode: LIVE          │
//! └──────────────────────┘
//! ```

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::domain::{App, Panel};

/// Render the left panel.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    // Vertical split: panel list (flexible) + backend health (fixed)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),    // Panel list
            Constraint::Length(7), // Backend health
        ])
        .split(area);

    render_panel_list(frame, chunks[0], app);
    render_backend_health(frame, chunks[1], app);
}

/// Render the panel list.
fn render_panel_list(frame: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = Panel::ALL
        .iter()
        .map(|&panel| {
            let is_selected = panel == app.active_panel;

            let count = match panel {
                Panel::Classrooms => Some(app.classrooms.len()),
                Panel::Teachers => Some(app.teachers.len()),
                Panel::RingHistory => Some(app.ring_history.len()),
                Panel::Backend => None,
            };
            let count_label = count.map(|n| n.to_string()).unwrap_or_default();

            // Highlight selected
            let line_style = if is_selected {
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            let spans = vec![
                Span::raw(format!("[{}] ", panel.hotkey())),
                Span::raw(format!("{:<15}", panel.name())),
                Span::styled(format!("{:>3}", count_label), Style::default().fg(Color::Cyan)),
            ];

            ListItem::new(Line::from(spans)).style(line_style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" PANELS ")
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    frame.render_widget(list, area);
}

/// Render the backend health summary.
fn render_backend_health(frame: &mut Frame, area: Rect, app: &App) {
    let (indicator, label, color) = match &app.health {
        Some(health) if health.is_ok() => ("●", "ONLINE", Color::Green),
        Some(_) => ("●", "DEGRADED", Color::Yellow),
        None => ("○", "OFFLINE", Color::Red),
    };

    let rest_line = Line::from(vec![
        Span::raw("REST: "),
        Span::styled(format!("{} {}", indicator, label), Style::default().fg(color)),
    ]);

    let version = app
        .health
        .as_ref()
        .and_then(|h| h.version.clone())
        .unwrap_or_else(|| "-".to_string());
    let version_line = Line::from(vec![
        Span::raw("Ver:  "),
        Span::styled(version, Style::default().fg(Color::Gray)),
    ]);

    let (mode, mode_color) = if app.demo {
        ("DEMO", Color::Yellow)
    } else {
        ("LIVE", Color::Green)
    };
    let mode_line = Line::from(vec![
        Span::raw("Mode: "),
        Span::styled(mode, Style::default().fg(mode_color)),
    ]);

    let text = vec![rest_line, version_line, Line::raw(""), mode_line];

    let paragraph = Paragraph::new(text).block(
        Block::default()
            .title(" BACKEND ")
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    frame.render_widget(paragraph, area);
}

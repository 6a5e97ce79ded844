//! Live events feed UI rendering.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::app::App;

/// Render the live events view.
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(5),    // Event list
            Constraint::Length(3), // Footer
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_event_list(frame, app, chunks[1]);
    render_footer(frame, chunks[2]);
}

/// Render the header bar.
fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let (stream_label, stream_color) = if app.is_demo() {
        ("demo", Color::Yellow)
    } else if app.ws_connected {
        ("live", Color::Green)
    } else {
        ("reconnecting", Color::Red)
    };

    let line = Line::from(vec![
        Span::styled(
            " LIVE CLASS EVENTS ",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!("│ {} logged ", app.live_events.len())),
        Span::raw("│ stream: "),
        Span::styled(stream_label, Style::default().fg(stream_color)),
    ]);

    let header =
        Paragraph::new(line).block(Block::default().borders(Borders::ALL).title(" EVENTS "));

    frame.render_widget(header, area);
}

/// Render the scrolling event list, newest first.
fn render_event_list(frame: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = if app.live_events.is_empty() {
        vec![ListItem::new(Line::from(Span::styled(
            " Waiting for events...",
            Style::default().fg(Color::DarkGray),
        )))]
    } else {
        app.live_events
            .iter()
            .map(|event| {
                let elapsed = event.timestamp.elapsed().as_secs();
                let time_str = format_elapsed(elapsed);

                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!(" {time_str:>8} "),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::raw("│ "),
                    Span::styled(
                        format!("{:<12}", event.event_type),
                        Style::default().fg(event_color(&event.event_type)),
                    ),
                    Span::raw("│ "),
                    Span::raw(event.description.clone()),
                ]))
            })
            .collect()
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" FEED ({}) ", app.live_events.len()))
            .border_style(Style::default().fg(Color::Green)),
    );

    frame.render_widget(list, area);
}

/// Color for an event type tag.
fn event_color(event_type: &str) -> Color {
    match event_type {
        "status" => Color::Cyan,
        "roster" => Color::Green,
        "ring" => Color::Yellow,
        "attendance" => Color::Green,
        "timetable" => Color::Magenta,
        "socket" => Color::Cyan,
        "api" => Color::Blue,
        "error" => Color::Red,
        _ => Color::Gray,
    }
}

/// Format elapsed seconds in a compact human form.
fn format_elapsed(secs: u64) -> String {
    if secs < 60 {
        format!("{}s ago", secs)
    } else if secs < 3600 {
        format!("{}m ago", secs / 60)
    } else {
        format!("{}h ago", secs / 3600)
    }
}

/// Render the footer bar.
fn render_footer(frame: &mut Frame, area: Rect) {
    let footer = Paragraph::new(Line::from(vec![
        Span::styled(" [1-4] ", Style::default().fg(Color::Yellow)),
        Span::raw("Tabs  "),
        Span::styled("[R] ", Style::default().fg(Color::Yellow)),
        Span::raw("Refresh  "),
        Span::styled("[?] ", Style::default().fg(Color::Yellow)),
        Span::raw("Help  "),
        Span::styled("[Q] ", Style::default().fg(Color::Yellow)),
        Span::raw("Quit"),
    ]))
    .block(Block::default().borders(Borders::ALL));

    frame.render_widget(footer, area);
}

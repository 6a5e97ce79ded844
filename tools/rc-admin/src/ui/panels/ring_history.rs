//! Random-ring history panel renderer.
//!
//! Lists past rings newest first, with the full selection for the
//! highlighted entry in a detail box below.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::domain::App;

/// Render the ring history panel.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(4),    // Ring list
            Constraint::Length(7), // Selected ring detail
        ])
        .split(area);

    render_list(frame, chunks[0], app);
    render_detail(frame, chunks[1], app);
}

fn render_list(frame: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = if app.ring_history.is_empty() {
        vec![ListItem::new(Line::from(Span::styled(
            " No rings yet.",
            Style::default().fg(Color::DarkGray),
        )))]
    } else {
        app.ring_history
            .iter()
            .enumerate()
            .map(|(i, record)| {
                let style = if i == app.selected {
                    Style::default().bg(Color::DarkGray).fg(Color::White)
                } else {
                    Style::default()
                };

                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!(" {} ", record.at.format("%H:%M:%S")),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::raw("│ rang "),
                    Span::styled(
                        format!("{:>3}", record.requested_label()),
                        Style::default().fg(Color::Yellow),
                    ),
                    Span::raw(format!(" │ {} selected", record.selected.len())),
                ]))
                .style(style)
            })
            .collect()
    };

    let list = List::new(items);
    frame.render_widget(list, area);
}

fn render_detail(frame: &mut Frame, area: Rect, app: &App) {
    let lines = match app.ring_history.get(app.selected) {
        Some(record) => vec![
            Line::from(vec![
                Span::raw(" At:        "),
                Span::styled(
                    record.at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
                    Style::default().fg(Color::Gray),
                ),
            ]),
            Line::from(vec![
                Span::raw(" Requested: "),
                Span::styled(
                    record.requested_label(),
                    Style::default().fg(Color::Yellow),
                ),
            ]),
            Line::from(vec![
                Span::raw(" Selected:  "),
                Span::styled(
                    record.selected.join(", "),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ]),
        ],
        None => vec![Line::from(Span::styled(
            " Nothing selected.",
            Style::default().fg(Color::DarkGray),
        ))],
    };

    let detail = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .title(" SELECTED RING ")
            .title_style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    frame.render_widget(detail, area);
}

//! Help overlay widget.

use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render a centered help overlay.
pub fn render_help_overlay(frame: &mut Frame) {
    let area = frame.area();

    // Center a box in the middle of the screen
    let popup_area = centered_rect(60, 70, area);

    // Clear the background
    frame.render_widget(Clear, popup_area);

    let help_text = vec![
        Line::from(vec![Span::styled(
            "RC-ADMIN HELP",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )]),
        Line::raw(""),
        Line::from(vec![Span::styled(
            "Navigation",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::raw(""),
        Line::from(vec![
            Span::styled("  1      ", Style::default().fg(Color::Yellow)),
            Span::raw("Classrooms panel"),
        ]),
        Line::from(vec![
            Span::styled("  2      ", Style::default().fg(Color::Yellow)),
            Span::raw("Teachers panel"),
        ]),
        Line::from(vec![
            Span::styled("  3      ", Style::default().fg(Color::Yellow)),
            Span::raw("Ring history panel"),
        ]),
        Line::from(vec![
            Span::styled("  4      ", Style::default().fg(Color::Yellow)),
            Span::raw("Backend status panel"),
        ]),
        Line::from(vec![
            Span::styled("  ↑/↓    ", Style::default().fg(Color::Yellow)),
            Span::raw("Navigate rows in the active panel"),
        ]),
        Line::raw(""),
        Line::from(vec![Span::styled(
            "Actions",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::raw(""),
        Line::from(vec![
            Span::styled("  N      ", Style::default().fg(Color::Yellow)),
            Span::raw("New classroom or teacher (type fields, Enter to advance)"),
        ]),
        Line::from(vec![
            Span::styled("  X      ", Style::default().fg(Color::Yellow)),
            Span::raw("Delete the selected row"),
        ]),
        Line::from(vec![
            Span::styled("  Esc    ", Style::default().fg(Color::Yellow)),
            Span::raw("Cancel a create flow (or quit from the dashboard)"),
        ]),
        Line::from(vec![
            Span::styled("  R      ", Style::default().fg(Color::Yellow)),
            Span::raw("Refresh data"),
        ]),
        Line::from(vec![
            Span::styled("  Q      ", Style::default().fg(Color::Yellow)),
            Span::raw("Quit"),
        ]),
        Line::from(vec![
            Span::styled("  ?      ", Style::default().fg(Color::Yellow)),
            Span::raw("Toggle this help"),
        ]),
        Line::raw(""),
        Line::from(vec![Span::styled(
            "Status Indicators",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::raw(""),
        Line::from(vec![
            Span::styled("  ● ONLINE   ", Style::default().fg(Color::Green)),
            Span::raw("Backend reachable and healthy"),
        ]),
        Line::from(vec![
            Span::styled("  ● DEGRADED ", Style::default().fg(Color::Yellow)),
            Span::raw("Backend reachable but not reporting ok"),
        ]),
        Line::from(vec![
            Span::styled("  ○ OFFLINE  ", Style::default().fg(Color::Red)),
            Span::raw("Backend unreachable"),
        ]),
        Line::raw(""),
        Line::from(vec![Span::styled(
            "Press any key to close",
            Style::default().fg(Color::DarkGray),
        )]),
    ];

    let paragraph = Paragraph::new(help_text).block(
        Block::default()
            .title(" Help ")
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    frame.render_widget(paragraph, popup_area);
}

/// Create a centered rectangle.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::vertical([Constraint::Percentage(percent_y)]).flex(Flex::Center);
    let horizontal = Layout::horizontal([Constraint::Percentage(percent_x)]).flex(Flex::Center);

    let [area] = vertical.areas(area);
    let [area] = horizontal.areas(area);
    area
}

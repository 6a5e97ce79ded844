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
            "RC-TUI HELP",
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
            Span::styled("  1-4    ", Style::default().fg(Color::Yellow)),
            Span::raw("Switch tab (Roster / Timetable / Calendar / Events)"),
        ]),
        Line::from(vec![
            Span::styled("  ↑/↓    ", Style::default().fg(Color::Yellow)),
            Span::raw("Move selection (row, period, or calendar week)"),
        ]),
        Line::from(vec![
            Span::styled("  ←/→    ", Style::default().fg(Color::Yellow)),
            Span::raw("Move across days (timetable and calendar)"),
        ]),
        Line::from(vec![
            Span::styled("  [/]    ", Style::default().fg(Color::Yellow)),
            Span::raw("Previous / next month on the calendar"),
        ]),
        Line::raw(""),
        Line::from(vec![Span::styled(
            "Roster Actions",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::raw(""),
        Line::from(vec![
            Span::styled("  Space  ", Style::default().fg(Color::Yellow)),
            Span::raw("Cycle the selected student's status"),
        ]),
        Line::from(vec![
            Span::styled("  P/A/L/C", Style::default().fg(Color::Yellow)),
            Span::raw(" Set status: Present / Absent / Left early / aCtive"),
        ]),
        Line::from(vec![
            Span::styled("  G      ", Style::default().fg(Color::Yellow)),
            Span::raw("Ring random students (empty count rings everyone)"),
        ]),
        Line::from(vec![
            Span::styled("  M      ", Style::default().fg(Color::Yellow)),
            Span::raw("Mark today's attendance from current statuses"),
        ]),
        Line::from(vec![
            Span::styled("  /      ", Style::default().fg(Color::Yellow)),
            Span::raw("Search by name, roll, or enrollment number"),
        ]),
        Line::from(vec![
            Span::styled("  F      ", Style::default().fg(Color::Yellow)),
            Span::raw("Cycle the status filter"),
        ]),
        Line::raw(""),
        Line::from(vec![Span::styled(
            "Timetable Actions",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::raw(""),
        Line::from(vec![
            Span::styled("  N / X  ", Style::default().fg(Color::Yellow)),
            Span::raw("Add / delete a period"),
        ]),
        Line::from(vec![
            Span::styled("  E      ", Style::default().fg(Color::Yellow)),
            Span::raw("Edit the selected period's subject"),
        ]),
        Line::from(vec![
            Span::styled("  U      ", Style::default().fg(Color::Yellow)),
            Span::raw("Save local timetable edits to the backend"),
        ]),
        Line::raw(""),
        Line::from(vec![Span::styled(
            "Status Colors",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::raw(""),
        Line::from(vec![
            Span::styled("  ACTIVE  ", Style::default().fg(Color::Green)),
            Span::raw("In class right now"),
        ]),
        Line::from(vec![
            Span::styled("  PRESENT ", Style::default().fg(Color::Cyan)),
            Span::raw("Attended today"),
        ]),
        Line::from(vec![
            Span::styled("  ABSENT  ", Style::default().fg(Color::Red)),
            Span::raw("Not in class today"),
        ]),
        Line::from(vec![
            Span::styled("  LEFT    ", Style::default().fg(Color::Yellow)),
            Span::raw("Attended, then left early"),
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

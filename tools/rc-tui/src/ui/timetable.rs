//! Timetable view UI rendering.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Row, Table},
    Frame,
};

use crate::app::{App, InputMode};

/// Render the timetable view.
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Day strip
            Constraint::Min(8),    // Period table
            Constraint::Length(1), // Input / error line
            Constraint::Length(3), // Footer
        ])
        .split(frame.area());

    render_day_strip(frame, app, chunks[0]);
    render_periods(frame, app, chunks[1]);
    render_status_line(frame, app, chunks[2]);
    render_footer(frame, chunks[3]);
}

/// Render the day selector strip.
fn render_day_strip(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![Span::raw(" ")];
    for (i, entry) in app.timetable.iter().enumerate() {
        let style = if i == app.timetable_day {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!(" {} ", entry.day), style));
        spans.push(Span::raw(" "));
    }

    if app.timetable.is_empty() {
        spans.push(Span::styled(
            "no timetable loaded",
            Style::default().fg(Color::DarkGray),
        ));
    }

    let strip = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" TIMETABLE "),
    );

    frame.render_widget(strip, area);
}

/// Render the period table for the selected day.
fn render_periods(frame: &mut Frame, app: &App, area: Rect) {
    let header = Row::new(vec![" Time", "Subject", "Teacher", "Room"])
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .height(1);

    let slots = app
        .timetable
        .get(app.timetable_day)
        .map(|e| e.slots.as_slice())
        .unwrap_or(&[]);

    let rows: Vec<Row> = slots
        .iter()
        .enumerate()
        .map(|(i, slot)| {
            let style = if i == app.timetable_slot {
                Style::default().bg(Color::DarkGray).fg(Color::White)
            } else {
                Style::default()
            };

            Row::new(vec![
                format!(" {} - {}", slot.start, slot.end),
                slot.subject.clone(),
                slot.teacher.clone(),
                slot.room.clone(),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(16),
        Constraint::Min(18),
        Constraint::Length(18),
        Constraint::Length(10),
    ];

    let title = app
        .timetable
        .get(app.timetable_day)
        .map(|e| format!(" {} ({} periods) ", e.day.to_uppercase(), e.slots.len()))
        .unwrap_or_else(|| " PERIODS ".to_string());

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    frame.render_widget(table, area);
}

fn render_status_line(frame: &mut Frame, app: &App, area: Rect) {
    let line = match app.input_mode {
        InputMode::SlotSubject => Line::from(vec![
            Span::styled(" New period subject: ", Style::default().fg(Color::Cyan)),
            Span::raw(app.input_buffer.clone()),
            Span::styled("▏", Style::default().fg(Color::Cyan)),
        ]),
        InputMode::SlotEdit => Line::from(vec![
            Span::styled(" Edit subject: ", Style::default().fg(Color::Cyan)),
            Span::raw(app.input_buffer.clone()),
            Span::styled("▏", Style::default().fg(Color::Cyan)),
        ]),
        _ => match &app.last_error {
            Some(error) => Line::from(Span::styled(
                format!(" {}", error),
                Style::default().fg(Color::Red),
            )),
            None => Line::default(),
        },
    };

    frame.render_widget(Paragraph::new(line), area);
}

/// Render the footer bar.
fn render_footer(frame: &mut Frame, area: Rect) {
    let footer = Paragraph::new(Line::from(vec![
        Span::styled(" [1-4] ", Style::default().fg(Color::Yellow)),
        Span::raw("Tabs  "),
        Span::styled("[←/→] ", Style::default().fg(Color::Yellow)),
        Span::raw("Day  "),
        Span::styled("[↑/↓] ", Style::default().fg(Color::Yellow)),
        Span::raw("Period  "),
        Span::styled("[N] ", Style::default().fg(Color::Yellow)),
        Span::raw("Add  "),
        Span::styled("[E] ", Style::default().fg(Color::Yellow)),
        Span::raw("Edit  "),
        Span::styled("[X] ", Style::default().fg(Color::Yellow)),
        Span::raw("Delete  "),
        Span::styled("[U] ", Style::default().fg(Color::Yellow)),
        Span::raw("Save  "),
        Span::styled("[R] ", Style::default().fg(Color::Yellow)),
        Span::raw("Reload  "),
        Span::styled("[Q] ", Style::default().fg(Color::Yellow)),
        Span::raw("Quit"),
    ]))
    .block(Block::default().borders(Borders::ALL));

    frame.render_widget(footer, area);
}

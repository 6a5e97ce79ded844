//! Roster view UI rendering.

use chrono::Utc;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Row, Table},
    Frame,
};
use rollcall_roster::{format_clock, status_counts};
use rollcall_types::StudentStatus;

use crate::app::{App, InputMode};

/// Render the roster view.
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(7), // Info panels
            Constraint::Min(8),    // Roster table
            Constraint::Length(1), // Input / error line
            Constraint::Length(3), // Footer
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_info_panels(frame, app, chunks[1]);
    render_roster_table(frame, app, chunks[2]);
    render_status_line(frame, app, chunks[3]);
    render_footer(frame, chunks[4]);
}

/// Color used for a status everywhere in the roster view.
pub fn status_color(status: StudentStatus) -> Color {
    match status {
        StudentStatus::Active => Color::Green,
        StudentStatus::Present => Color::Cyan,
        StudentStatus::Absent => Color::Red,
        StudentStatus::LeftEarly => Color::Yellow,
    }
}

/// Render the header bar.
fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let status_color = match app.status_str() {
        "LIVE" => Color::Green,
        "DEMO" => Color::Yellow,
        _ => Color::Red,
    };
    let status_symbol = if app.connected || app.is_demo() { "●" } else { "○" };

    let ws_symbol = if app.ws_connected { "●" } else { "○" };
    let ws_color = if app.ws_connected { Color::Green } else { Color::Red };

    let header = Paragraph::new(Line::from(vec![
        Span::raw(" Status: "),
        Span::styled(
            format!("{} {}", status_symbol, app.status_str()),
            Style::default().fg(status_color).add_modifier(Modifier::BOLD),
        ),
        Span::raw("    Session: "),
        Span::styled(
            app.session_timer.display(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            if app.session_timer.running { " ▶" } else { " ■" },
            Style::default().fg(if app.session_timer.running {
                Color::Green
            } else {
                Color::DarkGray
            }),
        ),
        Span::raw("    Present: "),
        Span::styled(
            format!("{:.0}%", app.presence_percent()),
            Style::default().fg(Color::Green),
        ),
        Span::raw("    Events: "),
        Span::styled(ws_symbol, Style::default().fg(ws_color)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(" ROLLCALL ─ CLASS DASHBOARD "),
    );

    frame.render_widget(header, area);
}

/// Render the info panels (Attendance + Session + Backend).
fn render_info_panels(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(34),
            Constraint::Percentage(33),
        ])
        .split(area);

    render_attendance_panel(frame, app, chunks[0]);
    render_session_panel(frame, app, chunks[1]);
    render_backend_panel(frame, app, chunks[2]);
}

fn render_attendance_panel(frame: &mut Frame, app: &App, area: Rect) {
    let counts = status_counts(&app.students);

    let text = vec![
        Line::from(vec![
            Span::raw(" Roster:    "),
            Span::styled(
                format!("{}", app.students.len()),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" students", Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(vec![
            Span::raw(" In class:  "),
            Span::styled(format!("{}", counts.active), Style::default().fg(Color::Green)),
            Span::raw("   Present: "),
            Span::styled(format!("{}", counts.present), Style::default().fg(Color::Cyan)),
        ]),
        Line::from(vec![
            Span::raw(" Absent:    "),
            Span::styled(format!("{}", counts.absent), Style::default().fg(Color::Red)),
            Span::raw("   Left: "),
            Span::styled(format!("{}", counts.left), Style::default().fg(Color::Yellow)),
        ]),
        Line::from(vec![
            Span::raw(" Marked:    "),
            Span::styled(
                format!(
                    "{}/{} ({:.0}%)",
                    app.summary.present, app.summary.total, app.summary.percentage
                ),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(vec![
            Span::raw(" Date:      "),
            Span::styled(
                app.summary
                    .date
                    .map(|d| d.format("%Y-%m-%d").to_string())
                    .unwrap_or_else(|| "not marked".to_string()),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" ATTENDANCE ")
        .border_style(Style::default().fg(Color::Blue));

    frame.render_widget(Paragraph::new(text).block(block), area);
}

fn render_session_panel(frame: &mut Frame, app: &App, area: Rect) {
    let ring_line = match &app.last_ring {
        Some(record) => Line::from(vec![
            Span::raw(" Last ring: "),
            Span::styled(
                format!("{} selected", record.selected.len()),
                Style::default().fg(Color::Yellow),
            ),
            Span::styled(
                format!(" ({})", record.at.format("%H:%M:%S")),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        None => Line::from(vec![
            Span::raw(" Last ring: "),
            Span::styled("none yet", Style::default().fg(Color::DarkGray)),
        ]),
    };

    let first_selected = app
        .last_ring
        .as_ref()
        .and_then(|r| r.selected.first().cloned())
        .unwrap_or_default();

    let text = vec![
        Line::from(vec![
            Span::raw(" Timer:     "),
            Span::styled(
                app.session_timer.display(),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                if app.session_timer.running {
                    " running"
                } else {
                    " stopped"
                },
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        ring_line,
        Line::from(vec![
            Span::raw("            "),
            Span::styled(first_selected, Style::default().fg(Color::Yellow)),
        ]),
        Line::from(vec![
            Span::raw(" Feed:      "),
            Span::styled(
                format!("{} events", app.live_events.len()),
                Style::default().fg(Color::White),
            ),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" SESSION ")
        .border_style(Style::default().fg(Color::Magenta));

    frame.render_widget(Paragraph::new(text).block(block), area);
}

fn render_backend_panel(frame: &mut Frame, app: &App, area: Rect) {
    let http_symbol = if app.connected { "●" } else { "○" };
    let http_color = if app.connected { Color::Green } else { Color::Red };

    let ws_symbol = if app.ws_connected { "●" } else { "○" };
    let ws_color = if app.ws_connected { Color::Green } else { Color::Red };

    let data_line = if app.demo_data {
        Line::from(vec![
            Span::raw(" Data:      "),
            Span::styled("built-in demo", Style::default().fg(Color::Yellow)),
        ])
    } else {
        Line::from(vec![
            Span::raw(" Data:      "),
            Span::styled("backend", Style::default().fg(Color::Green)),
        ])
    };

    let text = vec![
        Line::from(vec![
            Span::raw(" REST:      "),
            Span::styled(http_symbol, Style::default().fg(http_color)),
            Span::styled(
                if app.connected { " reachable" } else { " unreachable" },
                Style::default().fg(http_color),
            ),
        ]),
        Line::from(vec![
            Span::raw(" Socket:    "),
            Span::styled(ws_symbol, Style::default().fg(ws_color)),
            Span::styled(
                if app.ws_connected { " streaming" } else { " offline" },
                Style::default().fg(ws_color),
            ),
        ]),
        data_line,
        Line::from(vec![
            Span::raw(" Refresh:   "),
            Span::styled(
                format!("{}s ago", app.last_refresh.elapsed().as_secs()),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" BACKEND ")
        .border_style(Style::default().fg(Color::Yellow));

    frame.render_widget(Paragraph::new(text).block(block), area);
}

/// Render the roster table.
fn render_roster_table(frame: &mut Frame, app: &App, area: Rect) {
    let now = Utc::now();

    let header = Row::new(vec![" Roll", "Name", "Status", "Attend %", "In Class"])
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .height(1);

    let filtered = app.filtered_students();
    let rows: Vec<Row> = filtered
        .iter()
        .enumerate()
        .map(|(i, student)| {
            let row_style = if i == app.selected {
                Style::default().bg(Color::DarkGray).fg(Color::White)
            } else {
                Style::default()
            };

            let percent_color = if student.attendance_percent >= 75.0 {
                Color::Green
            } else if student.attendance_percent >= 50.0 {
                Color::Yellow
            } else {
                Color::Red
            };

            let in_class = student
                .elapsed_secs(now)
                .map(format_clock)
                .unwrap_or_else(|| "-".to_string());

            Row::new(vec![
                ratatui::text::Text::raw(format!(" {}", student.roll_no)),
                ratatui::text::Text::raw(student.name.clone()),
                ratatui::text::Text::styled(
                    student.status.label(),
                    Style::default().fg(status_color(student.status)),
                ),
                ratatui::text::Text::styled(
                    format!("{:.1}%", student.attendance_percent),
                    Style::default().fg(percent_color),
                ),
                ratatui::text::Text::raw(in_class),
            ])
            .style(row_style)
        })
        .collect();

    let widths = [
        Constraint::Length(6),
        Constraint::Min(20),
        Constraint::Length(9),
        Constraint::Length(10),
        Constraint::Length(10),
    ];

    let title = if app.filter.is_empty() {
        format!(" STUDENTS ({}) ", filtered.len())
    } else {
        format!(" STUDENTS ({} of {}) ", filtered.len(), app.students.len())
    };

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(Color::Green)),
    );

    frame.render_widget(table, area);
}

/// Render the input prompt / error / filter line.
fn render_status_line(frame: &mut Frame, app: &App, area: Rect) {
    let line = match app.input_mode {
        InputMode::Search => Line::from(vec![
            Span::styled(" Search: ", Style::default().fg(Color::Cyan)),
            Span::raw(app.input_buffer.clone()),
            Span::styled("▏", Style::default().fg(Color::Cyan)),
        ]),
        InputMode::RingCount => Line::from(vec![
            Span::styled(" Ring how many? ", Style::default().fg(Color::Yellow)),
            Span::raw(app.input_buffer.clone()),
            Span::styled("▏", Style::default().fg(Color::Yellow)),
            Span::styled("  (empty = everyone, Esc = cancel)", Style::default().fg(Color::DarkGray)),
        ]),
        // Timetable prompts render on the timetable tab.
        _ => {
            if let Some(error) = &app.last_error {
                Line::from(Span::styled(
                    format!(" {}", error),
                    Style::default().fg(Color::Red),
                ))
            } else if !app.filter.is_empty() {
                let status = app
                    .filter
                    .status
                    .map(|s| format!(" status={}", s.as_str()))
                    .unwrap_or_default();
                Line::from(Span::styled(
                    format!(" filter: \"{}\"{}", app.filter.query, status),
                    Style::default().fg(Color::DarkGray),
                ))
            } else {
                Line::default()
            }
        }
    };

    frame.render_widget(Paragraph::new(line), area);
}

/// Render the footer bar.
fn render_footer(frame: &mut Frame, area: Rect) {
    let footer = Paragraph::new(Line::from(vec![
        Span::styled(" [1-4] ", Style::default().fg(Color::Yellow)),
        Span::raw("Tabs  "),
        Span::styled("[Space] ", Style::default().fg(Color::Yellow)),
        Span::raw("Toggle  "),
        Span::styled("[P/A/L/C] ", Style::default().fg(Color::Yellow)),
        Span::raw("Set status  "),
        Span::styled("[G] ", Style::default().fg(Color::Yellow)),
        Span::raw("Ring  "),
        Span::styled("[M] ", Style::default().fg(Color::Yellow)),
        Span::raw("Mark  "),
        Span::styled("[/] ", Style::default().fg(Color::Yellow)),
        Span::raw("Search  "),
        Span::styled("[F] ", Style::default().fg(Color::Yellow)),
        Span::raw("Filter  "),
        Span::styled("[?] ", Style::default().fg(Color::Yellow)),
        Span::raw("Help  "),
        Span::styled("[Q] ", Style::default().fg(Color::Yellow)),
        Span::raw("Quit"),
    ]))
    .block(Block::default().borders(Borders::ALL));

    frame.render_widget(footer, area);
}

//! Teachers management panel renderer.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Row, Table},
    Frame,
};

use crate::domain::{App, InputMode};

/// Render the teachers panel.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Summary line
            Constraint::Min(4),    // Teacher table
            Constraint::Length(1), // Prompt / hint line
        ])
        .split(area);

    render_summary(frame, chunks[0], app);
    render_table(frame, chunks[1], app);
    render_prompt(frame, chunks[2], app);
}

fn render_summary(frame: &mut Frame, area: Rect, app: &App) {
    let assigned = app
        .teachers
        .iter()
        .filter(|t| t.classroom.is_some())
        .count();
    let summary = Paragraph::new(Line::from(Span::styled(
        format!(
            " {} teachers · {} assigned to a classroom",
            app.teachers.len(),
            assigned
        ),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(summary, area);
}

fn render_table(frame: &mut Frame, area: Rect, app: &App) {
    if app.teachers.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            " No teachers. Press [N] to create one.",
            Style::default().fg(Color::DarkGray),
        )));
        frame.render_widget(empty, area);
        return;
    }

    let header = Row::new(vec![" ID", "Name", "Email", "Subject", "Classroom"])
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .height(1);

    let rows: Vec<Row> = app
        .teachers
        .iter()
        .enumerate()
        .map(|(i, teacher)| {
            let style = if i == app.selected {
                Style::default().bg(Color::DarkGray).fg(Color::White)
            } else {
                Style::default()
            };

            Row::new(vec![
                format!(" {}", teacher.id),
                teacher.name.clone(),
                teacher.email.clone(),
                teacher.subject.clone(),
                teacher.classroom.clone().unwrap_or_else(|| "-".to_string()),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(6),
        Constraint::Min(16),
        Constraint::Min(22),
        Constraint::Length(14),
        Constraint::Length(12),
    ];

    frame.render_widget(Table::new(rows, widths).header(header), area);
}

fn render_prompt(frame: &mut Frame, area: Rect, app: &App) {
    let line = match app.input_mode {
        InputMode::Normal => Line::from(Span::styled(
            " [N] New teacher   [X] Delete selected   [↑↓] Select",
            Style::default().fg(Color::DarkGray),
        )),
        mode => {
            let prompt = mode.prompt().unwrap_or("Input");
            Line::from(vec![
                Span::styled(format!(" {}: ", prompt), Style::default().fg(Color::Cyan)),
                Span::raw(app.input_buffer.clone()),
                Span::styled("▏", Style::default().fg(Color::Cyan)),
            ])
        }
    };

    frame.render_widget(Paragraph::new(line), area);
}

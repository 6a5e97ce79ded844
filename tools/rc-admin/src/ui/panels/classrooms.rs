//! Classrooms management panel renderer.
//!
//! Displays the classroom list with student counts plus the create-flow
//! prompt when a new classroom is being typed.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Row, Table},
    Frame,
};

use crate::domain::{App, InputMode};

/// Render the classrooms panel.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Summary line
            Constraint::Min(4),    // Classroom table
            Constraint::Length(1), // Prompt / hint line
        ])
        .split(area);

    render_summary(frame, chunks[0], app);
    render_table(frame, chunks[1], app);
    render_prompt(frame, chunks[2], app);
}

fn render_summary(frame: &mut Frame, area: Rect, app: &App) {
    let students: u32 = app.classrooms.iter().map(|c| c.student_count).sum();
    let summary = Paragraph::new(Line::from(Span::styled(
        format!(
            " {} classrooms · {} students enrolled",
            app.classrooms.len(),
            students
        ),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(summary, area);
}

fn render_table(frame: &mut Frame, area: Rect, app: &App) {
    if app.classrooms.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            " No classrooms. Press [N] to create one.",
            Style::default().fg(Color::DarkGray),
        )));
        frame.render_widget(empty, area);
        return;
    }

    let header = Row::new(vec![" ID", "Name", "Subject", "Students"])
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .height(1);

    let rows: Vec<Row> = app
        .classrooms
        .iter()
        .enumerate()
        .map(|(i, classroom)| {
            let style = if i == app.selected {
                Style::default().bg(Color::DarkGray).fg(Color::White)
            } else {
                Style::default()
            };

            Row::new(vec![
                format!(" {}", classroom.id),
                classroom.name.clone(),
                classroom.subject.clone(),
                classroom.student_count.to_string(),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(6),
        Constraint::Min(16),
        Constraint::Length(18),
        Constraint::Length(10),
    ];

    frame.render_widget(Table::new(rows, widths).header(header), area);
}

fn render_prompt(frame: &mut Frame, area: Rect, app: &App) {
    let line = match app.input_mode {
        InputMode::Normal => Line::from(Span::styled(
            " [N] New classroom   [X] Delete selected   [↑↓] Select",
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

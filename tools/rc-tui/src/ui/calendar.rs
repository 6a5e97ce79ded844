//! Attendance calendar view UI rendering.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use rollcall_roster::{day_cell, DayCell, MonthStats};
use rollcall_types::{DayStatus, Holiday, HolidayKind};

use crate::app::App;

/// Render the calendar view.
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header with month stats
            Constraint::Min(10),   // Grid + day detail
            Constraint::Length(3), // Footer
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_grid(frame, app, body[0]);
    render_day_detail(frame, app, body[1]);
    render_footer(frame, chunks[2]);
}

/// Render the header bar with month totals.
fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let stats = MonthStats::from_records(&app.records);

    let line = Line::from(vec![
        Span::styled(
            format!(" {} ", app.month.title()),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw("│ Present: "),
        Span::styled(stats.present.to_string(), Style::default().fg(Color::Green)),
        Span::raw("  Absent: "),
        Span::styled(stats.absent.to_string(), Style::default().fg(Color::Red)),
        Span::raw("  Partial: "),
        Span::styled(stats.partial.to_string(), Style::default().fg(Color::Yellow)),
        Span::raw("  Holidays: "),
        Span::styled(
            stats.holidays.to_string(),
            Style::default().fg(Color::Magenta),
        ),
        Span::raw("  │ Month: "),
        Span::styled(
            format!("{:.1}%", stats.attendance_percentage()),
            Style::default().fg(percent_color(stats.attendance_percentage())),
        ),
    ]);

    let header = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" ATTENDANCE CALENDAR "),
    );

    frame.render_widget(header, area);
}

/// Render the Sunday-first month grid.
fn render_grid(frame: &mut Frame, app: &App, area: Rect) {
    let mut lines = vec![
        Line::default(),
        Line::from(Span::styled(
            "  Sun  Mon  Tue  Wed  Thu  Fri  Sat",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
    ];

    let days = app.month.days_in_month();
    let mut week: Vec<Span> = vec![Span::raw(" ")];
    for _ in 0..app.month.first_weekday() {
        week.push(Span::raw("     "));
    }

    for day in 1..=days {
        let (marker, marker_color, number_color) = match app.month.date(day) {
            Some(date) => match day_cell(date, &app.records, &app.holidays) {
                DayCell::Record(record) => {
                    let (glyph, color) = day_status_glyph(record.status);
                    (glyph, color, Color::White)
                }
                DayCell::Holiday(_) => ("★", Color::Magenta, Color::Magenta),
                DayCell::Empty => (" ", Color::DarkGray, Color::Gray),
            },
            None => (" ", Color::DarkGray, Color::Gray),
        };

        let mut number_style = Style::default().fg(number_color);
        let mut marker_style = Style::default().fg(marker_color);
        if day == app.selected_day {
            number_style = number_style.bg(Color::DarkGray).fg(Color::White);
            marker_style = marker_style.bg(Color::DarkGray);
        }

        week.push(Span::styled(format!("{day:>3}"), number_style));
        week.push(Span::styled(marker.to_string(), marker_style));
        week.push(Span::raw(" "));

        let column = (app.month.first_weekday() + day) % 7;
        if column == 0 {
            lines.push(Line::from(std::mem::take(&mut week)));
            lines.push(Line::default());
            week.push(Span::raw(" "));
        }
    }
    if week.len() > 1 {
        lines.push(Line::from(week));
    }

    let grid = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", app.month.title().to_uppercase()))
            .border_style(Style::default().fg(Color::Blue)),
    );

    frame.render_widget(grid, area);
}

/// Render the detail panel for the selected day.
fn render_day_detail(frame: &mut Frame, app: &App, area: Rect) {
    let mut lines = Vec::new();

    if let Some(date) = app.month.date(app.selected_day) {
        lines.push(Line::from(Span::styled(
            date.format(" %A, %-d %B %Y").to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::default());

        match day_cell(date, &app.records, &app.holidays) {
            DayCell::Record(record) => {
                let (_, color) = day_status_glyph(record.status);
                lines.push(Line::from(vec![
                    Span::raw(" Status:     "),
                    Span::styled(
                        format!("{:?}", record.status).to_uppercase(),
                        Style::default().fg(color).add_modifier(Modifier::BOLD),
                    ),
                ]));
                lines.push(Line::from(format!(
                    " Time:       {} / {} min",
                    record.attended_minutes, record.total_minutes
                )));
                lines.push(Line::from(vec![
                    Span::raw(" Attendance: "),
                    Span::styled(
                        format!("{:.1}%", record.percentage),
                        Style::default().fg(percent_color(record.percentage)),
                    ),
                ]));

                if !record.lectures.is_empty() {
                    lines.push(Line::default());
                    lines.push(Line::from(Span::styled(
                        " Lectures",
                        Style::default().fg(Color::Yellow),
                    )));
                    for lecture in &record.lectures {
                        let (mark, color) = if lecture.attended {
                            ("✓", Color::Green)
                        } else {
                            ("✗", Color::Red)
                        };
                        lines.push(Line::from(vec![
                            Span::styled(format!("  {mark} "), Style::default().fg(color)),
                            Span::raw(format!("{}  {}", lecture.time, lecture.subject)),
                        ]));
                    }
                }
            }
            DayCell::Holiday(holiday) => {
                lines.extend(holiday_lines(holiday));
            }
            DayCell::Empty => {
                lines.push(Line::from(Span::styled(
                    " No attendance record.",
                    Style::default().fg(Color::DarkGray),
                )));
            }
        }
    }

    let detail = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" DAY DETAIL ")
            .border_style(Style::default().fg(Color::Magenta)),
    );

    frame.render_widget(detail, area);
}

fn holiday_lines(holiday: &Holiday) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            format!(" ★ {}", holiday.name),
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("   {} holiday", holiday_kind_label(holiday.kind)),
            Style::default().fg(Color::Gray),
        )),
    ];
    if !holiday.description.is_empty() {
        lines.push(Line::default());
        lines.push(Line::from(format!(" {}", holiday.description)));
    }
    lines
}

fn holiday_kind_label(kind: HolidayKind) -> &'static str {
    match kind {
        HolidayKind::National => "National",
        HolidayKind::Festival => "Festival",
        HolidayKind::Academic => "Academic",
        HolidayKind::Weather => "Weather",
        HolidayKind::Other => "Other",
    }
}

/// Marker glyph and color for a day-level status.
fn day_status_glyph(status: DayStatus) -> (&'static str, Color) {
    match status {
        DayStatus::Present => ("●", Color::Green),
        DayStatus::Absent => ("●", Color::Red),
        DayStatus::Partial => ("◐", Color::Yellow),
        DayStatus::Holiday => ("★", Color::Magenta),
    }
}

fn percent_color(percent: f32) -> Color {
    if percent >= 75.0 {
        Color::Green
    } else if percent >= 50.0 {
        Color::Yellow
    } else {
        Color::Red
    }
}

/// Render the footer bar.
fn render_footer(frame: &mut Frame, area: Rect) {
    let footer = Paragraph::new(Line::from(vec![
        Span::styled(" [1-4] ", Style::default().fg(Color::Yellow)),
        Span::raw("Tabs  "),
        Span::styled("[←/→] ", Style::default().fg(Color::Yellow)),
        Span::raw("Day  "),
        Span::styled("[↑/↓] ", Style::default().fg(Color::Yellow)),
        Span::raw("Week  "),
        Span::styled("[[/]] ", Style::default().fg(Color::Yellow)),
        Span::raw("Month  "),
        Span::styled("[R] ", Style::default().fg(Color::Yellow)),
        Span::raw("Reload  "),
        Span::styled("[?] ", Style::default().fg(Color::Yellow)),
        Span::raw("Help  "),
        Span::styled("[Q] ", Style::default().fg(Color::Yellow)),
        Span::raw("Quit"),
    ]))
    .block(Block::default().borders(Borders::ALL));

    frame.render_widget(footer, area);
}

//! Backend status panel renderer.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::domain::App;

/// Render the backend status panel.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let (indicator, label, color) = match &app.health {
        Some(health) if health.is_ok() => ("●", "ONLINE", Color::Green),
        Some(_) => ("●", "DEGRADED", Color::Yellow),
        None => ("○", "OFFLINE", Color::Red),
    };

    let endpoint = if app.demo {
        "(none - demo mode)".to_string()
    } else {
        app.endpoint.clone()
    };

    let version = app
        .health
        .as_ref()
        .and_then(|h| h.version.clone())
        .unwrap_or_else(|| "-".to_string());

    let (server_clock, uptime) = match &app.server_time {
        Some(time) => (
            time.now.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
            format_uptime(time.uptime_secs),
        ),
        None => ("-".to_string(), "-".to_string()),
    };

    let last_refresh = app
        .last_refresh
        .map(|t| t.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| "-".to_string());

    let lines = vec![
        Line::raw(""),
        Line::from(vec![
            Span::raw(" REST:          "),
            Span::styled(
                format!("{} {}", indicator, label),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(format!(" Endpoint:      {}", endpoint)),
        Line::from(format!(" Version:       {}", version)),
        Line::raw(""),
        Line::from(format!(" Server clock:  {}", server_clock)),
        Line::from(format!(" Uptime:        {}", uptime)),
        Line::raw(""),
        Line::from(vec![
            Span::raw(" Last refresh:  "),
            Span::styled(last_refresh, Style::default().fg(Color::DarkGray)),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), area);
}

/// Format an uptime in seconds to a human-readable string.
fn format_uptime(secs: u64) -> String {
    let hours = secs / 3600;
    let mins = (secs % 3600) / 60;
    let secs = secs % 60;

    if hours > 0 {
        format!("{}h {}m {}s", hours, mins, secs)
    } else if mins > 0 {
        format!("{}m {}s", mins, secs)
    } else {
        format!("{}s", secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_uptime() {
        assert_eq!(format_uptime(0), "0s");
        assert_eq!(format_uptime(59), "59s");
        assert_eq!(format_uptime(125), "2m 5s");
        assert_eq!(format_uptime(7385), "2h 3m 5s");
    }
}

//! Right panel: Active panel detail view.
//!
//! Dispatches to the appropriate panel-specific renderer based on selection.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders},
    Frame,
};

use crate::domain::App;

use super::panels;

/// Render the right panel (active panel detail).
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    // Create the container block with the panel name as title
    let title = format!(" {} ", app.active_panel.name().to_uppercase());
    let block = Block::default()
        .title(title)
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    // Calculate inner area for content
    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    // Dispatch to the panel-specific renderer
    panels::render(frame, inner_area, app);
}

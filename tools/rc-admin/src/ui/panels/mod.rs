//! Per-panel detail renderers.
//!
//! Each management surface has its own dedicated renderer file that knows
//! how to display its rows and, where applicable, the create-flow prompt.

mod backend;
mod classrooms;
mod ring_history;
mod teachers;

use ratatui::{layout::Rect, Frame};

use crate::domain::{App, Panel};

/// Dispatch to the appropriate panel renderer.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    match app.active_panel {
        Panel::Classrooms => classrooms::render(frame, area, app),
        Panel::Teachers => teachers::render(frame, area, app),
        Panel::RingHistory => ring_history::render(frame, area, app),
        Panel::Backend => backend::render(frame, area, app),
    }
}

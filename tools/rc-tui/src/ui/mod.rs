//! UI module for TUI rendering.

pub mod calendar;
pub mod events;
pub mod help;
pub mod roster;
pub mod timetable;

use crate::app::{App, Tab};
use ratatui::Frame;

/// Render the appropriate view based on active tab.
pub fn render(frame: &mut Frame, app: &App) {
    match app.active_tab {
        Tab::Roster => roster::render(frame, app),
        Tab::Timetable => timetable::render(frame, app),
        Tab::Calendar => calendar::render(frame, app),
        Tab::Events => events::render(frame, app),
    }

    if app.show_help {
        help::render_help_overlay(frame);
    }
}

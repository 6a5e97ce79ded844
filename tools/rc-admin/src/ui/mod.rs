//! UI module - TUI rendering components.
//!
//! The UI follows a component-based architecture:
//! - `layout.rs`: Main layout orchestration
//! - `left_panel.rs`: Panel list + backend health
//! - `right_panel.rs`: Dispatches to panel-specific renderers
//! - `widgets/`: Reusable UI components
//! - `panels/`: Per-panel detail renderers

mod layout;
mod left_panel;
mod right_panel;

pub mod panels;
pub mod widgets;

pub use layout::render;

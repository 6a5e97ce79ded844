//! Application domain: panel model and state.

mod app;
mod panel;

pub use app::{AdminAction, App, AppState, InputMode};
pub use panel::Panel;

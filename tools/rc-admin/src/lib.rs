//! RC-Admin: RollCall Admin Panel
//!
//! A TUI admin panel for managing classrooms and teachers and for inspecting
//! the random-ring history of the attendance backend.
//!
//! ## Architecture
//!
//! The panel follows a component-based architecture where each management
//! surface has its own dedicated renderer.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  RC-ADMIN                                                       │
//! ├────────────────────────┬────────────────────────────────────────┤
//! │  PANELS                │  DETAIL PANEL                          │
//! │  [1] Classrooms     3  │  (Per-panel renderer)                  │
//! │  [2] Teachers       5  │                                        │
//! │  [3] Ring History   2  │                                        │
//! │  [4] Backend        ●  │                                        │
//! ├────────────────────────┤                                        │
//! │  BACKEND               │                                        │
//! │  REST: ● ONLINE        │                                        │
//! │  Ver:  1.4.2           │                                        │
//! └────────────────────────┴────────────────────────────────────────┘
//! ```

pub mod domain;
pub mod ui;

pub use domain::{AdminAction, App, AppState, InputMode, Panel};

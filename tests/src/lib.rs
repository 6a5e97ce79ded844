//! # RollCall Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── support/          # In-process stub backend (REST + WebSocket)
//! │   └── backend.rs
//! │
//! └── integration/      # Client-against-backend flows
//!     ├── api_flows.rs     # REST endpoints through ApiClient
//!     ├── socket_flows.rs  # Live events through SocketClient
//!     └── roster_flows.rs  # Full teacher-workflow scenarios
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p rollcall-tests
//!
//! # By category
//! cargo test -p rollcall-tests integration::api_flows
//! cargo test -p rollcall-tests integration::socket_flows
//! cargo test -p rollcall-tests integration::roster_flows
//! ```

#![allow(unused_variables)]
#![allow(unused_imports)]
#![allow(dead_code)]

pub mod integration;
pub mod support;

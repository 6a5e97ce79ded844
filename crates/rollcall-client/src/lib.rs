//! # Client Crate
//!
//! The network boundary: [`ApiClient`] wraps the REST surface of the
//! attendance backend, [`SocketClient`] maintains the WebSocket event stream
//! and forwards parsed events into an `mpsc` channel.
//!
//! Both are used by the two front ends; neither holds application state.

pub mod api;
pub mod socket;

pub use api::{ApiClient, ApiError};
pub use socket::{SocketClient, SocketError, SocketEvent};

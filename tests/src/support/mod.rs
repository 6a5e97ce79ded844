//! Shared test infrastructure.

pub mod backend;

pub use backend::{StubBackend, StubData};

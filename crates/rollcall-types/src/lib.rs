//! # Shared Types Crate
//!
//! This crate contains all domain entities, the REST `{success, ...}`
//! envelope, and the socket wire events consumed by the RollCall clients.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: every type that crosses the wire or is
//!   shared between the two front ends is defined here.
//! - **Wire Fidelity**: field names serialize in the backend's camelCase;
//!   status values use the backend's lowercase labels.
//! - **No Behavior Beyond the Types**: roster operations (filtering, status
//!   cycling, random ring) live in `rollcall-roster`; network calls live in
//!   `rollcall-client`.

pub mod entities;
pub mod envelope;
pub mod errors;
pub mod events;

pub use entities::*;
pub use envelope::ApiEnvelope;
pub use errors::*;
pub use events::*;

//! # Roster Domain Crate
//!
//! Pure, in-memory logic shared by both front ends: roster filtering, the
//! attendance status cycle, the random ring, percentage math, the session
//! timer, calendar arithmetic, and the built-in demo dataset.
//!
//! ## Design Principles
//!
//! 1. **No I/O**: nothing here talks to the network or the terminal. The
//!    front ends own all I/O and feed results into these functions.
//! 2. **Single Writer**: roster mutation happens only through the owning
//!    event loop; these functions either borrow immutably or take `&mut`
//!    from that one owner.
//! 3. **Backend Is Authoritative**: percentages and calendar totals arrive
//!    precomputed; this crate only derives display-level aggregates that the
//!    backend does not send.

pub mod calendar;
pub mod demo;
pub mod ring;
pub mod roster;
pub mod session;
pub mod timetable;

pub use calendar::{day_cell, DayCell, MonthGrid, MonthStats};
pub use ring::{ring_random, RingError, RingSize};
pub use roster::{
    apply_status_change, filter_roster, presence_percentage, status_counts, toggle_status,
    upsert_student, RosterFilter, StatusCounts,
};
pub use session::{format_clock, SessionTimer};

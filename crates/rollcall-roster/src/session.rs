//! Session timer state.
//!
//! The backend is authoritative: `timer_updated` socket events carry elapsed
//! seconds and a running flag. Between events the front end ticks the timer
//! locally once a second so the display never freezes.

use rollcall_types::TimerState;

/// Class session stopwatch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionTimer {
    pub elapsed_secs: u64,
    pub running: bool,
}

impl SessionTimer {
    /// Adopts an authoritative state from the backend, discarding any
    /// locally ticked value.
    pub fn apply(&mut self, state: TimerState) {
        self.elapsed_secs = state.elapsed_secs;
        self.running = state.running;
    }

    /// Local 1 s advance. Does nothing while stopped.
    pub fn tick(&mut self) {
        if self.running {
            self.elapsed_secs += 1;
        }
    }

    /// `HH:MM:SS`, or `MM:SS` under an hour.
    pub fn display(&self) -> String {
        format_clock(self.elapsed_secs)
    }
}

/// Formats a second count as `MM:SS`, switching to `HH:MM:SS` at one hour.
pub fn format_clock(total_secs: u64) -> String {
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;

    if hours > 0 {
        format!("{hours:02}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes:02}:{seconds:02}")
    }
}

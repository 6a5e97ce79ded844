//! Socket event types pushed by the backend.
//!
//! Every frame on the wire is a JSON object of the form
//! `{"event": "<name>", "data": <payload>}`. Unknown event names are not an
//! error at this layer; the socket client skips frames that fail to parse.

use serde::{Deserialize, Serialize};

use crate::entities::{RingRecord, Student, StudentId, StudentStatus, TimetableSlot};
use crate::TimetableEntry;

/// A pushed change to one student's status.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusChange {
    pub student_id: StudentId,
    pub status: StudentStatus,
}

/// Authoritative session-timer state. Overrides any locally ticked value.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerState {
    pub elapsed_secs: u64,
    pub running: bool,
}

/// Full replacement timetable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimetableUpdate {
    pub entries: Vec<TimetableEntry>,
}

/// Replacement slots for a single day.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodsUpdate {
    pub day: String,
    pub slots: Vec<TimetableSlot>,
}

/// Attendance totals after a bulk mark.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceMarked {
    pub date: Option<chrono::NaiveDate>,
    pub present: u32,
    pub absent: u32,
}

/// Events the backend pushes over the socket.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum ClassEvent {
    /// One student's status changed on another device.
    StudentStatusChange(StatusChange),
    /// Session timer state, pushed roughly once a second while running.
    TimerUpdated(TimerState),
    /// A new student joined the class.
    StudentRegistered(Student),
    /// The whole timetable was replaced.
    TimetableUpdated(TimetableUpdate),
    /// One day's slots were replaced.
    PeriodsUpdated(PeriodsUpdate),
    /// A random ring fired (from any client).
    RandomRingTriggered(RingRecord),
    /// Attendance was submitted for the day.
    AttendanceMarked(AttendanceMarked),
}

impl ClassEvent {
    /// The wire name of this event, for feed rendering.
    pub fn name(&self) -> &'static str {
        match self {
            ClassEvent::StudentStatusChange(_) => "student_status_change",
            ClassEvent::TimerUpdated(_) => "timer_updated",
            ClassEvent::StudentRegistered(_) => "student_registered",
            ClassEvent::TimetableUpdated(_) => "timetable_updated",
            ClassEvent::PeriodsUpdated(_) => "periods_updated",
            ClassEvent::RandomRingTriggered(_) => "random_ring_triggered",
            ClassEvent::AttendanceMarked(_) => "attendance_marked",
        }
    }
}

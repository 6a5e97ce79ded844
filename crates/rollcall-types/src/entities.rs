//! # Core Domain Entities
//!
//! Defines the entities the attendance backend serves over REST and pushes
//! over the socket.
//!
//! ## Clusters
//!
//! - **Class Session**: `Student`, `StudentStatus`, `AttendanceSummary`
//! - **Calendar**: `AttendanceRecord`, `LectureEntry`, `Holiday`
//! - **Timetable**: `TimetableEntry`, `TimetableSlot`
//! - **Administration**: `Teacher`, `Classroom`, `RingRecord`
//! - **Backend Status**: `Health`, `ServerTime`

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier assigned to a student by the backend.
pub type StudentId = u64;

// =============================================================================
// CLUSTER A: CLASS SESSION
// =============================================================================

/// Attendance state of a student. Closed set; the toggle cycle advances
/// through the variants in declaration order and wraps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StudentStatus {
    /// In the session and participating.
    Active,
    /// Marked present for the day.
    Present,
    /// Marked absent for the day.
    Absent,
    /// Joined but left before the session ended.
    #[serde(rename = "left")]
    LeftEarly,
}

impl StudentStatus {
    /// The fixed toggle ordering. Wraps from the last entry to the first.
    pub const CYCLE: [StudentStatus; 4] = [
        StudentStatus::Active,
        StudentStatus::Present,
        StudentStatus::Absent,
        StudentStatus::LeftEarly,
    ];

    /// Advance to the next status in the cycle.
    ///
    /// Total function: every status has a successor, and four applications
    /// return the original status.
    pub fn next(self) -> Self {
        let idx = Self::CYCLE
            .iter()
            .position(|s| *s == self)
            .expect("status is always in the cycle");
        Self::CYCLE[(idx + 1) % Self::CYCLE.len()]
    }

    /// The backend's lowercase wire label.
    pub fn as_str(&self) -> &'static str {
        match self {
            StudentStatus::Active => "active",
            StudentStatus::Present => "present",
            StudentStatus::Absent => "absent",
            StudentStatus::LeftEarly => "left",
        }
    }

    /// Label for display in list rows and detail panels.
    pub fn label(&self) -> &'static str {
        match self {
            StudentStatus::Active => "ACTIVE",
            StudentStatus::Present => "PRESENT",
            StudentStatus::Absent => "ABSENT",
            StudentStatus::LeftEarly => "LEFT",
        }
    }

    /// Whether this status counts toward the presence percentage.
    pub fn counts_as_present(&self) -> bool {
        matches!(self, StudentStatus::Active | StudentStatus::Present)
    }
}

/// A student in the currently displayed class roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    /// Roll number within the class (display string, e.g. "07").
    pub roll_no: String,
    /// Institution-wide enrollment number.
    pub enrollment_no: String,
    pub status: StudentStatus,
    /// Term attendance percentage as supplied by the backend. Never derived
    /// from the calendar records; the two are unrelated datasets.
    pub attendance_percent: f32,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub guardian_phone: Option<String>,
    /// When the student joined the live session, if they have.
    #[serde(default)]
    pub joined_at: Option<DateTime<Utc>>,
}

impl Student {
    /// Seconds since the student joined the live session.
    pub fn elapsed_secs(&self, now: DateTime<Utc>) -> Option<u64> {
        let joined = self.joined_at?;
        Some((now - joined).num_seconds().max(0) as u64)
    }

    /// True if `needle` matches name, roll number, or enrollment number,
    /// case-insensitively.
    pub fn matches(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        let needle = needle.to_lowercase();
        self.name.to_lowercase().contains(&needle)
            || self.roll_no.to_lowercase().contains(&needle)
            || self.enrollment_no.to_lowercase().contains(&needle)
    }
}

/// Day-level attendance totals for the class.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceSummary {
    pub date: Option<NaiveDate>,
    pub total: u32,
    pub present: u32,
    pub absent: u32,
    pub percentage: f32,
}

/// One student's status in an attendance-marking request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceMark {
    pub student_id: StudentId,
    pub status: StudentStatus,
}

// =============================================================================
// CLUSTER B: CALENDAR
// =============================================================================

/// Day-level attendance classification in the calendar view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayStatus {
    Present,
    Absent,
    /// Attended some lectures but not all.
    Partial,
    Holiday,
}

/// One lecture within a calendar day.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LectureEntry {
    pub subject: String,
    /// Display label, e.g. "09:00 - 10:00".
    pub time: String,
    pub duration_minutes: u32,
    pub attended: bool,
}

/// A day-level attendance record shown in the calendar detail view.
///
/// Totals and percentage are supplied already consistent by the backend;
/// nothing here recomputes them from the lecture list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    pub date: NaiveDate,
    pub status: DayStatus,
    #[serde(default)]
    pub lectures: Vec<LectureEntry>,
    pub total_minutes: u32,
    pub attended_minutes: u32,
    pub percentage: f32,
}

/// Category tag used only to pick an icon/color for a holiday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HolidayKind {
    National,
    Festival,
    Academic,
    Weather,
    Other,
}

/// A holiday entry on the calendar.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holiday {
    pub date: NaiveDate,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "category")]
    pub kind: HolidayKind,
}

// =============================================================================
// CLUSTER C: TIMETABLE
// =============================================================================

/// One period slot in a day's timetable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimetableSlot {
    /// Start time label, e.g. "09:00".
    pub start: String,
    /// End time label, e.g. "10:00".
    pub end: String,
    pub subject: String,
    pub teacher: String,
    pub room: String,
}

/// A day's ordered list of period slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimetableEntry {
    /// Day name, e.g. "Monday".
    pub day: String,
    pub slots: Vec<TimetableSlot>,
}

// =============================================================================
// CLUSTER D: ADMINISTRATION
// =============================================================================

/// A teacher account (admin surface).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Teacher {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub subject: String,
    #[serde(default)]
    pub classroom: Option<String>,
}

/// Request body for creating a teacher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTeacher {
    pub name: String,
    pub email: String,
    pub subject: String,
}

/// A classroom (admin surface).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Classroom {
    pub id: u64,
    pub name: String,
    pub subject: String,
    pub student_count: u32,
}

/// Request body for creating a classroom.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewClassroom {
    pub name: String,
    pub subject: String,
}

/// One entry in the random-ring history.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RingRecord {
    pub id: Uuid,
    pub at: DateTime<Utc>,
    /// Requested count; `None` means "ring all".
    #[serde(default)]
    pub count: Option<u32>,
    /// Names of the selected students, in selection order.
    pub selected: Vec<String>,
}

impl RingRecord {
    /// Display label for the requested size.
    pub fn requested_label(&self) -> String {
        match self.count {
            Some(n) => n.to_string(),
            None => "all".to_string(),
        }
    }
}

/// Request body for triggering a random ring on the backend.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RingRequestBody {
    /// Requested count; `None` means "ring all".
    #[serde(default)]
    pub count: Option<u32>,
}

// =============================================================================
// CLUSTER E: BACKEND STATUS
// =============================================================================

/// Health-check payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Health {
    pub status: String,
    #[serde(default)]
    pub version: Option<String>,
}

impl Health {
    /// The backend reports "ok" when healthy.
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

/// Server clock payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerTime {
    pub now: DateTime<Utc>,
    #[serde(default)]
    pub uptime_secs: u64,
}

//! Roster operations: filtering, status toggling, and presence aggregates.

use rollcall_types::{StatusChange, Student, StudentStatus};

/// Text + status filter applied to the roster list.
#[derive(Debug, Clone, Default)]
pub struct RosterFilter {
    /// Case-insensitive substring matched against name, roll number, and
    /// enrollment number. Empty matches everything.
    pub query: String,
    /// When set, only students with exactly this status pass.
    pub status: Option<StudentStatus>,
}

impl RosterFilter {
    pub fn is_empty(&self) -> bool {
        self.query.is_empty() && self.status.is_none()
    }

    pub fn matches(&self, student: &Student) -> bool {
        if let Some(wanted) = self.status {
            if student.status != wanted {
                return false;
            }
        }
        student.matches(&self.query)
    }
}

/// Returns the students passing `filter`, in roster order. Never mutates.
pub fn filter_roster<'a>(students: &'a [Student], filter: &RosterFilter) -> Vec<&'a Student> {
    students.iter().filter(|s| filter.matches(s)).collect()
}

/// Computes the next status for a toggle.
///
/// An explicit `target` overrides the cycle; otherwise the status advances
/// one step through the fixed ordering.
pub fn toggle_status(current: StudentStatus, target: Option<StudentStatus>) -> StudentStatus {
    match target {
        Some(status) => status,
        None => current.next(),
    }
}

/// Per-status counts over the roster.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub active: u32,
    pub present: u32,
    pub absent: u32,
    pub left: u32,
}

impl StatusCounts {
    pub fn total(&self) -> u32 {
        self.active + self.present + self.absent + self.left
    }
}

/// Tallies the roster by status.
pub fn status_counts(students: &[Student]) -> StatusCounts {
    let mut counts = StatusCounts::default();
    for student in students {
        match student.status {
            StudentStatus::Active => counts.active += 1,
            StudentStatus::Present => counts.present += 1,
            StudentStatus::Absent => counts.absent += 1,
            StudentStatus::LeftEarly => counts.left += 1,
        }
    }
    counts
}

/// Class presence percentage: students counting as present over roster size.
///
/// An empty roster is 0, not a division error.
pub fn presence_percentage(students: &[Student]) -> f32 {
    if students.is_empty() {
        return 0.0;
    }
    let present = students.iter().filter(|s| s.status.counts_as_present()).count();
    present as f32 * 100.0 / students.len() as f32
}

/// Applies a pushed status change to the named student.
///
/// Returns `false` when no student with that id is in the roster, in which
/// case nothing changes.
pub fn apply_status_change(students: &mut [Student], change: &StatusChange) -> bool {
    match students.iter_mut().find(|s| s.id == change.student_id) {
        Some(student) => {
            student.status = change.status;
            true
        }
        None => false,
    }
}

/// Inserts a newly registered student, or replaces the existing entry with
/// the same id.
pub fn upsert_student(students: &mut Vec<Student>, student: Student) {
    match students.iter_mut().find(|s| s.id == student.id) {
        Some(existing) => *existing = student,
        None => students.push(student),
    }
}

//! Built-in demo dataset.
//!
//! Used by `--demo` mode and as the fallback payload when an initial fetch
//! fails. Deterministic; no randomness, so screenshots and tests are stable.

use chrono::{Datelike, Duration, NaiveDate, Utc};
use rollcall_types::{
    AttendanceRecord, AttendanceSummary, Classroom, DayStatus, Health, Holiday, HolidayKind,
    LectureEntry, RingRecord, ServerTime, Student, StudentStatus, Teacher, TimetableEntry,
    TimetableSlot,
};
use uuid::Uuid;

use crate::calendar::MonthGrid;

pub fn demo_students() -> Vec<Student> {
    let names = [
        ("Asha Verma", StudentStatus::Active, 91.2),
        ("Ravi Iyer", StudentStatus::Present, 83.5),
        ("Meera Nair", StudentStatus::Present, 88.0),
        ("Kabir Shah", StudentStatus::Absent, 64.9),
        ("Divya Rao", StudentStatus::Active, 95.4),
        ("Arjun Menon", StudentStatus::Present, 78.1),
        ("Sana Khan", StudentStatus::LeftEarly, 72.6),
        ("Vikram Joshi", StudentStatus::Present, 81.3),
        ("Priya Desai", StudentStatus::Absent, 58.7),
        ("Rahul Gupta", StudentStatus::Active, 89.9),
        ("Nisha Pillai", StudentStatus::Present, 92.8),
        ("Aditya Kulkarni", StudentStatus::Present, 75.0),
    ];

    let session_start = Utc::now() - Duration::minutes(25);

    names
        .iter()
        .enumerate()
        .map(|(i, (name, status, percent))| {
            let id = i as u64 + 1;
            Student {
                id,
                name: (*name).to_string(),
                roll_no: format!("{:02}", id),
                enrollment_no: format!("EN-2026-{:03}", 100 + id),
                status: *status,
                attendance_percent: *percent,
                email: Some(format!(
                    "{}@school.example",
                    name.to_lowercase().replace(' ', ".")
                )),
                phone: Some(format!("+91-98{:08}", 10_000_000 + id * 7)),
                guardian_phone: Some(format!("+91-97{:08}", 20_000_000 + id * 7)),
                joined_at: if *status == StudentStatus::Absent {
                    None
                } else {
                    Some(session_start + Duration::seconds(i as i64 * 40))
                },
            }
        })
        .collect()
}

pub fn demo_timetable() -> Vec<TimetableEntry> {
    let slot = |start: &str, end: &str, subject: &str, teacher: &str, room: &str| TimetableSlot {
        start: start.to_string(),
        end: end.to_string(),
        subject: subject.to_string(),
        teacher: teacher.to_string(),
        room: room.to_string(),
    };

    vec![
        TimetableEntry {
            day: "Monday".to_string(),
            slots: vec![
                slot("09:00", "10:00", "Mathematics", "S. Kulkarni", "B-204"),
                slot("10:00", "11:00", "Physics", "R. Banerjee", "Lab-2"),
                slot("11:15", "12:15", "English", "A. D'Souza", "B-204"),
            ],
        },
        TimetableEntry {
            day: "Tuesday".to_string(),
            slots: vec![
                slot("09:00", "10:00", "Chemistry", "V. Raman", "Lab-1"),
                slot("10:00", "11:00", "Mathematics", "S. Kulkarni", "B-204"),
                slot("11:15", "12:15", "History", "P. Sen", "B-108"),
            ],
        },
        TimetableEntry {
            day: "Wednesday".to_string(),
            slots: vec![
                slot("09:00", "10:00", "Biology", "M. Thomas", "Lab-3"),
                slot("10:00", "11:00", "English", "A. D'Souza", "B-204"),
            ],
        },
        TimetableEntry {
            day: "Thursday".to_string(),
            slots: vec![
                slot("09:00", "10:00", "Physics", "R. Banerjee", "Lab-2"),
                slot("10:00", "11:00", "Computer Science", "N. Bhat", "Lab-4"),
                slot("11:15", "12:15", "Mathematics", "S. Kulkarni", "B-204"),
            ],
        },
        TimetableEntry {
            day: "Friday".to_string(),
            slots: vec![
                slot("09:00", "10:00", "Geography", "P. Sen", "B-108"),
                slot("10:00", "11:00", "Physical Education", "D. Fernandes", "Ground"),
            ],
        },
    ]
}

pub fn demo_holidays(year: i32) -> Vec<Holiday> {
    let holiday = |m: u32, d: u32, name: &str, desc: &str, kind: HolidayKind| {
        NaiveDate::from_ymd_opt(year, m, d).map(|date| Holiday {
            date,
            name: name.to_string(),
            description: desc.to_string(),
            kind,
        })
    };

    [
        holiday(1, 26, "Republic Day", "National holiday", HolidayKind::National),
        holiday(3, 14, "Holi", "Festival of colours", HolidayKind::Festival),
        holiday(8, 15, "Independence Day", "National holiday", HolidayKind::National),
        holiday(9, 5, "Foundation Day", "School anniversary", HolidayKind::Academic),
        holiday(10, 2, "Gandhi Jayanti", "National holiday", HolidayKind::National),
        holiday(11, 9, "Diwali", "Festival of lights", HolidayKind::Festival),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Attendance records for one displayed month. Weekdays only; a fixed
/// pattern of absences and partial days so every cell kind shows up.
pub fn demo_calendar(grid: MonthGrid) -> Vec<AttendanceRecord> {
    let holidays = demo_holidays(grid.year());
    let mut records = Vec::new();

    for day in 1..=grid.days_in_month() {
        let Some(date) = grid.date(day) else { continue };

        // Sundays and Saturdays are off.
        if date.weekday().num_days_from_sunday() == 0
            || date.weekday().num_days_from_sunday() == 6
        {
            continue;
        }

        if holidays.iter().any(|h| h.date == date) {
            records.push(AttendanceRecord {
                date,
                status: DayStatus::Holiday,
                lectures: vec![],
                total_minutes: 0,
                attended_minutes: 0,
                percentage: 0.0,
            });
            continue;
        }

        let (status, attended, total) = match day % 9 {
            4 => (DayStatus::Absent, 0, 300),
            7 => (DayStatus::Partial, 180, 300),
            _ => (DayStatus::Present, 300, 300),
        };

        let attended_all = status == DayStatus::Present;
        records.push(AttendanceRecord {
            date,
            status,
            lectures: vec![
                LectureEntry {
                    subject: "Mathematics".to_string(),
                    time: "09:00 - 10:00".to_string(),
                    duration_minutes: 60,
                    attended: status != DayStatus::Absent,
                },
                LectureEntry {
                    subject: "Physics".to_string(),
                    time: "10:00 - 11:00".to_string(),
                    duration_minutes: 60,
                    attended: attended_all,
                },
                LectureEntry {
                    subject: "English".to_string(),
                    time: "11:15 - 12:15".to_string(),
                    duration_minutes: 60,
                    attended: attended_all,
                },
            ],
            total_minutes: total,
            attended_minutes: attended,
            percentage: if total == 0 {
                0.0
            } else {
                attended as f32 * 100.0 / total as f32
            },
        });
    }

    records
}

pub fn demo_teachers() -> Vec<Teacher> {
    let teacher = |id: u64, name: &str, subject: &str, classroom: &str| Teacher {
        id,
        name: name.to_string(),
        email: format!("{}@school.example", name.to_lowercase().replace(". ", ".")),
        subject: subject.to_string(),
        classroom: Some(classroom.to_string()),
    };

    vec![
        teacher(1, "S. Kulkarni", "Mathematics", "10-A"),
        teacher(2, "R. Banerjee", "Physics", "10-A"),
        teacher(3, "A. D'Souza", "English", "10-B"),
        teacher(4, "V. Raman", "Chemistry", "10-B"),
        teacher(5, "M. Thomas", "Biology", "9-A"),
    ]
}

pub fn demo_classrooms() -> Vec<Classroom> {
    let classroom = |id: u64, name: &str, subject: &str, count: u32| Classroom {
        id,
        name: name.to_string(),
        subject: subject.to_string(),
        student_count: count,
    };

    vec![
        classroom(1, "10-A", "Science", 12),
        classroom(2, "10-B", "Science", 14),
        classroom(3, "9-A", "General", 16),
    ]
}

pub fn demo_ring_history() -> Vec<RingRecord> {
    let now = Utc::now();
    vec![
        RingRecord {
            id: Uuid::from_u128(0x1001),
            at: now - Duration::minutes(12),
            count: Some(3),
            selected: vec![
                "Divya Rao".to_string(),
                "Ravi Iyer".to_string(),
                "Sana Khan".to_string(),
            ],
        },
        RingRecord {
            id: Uuid::from_u128(0x1002),
            at: now - Duration::minutes(40),
            count: None,
            selected: demo_students().iter().map(|s| s.name.clone()).collect(),
        },
    ]
}

pub fn demo_summary() -> AttendanceSummary {
    let students = demo_students();
    let present = students
        .iter()
        .filter(|s| s.status.counts_as_present())
        .count() as u32;
    let total = students.len() as u32;

    AttendanceSummary {
        date: Some(Utc::now().date_naive()),
        total,
        present,
        absent: total - present,
        percentage: if total == 0 {
            0.0
        } else {
            present as f32 * 100.0 / total as f32
        },
    }
}

pub fn demo_health() -> Health {
    Health {
        status: "ok".to_string(),
        version: Some("demo".to_string()),
    }
}

pub fn demo_server_time() -> ServerTime {
    ServerTime {
        now: Utc::now(),
        uptime_secs: 0,
    }
}

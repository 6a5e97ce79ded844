//! REST endpoint tests: the real `ApiClient` against the stub backend.
//!
//! Covers every endpoint group:
//! - Backend status: health, server time
//! - Roster: fetch, status updates, rejection paths
//! - Attendance: bulk mark, summary, calendar, holidays
//! - Timetable: fetch and replace
//! - Administration: teacher and classroom lifecycles
//! - Random ring: selection, invalid counts, history

#[cfg(test)]
mod tests {
    use chrono::{Datelike, NaiveDate};

    use rollcall_client::{ApiClient, ApiError};
    use rollcall_types::{
        AttendanceMark, AttendanceRecord, DayStatus, Holiday, HolidayKind, NewClassroom,
        NewTeacher, Student, StudentStatus, TimetableEntry, TimetableSlot,
    };

    use crate::support::{StubBackend, StubData};

    // =========================================================================
    // TEST FIXTURES
    // =========================================================================

    fn create_student(id: u64, name: &str, status: StudentStatus) -> Student {
        Student {
            id,
            name: name.to_string(),
            roll_no: format!("{id:02}"),
            enrollment_no: format!("EN-2026-{id:03}"),
            status,
            attendance_percent: 80.0,
            email: None,
            phone: None,
            guardian_phone: None,
            joined_at: None,
        }
    }

    fn seed_roster(count: u64) -> StubData {
        let students = (1..=count)
            .map(|id| create_student(id, &format!("Student {id:02}"), StudentStatus::Active))
            .collect();
        StubData {
            students,
            ..StubData::default()
        }
    }

    fn create_record(date: NaiveDate, status: DayStatus) -> AttendanceRecord {
        AttendanceRecord {
            date,
            status,
            lectures: Vec::new(),
            total_minutes: 300,
            attended_minutes: if status == DayStatus::Absent { 0 } else { 300 },
            percentage: if status == DayStatus::Absent { 0.0 } else { 100.0 },
        }
    }

    fn client_for(backend: &StubBackend) -> ApiClient {
        ApiClient::new(backend.base_url()).expect("build client")
    }

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    // =========================================================================
    // BACKEND STATUS
    // =========================================================================

    #[tokio::test]
    async fn test_health_and_server_time() {
        let backend = StubBackend::start().await;
        let client = client_for(&backend);

        let health = client.health().await.expect("health");
        assert!(health.is_ok());
        assert_eq!(health.version.as_deref(), Some("0.1.0-stub"));
        assert!(client.is_connected().await);

        let time = client.server_time().await.expect("server time");
        assert_eq!(time.uptime_secs, 60);
    }

    #[tokio::test]
    async fn test_connection_refused_maps_to_connection_error() {
        // Grab a port nothing listens on.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = ApiClient::new(format!("http://{addr}")).unwrap();
        assert!(!client.is_connected().await);

        match client.current_students().await {
            Err(ApiError::Connection(msg)) => assert!(msg.contains("cannot connect")),
            other => panic!("expected connection error, got {other:?}"),
        }
    }

    // =========================================================================
    // ROSTER
    // =========================================================================

    #[tokio::test]
    async fn test_fetch_current_students() {
        let backend = StubBackend::start_with(seed_roster(12)).await;
        let client = client_for(&backend);

        let students = client.current_students().await.expect("students");
        assert_eq!(students.len(), 12);
        assert_eq!(students[0].name, "Student 01");
        assert!(students.iter().all(|s| s.status == StudentStatus::Active));
    }

    #[tokio::test]
    async fn test_status_update_is_applied_and_recorded() {
        let backend = StubBackend::start_with(seed_roster(5)).await;
        let client = client_for(&backend);

        client
            .update_student_status(3, StudentStatus::Absent)
            .await
            .expect("status update");

        let data = backend.data.read().await;
        let student = data.students.iter().find(|s| s.id == 3).unwrap();
        assert_eq!(student.status, StudentStatus::Absent);
        assert_eq!(data.status_updates, vec![(3, StudentStatus::Absent)]);
    }

    #[tokio::test]
    async fn test_status_update_rejection_carries_backend_message() {
        let backend = StubBackend::start_with(seed_roster(5)).await;
        backend.data.write().await.reject_status_updates =
            Some("attendance window closed".to_string());
        let client = client_for(&backend);

        match client.update_student_status(3, StudentStatus::Absent).await {
            Err(ApiError::Backend(msg)) => assert_eq!(msg, "attendance window closed"),
            other => panic!("expected backend rejection, got {other:?}"),
        }

        // Nothing was recorded.
        assert!(backend.data.read().await.status_updates.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_student_is_rejected() {
        let backend = StubBackend::start_with(seed_roster(5)).await;
        let client = client_for(&backend);

        match client.update_student_status(99, StudentStatus::Present).await {
            Err(ApiError::Backend(msg)) => assert_eq!(msg, "student not found"),
            other => panic!("expected backend rejection, got {other:?}"),
        }
    }

    // =========================================================================
    // ATTENDANCE
    // =========================================================================

    #[tokio::test]
    async fn test_mark_attendance_returns_summary() {
        let backend = StubBackend::start_with(seed_roster(12)).await;
        let client = client_for(&backend);

        let marks: Vec<AttendanceMark> = (1..=12u64)
            .map(|id| AttendanceMark {
                student_id: id,
                status: if id <= 9 {
                    StudentStatus::Present
                } else {
                    StudentStatus::Absent
                },
            })
            .collect();

        let summary = client.mark_attendance(&marks).await.expect("mark");
        assert_eq!(summary.total, 12);
        assert_eq!(summary.present, 9);
        assert_eq!(summary.absent, 3);
        assert!((summary.percentage - 75.0).abs() < f32::EPSILON);

        // The marks were applied to the roster.
        let data = backend.data.read().await;
        let absent = data
            .students
            .iter()
            .filter(|s| s.status == StudentStatus::Absent)
            .count();
        assert_eq!(absent, 3);

        // And the stored summary matches what was returned.
        drop(data);
        let stored = client.attendance_summary().await.expect("summary");
        assert_eq!(stored.total, summary.total);
        assert_eq!(stored.present, summary.present);
    }

    #[tokio::test]
    async fn test_calendar_returns_only_requested_month() {
        let mut data = seed_roster(3);
        data.records = vec![
            create_record(date(2026, 8, 3), DayStatus::Present),
            create_record(date(2026, 8, 14), DayStatus::Absent),
            create_record(date(2026, 7, 30), DayStatus::Present),
        ];
        data.holidays = vec![Holiday {
            date: date(2026, 8, 15),
            name: "Independence Day".to_string(),
            description: String::new(),
            kind: HolidayKind::National,
        }];
        let backend = StubBackend::start_with(data).await;
        let client = client_for(&backend);

        let august = client.attendance_calendar(2026, 8).await.expect("calendar");
        assert_eq!(august.len(), 2);
        assert!(august.iter().all(|r| r.date.month() == 8));

        let holidays = client.holidays().await.expect("holidays");
        assert_eq!(holidays.len(), 1);
        assert_eq!(holidays[0].name, "Independence Day");
        assert_eq!(holidays[0].kind, HolidayKind::National);
    }

    // =========================================================================
    // TIMETABLE
    // =========================================================================

    #[tokio::test]
    async fn test_timetable_replace_round_trip() {
        let backend = StubBackend::start().await;
        let client = client_for(&backend);

        assert!(client.timetable().await.expect("empty timetable").is_empty());

        let entries = vec![TimetableEntry {
            day: "Monday".to_string(),
            slots: vec![
                TimetableSlot {
                    start: "09:00".to_string(),
                    end: "10:00".to_string(),
                    subject: "Mathematics".to_string(),
                    teacher: "A. Rao".to_string(),
                    room: "B-204".to_string(),
                },
                TimetableSlot {
                    start: "10:00".to_string(),
                    end: "11:00".to_string(),
                    subject: "Physics".to_string(),
                    teacher: "S. Iyer".to_string(),
                    room: "Lab 2".to_string(),
                },
            ],
        }];

        client.update_timetable(&entries).await.expect("update");
        let fetched = client.timetable().await.expect("timetable");
        assert_eq!(fetched, entries);
    }

    // =========================================================================
    // ADMINISTRATION
    // =========================================================================

    #[tokio::test]
    async fn test_teacher_lifecycle() {
        let backend = StubBackend::start().await;
        let client = client_for(&backend);

        let first = client
            .create_teacher(&NewTeacher {
                name: "A. Rao".to_string(),
                email: "rao@school.test".to_string(),
                subject: "Mathematics".to_string(),
            })
            .await
            .expect("create");
        assert_eq!(first.id, 1);
        assert_eq!(first.classroom, None);

        let second = client
            .create_teacher(&NewTeacher {
                name: "S. Iyer".to_string(),
                email: "iyer@school.test".to_string(),
                subject: "Physics".to_string(),
            })
            .await
            .expect("create");
        assert_eq!(second.id, 2);
        assert_eq!(client.teachers().await.expect("list").len(), 2);

        client.delete_teacher(first.id).await.expect("delete");
        let remaining = client.teachers().await.expect("list");
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, 2);

        match client.delete_teacher(first.id).await {
            Err(ApiError::Backend(msg)) => assert_eq!(msg, "teacher not found"),
            other => panic!("expected backend rejection, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_classroom_lifecycle() {
        let backend = StubBackend::start().await;
        let client = client_for(&backend);

        let room = client
            .create_classroom(&NewClassroom {
                name: "10-A".to_string(),
                subject: "General".to_string(),
            })
            .await
            .expect("create");
        assert_eq!(room.id, 1);
        assert_eq!(room.student_count, 0);

        client.delete_classroom(room.id).await.expect("delete");
        assert!(client.classrooms().await.expect("list").is_empty());

        match client.delete_classroom(room.id).await {
            Err(ApiError::Backend(msg)) => assert_eq!(msg, "classroom not found"),
            other => panic!("expected backend rejection, got {other:?}"),
        }
    }

    // =========================================================================
    // RANDOM RING
    // =========================================================================

    #[tokio::test]
    async fn test_ring_selects_distinct_students() {
        let backend = StubBackend::start_with(seed_roster(12)).await;
        let client = client_for(&backend);

        let record = client.ring_random(Some(5)).await.expect("ring");
        assert_eq!(record.count, Some(5));
        assert_eq!(record.selected.len(), 5);

        let mut unique = record.selected.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), 5, "selected students must be distinct");

        let history = client.ring_history().await.expect("history");
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].id, record.id);
    }

    #[tokio::test]
    async fn test_ring_all_returns_whole_roster() {
        let backend = StubBackend::start_with(seed_roster(12)).await;
        let client = client_for(&backend);

        let record = client.ring_random(None).await.expect("ring all");
        assert_eq!(record.count, None);
        assert_eq!(record.selected.len(), 12);
        assert_eq!(record.requested_label(), "all");
    }

    #[tokio::test]
    async fn test_ring_rejects_invalid_counts() {
        let backend = StubBackend::start_with(seed_roster(12)).await;
        let client = client_for(&backend);

        for bad in [0u32, 13] {
            match client.ring_random(Some(bad)).await {
                Err(ApiError::Backend(msg)) => {
                    assert!(msg.contains("invalid number of students"), "got: {msg}");
                }
                other => panic!("expected rejection for count {bad}, got {other:?}"),
            }
        }

        // No history entries for rejected rings.
        assert!(client.ring_history().await.expect("history").is_empty());
    }

    #[tokio::test]
    async fn test_ring_rejects_empty_roster() {
        let backend = StubBackend::start().await;
        let client = client_for(&backend);

        match client.ring_random(Some(3)).await {
            Err(ApiError::Backend(msg)) => assert!(msg.contains("empty roster")),
            other => panic!("expected rejection, got {other:?}"),
        }
    }
}

//! Full teacher-workflow scenarios: the roster domain crate driving the real
//! clients against the stub backend, the way the front ends do.
//!
//! - Flow 1: morning attendance (fetch, toggle, bulk mark, summary)
//! - Flow 2: the status toggle cycle over the wire
//! - Flow 3: optimistic update reverted after a backend rejection
//! - Flow 4: repeated random rings stay within the roster

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rollcall_client::{ApiClient, ApiError};
    use rollcall_roster::{
        apply_status_change, presence_percentage, status_counts, toggle_status,
    };
    use rollcall_types::{AttendanceMark, StatusChange, Student, StudentStatus};

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

    // =========================================================================
    // FLOW 1: MORNING ATTENDANCE
    // =========================================================================

    #[tokio::test]
    async fn test_morning_attendance_flow() {
        let backend = StubBackend::start_with(seed_roster(12)).await;
        let client = ApiClient::new(backend.base_url()).expect("build client");

        let mut roster = client.current_students().await.expect("fetch roster");
        assert_eq!(roster.len(), 12);

        // Three students did not show up.
        for id in [10u64, 11, 12] {
            let student = roster.iter_mut().find(|s| s.id == id).unwrap();
            student.status = toggle_status(student.status, Some(StudentStatus::Absent));
            client
                .update_student_status(id, student.status)
                .await
                .expect("status update");
        }

        let counts = status_counts(&roster);
        assert_eq!(counts.active, 9);
        assert_eq!(counts.absent, 3);

        // Submit the day's marks from the local roster state.
        let marks: Vec<AttendanceMark> = roster
            .iter()
            .map(|s| AttendanceMark {
                student_id: s.id,
                status: s.status,
            })
            .collect();
        let summary = client.mark_attendance(&marks).await.expect("mark");

        assert_eq!(summary.total, 12);
        assert_eq!(summary.present, 9);
        assert_eq!(summary.absent, 3);
        assert!((summary.percentage - presence_percentage(&roster)).abs() < f32::EPSILON);
    }

    // =========================================================================
    // FLOW 2: STATUS CYCLE OVER THE WIRE
    // =========================================================================

    #[tokio::test]
    async fn test_status_cycle_round_trip() {
        let mut data = seed_roster(5);
        data.students[4].status = StudentStatus::Absent;
        let backend = StubBackend::start_with(data).await;
        let client = ApiClient::new(backend.base_url()).expect("build client");

        // Two untargeted toggles: absent -> left -> active.
        let mut status = StudentStatus::Absent;
        for expected in [StudentStatus::LeftEarly, StudentStatus::Active] {
            status = toggle_status(status, None);
            assert_eq!(status, expected);
            client
                .update_student_status(5, status)
                .await
                .expect("status update");
        }

        let data = backend.data.read().await;
        assert_eq!(
            data.status_updates,
            vec![
                (5, StudentStatus::LeftEarly),
                (5, StudentStatus::Active),
            ]
        );
        let labels: Vec<&str> = data.status_updates.iter().map(|(_, s)| s.as_str()).collect();
        assert_eq!(labels, vec!["left", "active"]);
    }

    // =========================================================================
    // FLOW 3: OPTIMISTIC UPDATE REVERTED ON REJECTION
    // =========================================================================

    #[tokio::test]
    async fn test_rejected_update_reverts_to_backend_state() {
        let backend = StubBackend::start_with(seed_roster(5)).await;
        backend.data.write().await.reject_status_updates =
            Some("attendance window closed".to_string());
        let client = ApiClient::new(backend.base_url()).expect("build client");

        let mut roster = client.current_students().await.expect("fetch roster");

        // Apply locally first, the way the dashboard does.
        let change = StatusChange {
            student_id: 3,
            status: StudentStatus::Absent,
        };
        assert!(apply_status_change(&mut roster, &change));
        assert_eq!(roster[2].status, StudentStatus::Absent);

        // Backend refuses; refetch restores the authoritative state.
        match client.update_student_status(3, StudentStatus::Absent).await {
            Err(ApiError::Backend(msg)) => assert_eq!(msg, "attendance window closed"),
            other => panic!("expected backend rejection, got {other:?}"),
        }
        roster = client.current_students().await.expect("refetch roster");
        assert_eq!(roster[2].status, StudentStatus::Active);
    }

    // =========================================================================
    // FLOW 4: REPEATED RINGS
    // =========================================================================

    #[tokio::test]
    async fn test_repeated_rings_stay_within_roster() {
        let backend = StubBackend::start_with(seed_roster(12)).await;
        let client = ApiClient::new(backend.base_url()).expect("build client");

        let names: HashSet<String> = backend
            .data
            .read()
            .await
            .students
            .iter()
            .map(|s| s.name.clone())
            .collect();

        let mut last_id = None;
        for _ in 0..20 {
            let record = client.ring_random(Some(5)).await.expect("ring");
            let selected: HashSet<&str> = record.selected.iter().map(String::as_str).collect();
            assert_eq!(selected.len(), 5, "selected students must be distinct");
            assert!(selected.iter().all(|name| names.contains(*name)));
            last_id = Some(record.id);
        }

        let history = client.ring_history().await.expect("history");
        assert_eq!(history.len(), 20);
        assert_eq!(Some(history[0].id), last_id, "history is newest-first");
    }
}

//! Live-event tests: the real `SocketClient` against the stub's socket.
//!
//! Covers:
//! - Connect notification and pushed event delivery
//! - REST mutations broadcasting to connected sockets
//! - Malformed frames being skipped without killing the stream
//! - Server close surfacing as `Error` + `Disconnected`

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tokio::sync::mpsc;
    use tokio::time::timeout;

    use rollcall_client::{ApiClient, SocketClient, SocketEvent};
    use rollcall_types::{ClassEvent, StatusChange, Student, StudentStatus, TimerState};

    use crate::support::{StubBackend, StubData};

    // =========================================================================
    // TEST FIXTURES
    // =========================================================================

    fn create_student(id: u64, name: &str) -> Student {
        Student {
            id,
            name: name.to_string(),
            roll_no: format!("{id:02}"),
            enrollment_no: format!("EN-2026-{id:03}"),
            status: StudentStatus::Active,
            attendance_percent: 80.0,
            email: None,
            phone: None,
            guardian_phone: None,
            joined_at: None,
        }
    }

    fn seed_roster(count: u64) -> StubData {
        let students = (1..=count)
            .map(|id| create_student(id, &format!("Student {id:02}")))
            .collect();
        StubData {
            students,
            ..StubData::default()
        }
    }

    fn connect(backend: &StubBackend) -> (SocketClient, mpsc::Receiver<SocketEvent>) {
        let (tx, rx) = mpsc::channel(32);
        let mut client = SocketClient::new(backend.ws_url().to_string(), tx);
        client.start();
        (client, rx)
    }

    async fn recv_event(rx: &mut mpsc::Receiver<SocketEvent>) -> SocketEvent {
        timeout(Duration::from_secs(2), rx.recv())
            .await
            .expect("timed out waiting for socket event")
            .expect("socket channel closed")
    }

    async fn wait_connected(rx: &mut mpsc::Receiver<SocketEvent>) {
        match recv_event(rx).await {
            SocketEvent::Connected => {}
            other => panic!("expected Connected, got {other:?}"),
        }
    }

    // =========================================================================
    // EVENT DELIVERY
    // =========================================================================

    #[tokio::test]
    async fn test_connects_and_receives_pushed_events() {
        let backend = StubBackend::start().await;
        let (_client, mut rx) = connect(&backend);
        wait_connected(&mut rx).await;

        backend.push_event(&ClassEvent::StudentStatusChange(StatusChange {
            student_id: 7,
            status: StudentStatus::Absent,
        }));
        match recv_event(&mut rx).await {
            SocketEvent::Class(ClassEvent::StudentStatusChange(change)) => {
                assert_eq!(change.student_id, 7);
                assert_eq!(change.status, StudentStatus::Absent);
            }
            other => panic!("expected status change, got {other:?}"),
        }

        backend.push_event(&ClassEvent::TimerUpdated(TimerState {
            elapsed_secs: 125,
            running: true,
        }));
        match recv_event(&mut rx).await {
            SocketEvent::Class(ClassEvent::TimerUpdated(state)) => {
                assert_eq!(state.elapsed_secs, 125);
                assert!(state.running);
            }
            other => panic!("expected timer update, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_rest_mutations_broadcast_to_socket() {
        let backend = StubBackend::start_with(seed_roster(12)).await;
        let api = ApiClient::new(backend.base_url()).expect("build client");
        let (_client, mut rx) = connect(&backend);
        wait_connected(&mut rx).await;

        api.update_student_status(4, StudentStatus::Present)
            .await
            .expect("status update");
        match recv_event(&mut rx).await {
            SocketEvent::Class(ClassEvent::StudentStatusChange(change)) => {
                assert_eq!(change.student_id, 4);
                assert_eq!(change.status, StudentStatus::Present);
            }
            other => panic!("expected status change, got {other:?}"),
        }

        let record = api.ring_random(Some(3)).await.expect("ring");
        match recv_event(&mut rx).await {
            SocketEvent::Class(ClassEvent::RandomRingTriggered(pushed)) => {
                assert_eq!(pushed.id, record.id);
                assert_eq!(pushed.selected.len(), 3);
            }
            other => panic!("expected ring event, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_malformed_frames_are_skipped() {
        let backend = StubBackend::start().await;
        let (_client, mut rx) = connect(&backend);
        wait_connected(&mut rx).await;

        backend.push_raw("not json");
        backend.push_raw(r#"{"event": "cafeteria_menu_changed", "data": {}}"#);
        backend.push_event(&ClassEvent::StudentStatusChange(StatusChange {
            student_id: 2,
            status: StudentStatus::LeftEarly,
        }));

        // Only the valid frame comes through.
        match recv_event(&mut rx).await {
            SocketEvent::Class(ClassEvent::StudentStatusChange(change)) => {
                assert_eq!(change.student_id, 2);
                assert_eq!(change.status, StudentStatus::LeftEarly);
            }
            other => panic!("expected status change, got {other:?}"),
        }
    }

    // =========================================================================
    // DISCONNECTION
    // =========================================================================

    #[tokio::test]
    async fn test_server_close_surfaces_as_disconnect() {
        let backend = StubBackend::start().await;
        let (_client, mut rx) = connect(&backend);
        wait_connected(&mut rx).await;

        // Dropping the backend closes the event channel and the socket.
        drop(backend);

        match recv_event(&mut rx).await {
            SocketEvent::Error(_) => {}
            other => panic!("expected error, got {other:?}"),
        }
        match recv_event(&mut rx).await {
            SocketEvent::Disconnected => {}
            other => panic!("expected Disconnected, got {other:?}"),
        }
    }
}

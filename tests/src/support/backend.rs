//! In-process stub of the classroom backend.
//!
//! Serves the same REST surface and socket frames as the real backend, backed
//! by an in-memory [`StubData`]. Tests seed the data (or flip the rejection
//! flags) through [`StubBackend::data`], then drive the real `ApiClient` and
//! `SocketClient` against `base_url()` / `ws_url()`.
//!
//! Mutating endpoints broadcast the same socket events the real backend
//! pushes, so REST and socket behavior can be asserted against each other.

use std::sync::Arc;

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use chrono::Utc;
use serde::Deserialize;
use tokio::sync::{broadcast, RwLock};
use tokio::task::JoinHandle;
use uuid::Uuid;

use rollcall_roster::{apply_status_change, ring_random, RingSize};
use rollcall_types::{
    ApiEnvelope, AttendanceMark, AttendanceMarked, AttendanceRecord, AttendanceSummary, ClassEvent,
    Classroom, Health, Holiday, NewClassroom, NewTeacher, RingRecord, RingRequestBody, ServerTime,
    StatusChange, Student, StudentId, StudentStatus, Teacher, TimetableEntry, TimetableUpdate,
};

/// Everything the stub serves. Tests read and write this directly.
#[derive(Debug)]
pub struct StubData {
    pub students: Vec<Student>,
    pub timetable: Vec<TimetableEntry>,
    pub holidays: Vec<Holiday>,
    pub records: Vec<AttendanceRecord>,
    pub summary: AttendanceSummary,
    pub teachers: Vec<Teacher>,
    pub classrooms: Vec<Classroom>,
    pub ring_history: Vec<RingRecord>,
    /// When set, `PUT /students/{id}/status` fails with this message.
    pub reject_status_updates: Option<String>,
    /// When set, `POST /attendance/mark` fails with this message.
    pub reject_marks: Option<String>,
    /// Status updates the stub accepted, in arrival order.
    pub status_updates: Vec<(StudentId, StudentStatus)>,
    pub next_teacher_id: u64,
    pub next_classroom_id: u64,
}

impl Default for StubData {
    fn default() -> Self {
        Self {
            students: Vec::new(),
            timetable: Vec::new(),
            holidays: Vec::new(),
            records: Vec::new(),
            summary: AttendanceSummary::default(),
            teachers: Vec::new(),
            classrooms: Vec::new(),
            ring_history: Vec::new(),
            reject_status_updates: None,
            reject_marks: None,
            status_updates: Vec::new(),
            next_teacher_id: 1,
            next_classroom_id: 1,
        }
    }
}

/// A running stub backend bound to an ephemeral local port.
///
/// The server task is aborted on drop; dropping also closes the event
/// channel, which ends any connected sockets.
pub struct StubBackend {
    base_url: String,
    ws_url: String,
    pub data: Arc<RwLock<StubData>>,
    events: broadcast::Sender<String>,
    task: JoinHandle<()>,
}

impl StubBackend {
    /// Start with empty data.
    pub async fn start() -> Self {
        Self::start_with(StubData::default()).await
    }

    /// Start with pre-seeded data.
    pub async fn start_with(data: StubData) -> Self {
        let data = Arc::new(RwLock::new(data));
        let (events, _) = broadcast::channel(64);

        let router = build_router(AppState {
            data: data.clone(),
            events: events.clone(),
        });

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind stub listener");
        let addr = listener.local_addr().expect("stub listener address");

        let task = tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });

        Self {
            base_url: format!("http://{addr}"),
            ws_url: format!("ws://{addr}/ws"),
            data,
            events,
            task,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn ws_url(&self) -> &str {
        &self.ws_url
    }

    /// Push an event frame to every connected socket.
    pub fn push_event(&self, event: &ClassEvent) {
        let frame = serde_json::to_string(event).expect("event serializes");
        let _ = self.events.send(frame);
    }

    /// Push a raw text frame, valid or not.
    pub fn push_raw(&self, frame: &str) {
        let _ = self.events.send(frame.to_string());
    }
}

impl Drop for StubBackend {
    fn drop(&mut self) {
        self.task.abort();
    }
}

#[derive(Clone)]
struct AppState {
    data: Arc<RwLock<StubData>>,
    events: broadcast::Sender<String>,
}

impl AppState {
    fn broadcast(&self, event: &ClassEvent) {
        let frame = serde_json::to_string(event).expect("event serializes");
        let _ = self.events.send(frame);
    }
}

fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/time", get(server_time))
        .route("/classes/current/students", get(list_students))
        .route("/students/:id/status", put(update_status))
        .route("/attendance/mark", post(mark_attendance))
        .route("/attendance/summary", get(attendance_summary))
        .route("/attendance/calendar/:year/:month", get(attendance_calendar))
        .route("/holidays", get(list_holidays))
        .route("/timetable", get(get_timetable).put(put_timetable))
        .route("/teachers", get(list_teachers).post(create_teacher))
        .route("/teachers/:id", delete(delete_teacher))
        .route("/classrooms", get(list_classrooms).post(create_classroom))
        .route("/classrooms/:id", delete(delete_classroom))
        .route("/ring/random", post(ring_random_students))
        .route("/ring/history", get(ring_history))
        .route("/ws", get(ws_upgrade))
        .with_state(state)
}

fn ok_empty() -> Json<ApiEnvelope<serde_json::Value>> {
    Json(ApiEnvelope::ok(serde_json::json!({})))
}

fn fail_empty(message: impl Into<String>) -> Json<ApiEnvelope<serde_json::Value>> {
    Json(ApiEnvelope::fail(message))
}

// --- Backend status ---

async fn health() -> Json<ApiEnvelope<Health>> {
    Json(ApiEnvelope::ok(Health {
        status: "ok".to_string(),
        version: Some("0.1.0-stub".to_string()),
    }))
}

async fn server_time() -> Json<ApiEnvelope<ServerTime>> {
    Json(ApiEnvelope::ok(ServerTime {
        now: Utc::now(),
        uptime_secs: 60,
    }))
}

// --- Roster ---

async fn list_students(State(state): State<AppState>) -> Json<ApiEnvelope<Vec<Student>>> {
    Json(ApiEnvelope::ok(state.data.read().await.students.clone()))
}

#[derive(Debug, Deserialize)]
struct StatusBody {
    status: StudentStatus,
}

async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<StudentId>,
    Json(body): Json<StatusBody>,
) -> Json<ApiEnvelope<serde_json::Value>> {
    let mut data = state.data.write().await;

    if let Some(message) = data.reject_status_updates.clone() {
        return fail_empty(message);
    }

    let change = StatusChange {
        student_id: id,
        status: body.status,
    };
    if !apply_status_change(&mut data.students, &change) {
        return fail_empty("student not found");
    }

    data.status_updates.push((id, body.status));
    state.broadcast(&ClassEvent::StudentStatusChange(change));
    ok_empty()
}

// --- Attendance ---

#[derive(Debug, Deserialize)]
struct MarksBody {
    marks: Vec<AttendanceMark>,
}

async fn mark_attendance(
    State(state): State<AppState>,
    Json(body): Json<MarksBody>,
) -> Json<ApiEnvelope<AttendanceSummary>> {
    let mut data = state.data.write().await;

    if let Some(message) = data.reject_marks.clone() {
        return Json(ApiEnvelope::fail(message));
    }

    for mark in &body.marks {
        if let Some(student) = data.students.iter_mut().find(|s| s.id == mark.student_id) {
            student.status = mark.status;
        }
    }

    let total = body.marks.len() as u32;
    let present = body
        .marks
        .iter()
        .filter(|m| m.status.counts_as_present())
        .count() as u32;
    let absent = total - present;
    let percentage = if total == 0 {
        0.0
    } else {
        present as f32 * 100.0 / total as f32
    };

    let summary = AttendanceSummary {
        date: Some(Utc::now().date_naive()),
        total,
        present,
        absent,
        percentage,
    };
    data.summary = summary;

    state.broadcast(&ClassEvent::AttendanceMarked(AttendanceMarked {
        date: summary.date,
        present,
        absent,
    }));

    Json(ApiEnvelope::ok(summary))
}

async fn attendance_summary(
    State(state): State<AppState>,
) -> Json<ApiEnvelope<AttendanceSummary>> {
    Json(ApiEnvelope::ok(state.data.read().await.summary))
}

async fn attendance_calendar(
    State(state): State<AppState>,
    Path((year, month)): Path<(i32, u32)>,
) -> Json<ApiEnvelope<Vec<AttendanceRecord>>> {
    use chrono::Datelike;

    let records = state
        .data
        .read()
        .await
        .records
        .iter()
        .filter(|r| r.date.year() == year && r.date.month() == month)
        .cloned()
        .collect();
    Json(ApiEnvelope::ok(records))
}

async fn list_holidays(State(state): State<AppState>) -> Json<ApiEnvelope<Vec<Holiday>>> {
    Json(ApiEnvelope::ok(state.data.read().await.holidays.clone()))
}

// --- Timetable ---

async fn get_timetable(State(state): State<AppState>) -> Json<ApiEnvelope<Vec<TimetableEntry>>> {
    Json(ApiEnvelope::ok(state.data.read().await.timetable.clone()))
}

#[derive(Debug, Deserialize)]
struct TimetableBody {
    entries: Vec<TimetableEntry>,
}

async fn put_timetable(
    State(state): State<AppState>,
    Json(body): Json<TimetableBody>,
) -> Json<ApiEnvelope<serde_json::Value>> {
    let mut data = state.data.write().await;
    data.timetable = body.entries.clone();

    state.broadcast(&ClassEvent::TimetableUpdated(TimetableUpdate {
        entries: body.entries,
    }));
    ok_empty()
}

// --- Administration ---

async fn list_teachers(State(state): State<AppState>) -> Json<ApiEnvelope<Vec<Teacher>>> {
    Json(ApiEnvelope::ok(state.data.read().await.teachers.clone()))
}

async fn create_teacher(
    State(state): State<AppState>,
    Json(body): Json<NewTeacher>,
) -> Json<ApiEnvelope<Teacher>> {
    let mut data = state.data.write().await;
    let teacher = Teacher {
        id: data.next_teacher_id,
        name: body.name,
        email: body.email,
        subject: body.subject,
        classroom: None,
    };
    data.next_teacher_id += 1;
    data.teachers.push(teacher.clone());
    Json(ApiEnvelope::ok(teacher))
}

async fn delete_teacher(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Json<ApiEnvelope<serde_json::Value>> {
    let mut data = state.data.write().await;
    let before = data.teachers.len();
    data.teachers.retain(|t| t.id != id);
    if data.teachers.len() == before {
        return fail_empty("teacher not found");
    }
    ok_empty()
}

async fn list_classrooms(State(state): State<AppState>) -> Json<ApiEnvelope<Vec<Classroom>>> {
    Json(ApiEnvelope::ok(state.data.read().await.classrooms.clone()))
}

async fn create_classroom(
    State(state): State<AppState>,
    Json(body): Json<NewClassroom>,
) -> Json<ApiEnvelope<Classroom>> {
    let mut data = state.data.write().await;
    let classroom = Classroom {
        id: data.next_classroom_id,
        name: body.name,
        subject: body.subject,
        student_count: 0,
    };
    data.next_classroom_id += 1;
    data.classrooms.push(classroom.clone());
    Json(ApiEnvelope::ok(classroom))
}

async fn delete_classroom(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Json<ApiEnvelope<serde_json::Value>> {
    let mut data = state.data.write().await;
    let before = data.classrooms.len();
    data.classrooms.retain(|c| c.id != id);
    if data.classrooms.len() == before {
        return fail_empty("classroom not found");
    }
    ok_empty()
}

// --- Random ring ---

async fn ring_random_students(
    State(state): State<AppState>,
    Json(body): Json<RingRequestBody>,
) -> Json<ApiEnvelope<RingRecord>> {
    let mut data = state.data.write().await;

    let size = match body.count {
        Some(n) => RingSize::Count(n),
        None => RingSize::All,
    };
    let selected = {
        let mut rng = rand::thread_rng();
        match ring_random(&data.students, size, &mut rng) {
            Ok(selected) => selected.iter().map(|s| s.name.clone()).collect(),
            Err(e) => return Json(ApiEnvelope::fail(e.to_string())),
        }
    };

    let record = RingRecord {
        id: Uuid::new_v4(),
        at: Utc::now(),
        count: body.count,
        selected,
    };
    data.ring_history.insert(0, record.clone());

    state.broadcast(&ClassEvent::RandomRingTriggered(record.clone()));
    Json(ApiEnvelope::ok(record))
}

async fn ring_history(State(state): State<AppState>) -> Json<ApiEnvelope<Vec<RingRecord>>> {
    Json(ApiEnvelope::ok(state.data.read().await.ring_history.clone()))
}

// --- Socket ---

async fn ws_upgrade(State(state): State<AppState>, ws: WebSocketUpgrade) -> impl IntoResponse {
    let rx = state.events.subscribe();
    ws.on_upgrade(move |socket| forward_events(socket, rx))
}

/// Forwards broadcast frames to one socket until the channel closes or the
/// client hangs up. Lagged receivers skip to the newest frame.
async fn forward_events(mut socket: WebSocket, mut rx: broadcast::Receiver<String>) {
    loop {
        match rx.recv().await {
            Ok(frame) => {
                if socket.send(Message::Text(frame)).await.is_err() {
                    break;
                }
            }
            Err(broadcast::error::RecvError::Lagged(_)) => continue,
            Err(broadcast::error::RecvError::Closed) => break,
        }
    }
}

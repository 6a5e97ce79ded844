//! REST API client for the attendance backend.

use std::time::Duration;

use reqwest::Client;
use serde::Serialize;
use thiserror::Error;

use rollcall_types::{
    ApiEnvelope, AttendanceMark, AttendanceRecord, AttendanceSummary, Classroom, EnvelopeError,
    Health, Holiday, NewClassroom, NewTeacher, RingRecord, RingRequestBody, ServerTime, Student,
    StudentId, StudentStatus, Teacher, TimetableEntry,
};

/// Errors that can occur when talking to the backend.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("backend rejected request: {0}")]
    Backend(String),
    #[error("failed to parse response: {0}")]
    Parse(String),
    #[error("connection failed: {0}")]
    Connection(String),
}

impl From<EnvelopeError> for ApiError {
    fn from(err: EnvelopeError) -> Self {
        match err {
            EnvelopeError::Rejected(msg) => ApiError::Backend(msg),
            EnvelopeError::MissingData => ApiError::Parse("missing data in response".to_string()),
        }
    }
}

/// Body of `PUT /students/{id}/status`.
#[derive(Debug, Serialize)]
struct StatusUpdate {
    status: StudentStatus,
}

/// Body of `POST /attendance/mark`.
#[derive(Debug, Serialize)]
struct MarkRequest<'a> {
    marks: &'a [AttendanceMark],
}

/// Body of `PUT /timetable`.
#[derive(Debug, Serialize)]
struct TimetableUpdateRequest<'a> {
    entries: &'a [TimetableEntry],
}

/// REST API client.
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client against `base_url` (e.g. `http://127.0.0.1:4800`).
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(5))
            .connect_timeout(Duration::from_secs(2))
            .build()
            .map_err(ApiError::Http)?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn map_send_error(&self, e: reqwest::Error) -> ApiError {
        if e.is_connect() {
            ApiError::Connection(format!("cannot connect to {}", self.base_url))
        } else {
            ApiError::Http(e)
        }
    }

    async fn get<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let envelope: ApiEnvelope<T> = response
            .json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))?;

        Ok(envelope.into_result()?)
    }

    async fn send<B, T>(&self, method: reqwest::Method, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: serde::de::DeserializeOwned,
    {
        let response = self
            .client
            .request(method, self.url(path))
            .json(body)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let envelope: ApiEnvelope<T> = response
            .json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))?;

        Ok(envelope.into_result()?)
    }

    /// Like [`Self::send`] for endpoints whose envelope carries no payload.
    async fn execute<B>(&self, method: reqwest::Method, path: &str, body: &B) -> Result<(), ApiError>
    where
        B: Serialize + ?Sized,
    {
        let response = self
            .client
            .request(method, self.url(path))
            .json(body)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let envelope: ApiEnvelope<serde_json::Value> = response
            .json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))?;

        if !envelope.success {
            return Err(ApiError::Backend(
                envelope
                    .message
                    .unwrap_or_else(|| "request rejected".to_string()),
            ));
        }
        Ok(())
    }

    // --- Backend status ---

    /// `GET /health`.
    pub async fn health(&self) -> Result<Health, ApiError> {
        self.get("/health").await
    }

    /// `GET /time`.
    pub async fn server_time(&self) -> Result<ServerTime, ApiError> {
        self.get("/time").await
    }

    /// Check if the backend is reachable and healthy.
    pub async fn is_connected(&self) -> bool {
        matches!(self.health().await, Ok(h) if h.is_ok())
    }

    // --- Roster ---

    /// `GET /classes/current/students`.
    pub async fn current_students(&self) -> Result<Vec<Student>, ApiError> {
        self.get("/classes/current/students").await
    }

    /// `PUT /students/{id}/status`.
    pub async fn update_student_status(
        &self,
        id: StudentId,
        status: StudentStatus,
    ) -> Result<(), ApiError> {
        self.execute(
            reqwest::Method::PUT,
            &format!("/students/{id}/status"),
            &StatusUpdate { status },
        )
        .await
    }

    // --- Attendance ---

    /// `POST /attendance/mark`.
    pub async fn mark_attendance(
        &self,
        marks: &[AttendanceMark],
    ) -> Result<AttendanceSummary, ApiError> {
        self.send(
            reqwest::Method::POST,
            "/attendance/mark",
            &MarkRequest { marks },
        )
        .await
    }

    /// `GET /attendance/summary`.
    pub async fn attendance_summary(&self) -> Result<AttendanceSummary, ApiError> {
        self.get("/attendance/summary").await
    }

    /// `GET /attendance/calendar/{year}/{month}`.
    pub async fn attendance_calendar(
        &self,
        year: i32,
        month: u32,
    ) -> Result<Vec<AttendanceRecord>, ApiError> {
        self.get(&format!("/attendance/calendar/{year}/{month}")).await
    }

    /// `GET /holidays`.
    pub async fn holidays(&self) -> Result<Vec<Holiday>, ApiError> {
        self.get("/holidays").await
    }

    // --- Timetable ---

    /// `GET /timetable`.
    pub async fn timetable(&self) -> Result<Vec<TimetableEntry>, ApiError> {
        self.get("/timetable").await
    }

    /// `PUT /timetable`. Replaces the whole timetable.
    pub async fn update_timetable(&self, entries: &[TimetableEntry]) -> Result<(), ApiError> {
        self.execute(
            reqwest::Method::PUT,
            "/timetable",
            &TimetableUpdateRequest { entries },
        )
        .await
    }

    // --- Administration ---

    /// `GET /teachers`.
    pub async fn teachers(&self) -> Result<Vec<Teacher>, ApiError> {
        self.get("/teachers").await
    }

    /// `POST /teachers`.
    pub async fn create_teacher(&self, teacher: &NewTeacher) -> Result<Teacher, ApiError> {
        self.send(reqwest::Method::POST, "/teachers", teacher).await
    }

    /// `DELETE /teachers/{id}`.
    pub async fn delete_teacher(&self, id: u64) -> Result<(), ApiError> {
        self.execute(reqwest::Method::DELETE, &format!("/teachers/{id}"), &())
            .await
    }

    /// `GET /classrooms`.
    pub async fn classrooms(&self) -> Result<Vec<Classroom>, ApiError> {
        self.get("/classrooms").await
    }

    /// `POST /classrooms`.
    pub async fn create_classroom(&self, classroom: &NewClassroom) -> Result<Classroom, ApiError> {
        self.send(reqwest::Method::POST, "/classrooms", classroom)
            .await
    }

    /// `DELETE /classrooms/{id}`.
    pub async fn delete_classroom(&self, id: u64) -> Result<(), ApiError> {
        self.execute(reqwest::Method::DELETE, &format!("/classrooms/{id}"), &())
            .await
    }

    // --- Random ring ---

    /// `POST /ring/random`. `count: None` rings the whole roster.
    pub async fn ring_random(&self, count: Option<u32>) -> Result<RingRecord, ApiError> {
        self.send(
            reqwest::Method::POST,
            "/ring/random",
            &RingRequestBody { count },
        )
        .await
    }

    /// `GET /ring/history`.
    pub async fn ring_history(&self) -> Result<Vec<RingRecord>, ApiError> {
        self.get("/ring/history").await
    }
}

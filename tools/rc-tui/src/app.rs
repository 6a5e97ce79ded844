//! Application state management.

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Instant;

use chrono::{Datelike, NaiveTime, Utc};
use rollcall_client::{ApiClient, SocketEvent};
use rollcall_roster::{
    apply_status_change, demo, filter_roster, ring_random, timetable, toggle_status,
    upsert_student, MonthGrid, RingError, RingSize, RosterFilter, SessionTimer,
};
use rollcall_types::{
    AttendanceMark, AttendanceRecord, AttendanceSummary, ClassEvent, Holiday, RingRecord,
    StatusChange, Student, StudentStatus, TimetableEntry, TimetableSlot,
};

/// Maximum number of events to keep in history.
const MAX_EVENTS: usize = 100;

/// Active tab/view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Roster,
    Timetable,
    Calendar,
    Events,
}

impl Tab {
    pub fn name(&self) -> &'static str {
        match self {
            Tab::Roster => "Roster",
            Tab::Timetable => "Timetable",
            Tab::Calendar => "Calendar",
            Tab::Events => "Events",
        }
    }
}

/// Which input prompt is capturing keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    /// Typing a roster search query.
    Search,
    /// Typing a ring size (empty submits "all").
    RingCount,
    /// Typing the subject for a new timetable slot.
    SlotSubject,
    /// Retyping the subject of the selected slot.
    SlotEdit,
}

/// A live event shown in the feed.
#[derive(Debug, Clone)]
pub struct LiveEvent {
    /// Timestamp when event was received.
    pub timestamp: Instant,
    /// Event type string.
    pub event_type: String,
    /// Event description.
    pub description: String,
}

/// Application state holding all dashboard data.
pub struct App {
    /// API client; `None` in demo mode.
    api: Option<Arc<ApiClient>>,

    /// Current active tab.
    pub active_tab: Tab,

    /// Whether the app should quit.
    pub should_quit: bool,

    // === Roster ===
    /// Current class roster.
    pub students: Vec<Student>,

    /// Selected row in the filtered roster list.
    pub selected: usize,

    /// Active roster filter.
    pub filter: RosterFilter,

    /// Day-level attendance totals from the backend.
    pub summary: AttendanceSummary,

    // === Timetable ===
    pub timetable: Vec<TimetableEntry>,

    /// Selected day column.
    pub timetable_day: usize,

    /// Selected slot row within the day.
    pub timetable_slot: usize,

    // === Calendar ===
    /// Displayed month.
    pub month: MonthGrid,

    /// Selected day of month (1-based).
    pub selected_day: u32,

    /// Month that `records` belong to.
    loaded_month: Option<(i32, u32)>,

    /// Attendance records for the displayed month.
    pub records: Vec<AttendanceRecord>,

    /// Holiday list.
    pub holidays: Vec<Holiday>,

    // === Session ===
    /// Class session stopwatch (backend-driven, locally ticked).
    pub session_timer: SessionTimer,

    /// Most recent random ring.
    pub last_ring: Option<RingRecord>,

    // === Status ===
    /// HTTP connection status.
    pub connected: bool,

    /// WebSocket connection status.
    pub ws_connected: bool,

    /// Roster currently holds the built-in demo dataset.
    pub demo_data: bool,

    /// Last error message.
    pub last_error: Option<String>,

    /// Last full refresh time.
    pub last_refresh: Instant,

    /// Last 1 s tick.
    pub last_tick: Instant,

    /// Application start time.
    pub start_time: Instant,

    // === Input ===
    pub input_mode: InputMode,
    pub input_buffer: String,
    pub show_help: bool,

    /// Live events log.
    pub live_events: VecDeque<LiveEvent>,
}

impl App {
    /// Create a new application instance. `api: None` runs on demo data.
    pub fn new(api: Option<Arc<ApiClient>>) -> Self {
        let today = Utc::now().date_naive();
        let month = MonthGrid::containing(today);

        let mut app = Self {
            api,
            active_tab: Tab::Roster,
            should_quit: false,
            students: Vec::new(),
            selected: 0,
            filter: RosterFilter::default(),
            summary: AttendanceSummary::default(),
            timetable: Vec::new(),
            timetable_day: 0,
            timetable_slot: 0,
            month,
            selected_day: today.day(),
            loaded_month: None,
            records: Vec::new(),
            holidays: Vec::new(),
            session_timer: SessionTimer::default(),
            last_ring: None,
            connected: false,
            ws_connected: false,
            demo_data: false,
            last_error: None,
            last_refresh: Instant::now(),
            last_tick: Instant::now(),
            start_time: Instant::now(),
            input_mode: InputMode::Normal,
            input_buffer: String::new(),
            show_help: false,
            live_events: VecDeque::with_capacity(MAX_EVENTS),
        };

        if app.is_demo() {
            app.set_demo_data();
        }
        app
    }

    /// True when running without a backend.
    pub fn is_demo(&self) -> bool {
        self.api.is_none()
    }

    /// Load the built-in dataset.
    pub fn set_demo_data(&mut self) {
        self.students = demo::demo_students();
        self.summary = demo::demo_summary();
        self.timetable = demo::demo_timetable();
        self.holidays = demo::demo_holidays(self.month.year());
        self.records = demo::demo_calendar(self.month);
        self.loaded_month = Some((self.month.year(), self.month.month()));
        self.session_timer = SessionTimer {
            elapsed_secs: 25 * 60,
            running: true,
        };
        self.demo_data = true;
        self.clamp_selection();
    }

    // === Data refresh ===

    /// Refresh roster and summary.
    pub async fn refresh(&mut self) {
        let Some(api) = self.api.clone() else {
            self.last_refresh = Instant::now();
            return;
        };

        let (students_result, summary_result) =
            tokio::join!(api.current_students(), api.attendance_summary());

        match students_result {
            Ok(students) => {
                if !self.connected {
                    self.add_event("api", "backend connected");
                }
                self.connected = true;
                self.demo_data = false;
                self.last_error = None;
                self.students = students;
                self.clamp_selection();
            }
            Err(e) => {
                if self.connected {
                    self.add_event("error", &format!("roster fetch failed: {}", e));
                }
                self.connected = false;
                self.last_error = Some(format!("connection: {}", e));

                // First run with nothing to show: load the built-in dataset
                if self.students.is_empty() {
                    tracing::warn!(error = %e, "initial fetch failed, loading demo data");
                    self.set_demo_data();
                    self.add_event("api", "backend unreachable, showing demo data");
                }
            }
        }

        if let Ok(summary) = summary_result {
            self.summary = summary;
        }

        self.last_refresh = Instant::now();
    }

    /// Refresh the timetable.
    pub async fn refresh_timetable(&mut self) {
        let Some(api) = self.api.clone() else {
            self.timetable = demo::demo_timetable();
            self.clamp_timetable_selection();
            return;
        };

        match api.timetable().await {
            Ok(entries) => {
                self.timetable = entries;
                self.last_error = None;
                self.clamp_timetable_selection();
            }
            Err(e) => {
                self.last_error = Some(format!("timetable: {}", e));
            }
        }
    }

    /// Refresh calendar records and holidays for the displayed month.
    pub async fn refresh_calendar(&mut self) {
        let year = self.month.year();
        let month = self.month.month();

        let Some(api) = self.api.clone() else {
            self.records = demo::demo_calendar(self.month);
            self.holidays = demo::demo_holidays(year);
            self.loaded_month = Some((year, month));
            return;
        };

        let (records_result, holidays_result) =
            tokio::join!(api.attendance_calendar(year, month), api.holidays());

        match records_result {
            Ok(records) => {
                self.records = records;
                self.loaded_month = Some((year, month));
                self.last_error = None;
            }
            Err(e) => {
                self.last_error = Some(format!("calendar: {}", e));
                // Marked loaded anyway so navigation does not hammer the backend
                self.loaded_month = Some((year, month));
            }
        }

        if let Ok(holidays) = holidays_result {
            self.holidays = holidays;
        }
    }

    /// Check if the current tab has nothing loaded yet.
    pub fn needs_tab_refresh(&self) -> bool {
        match self.active_tab {
            Tab::Timetable => self.timetable.is_empty(),
            Tab::Roster | Tab::Calendar | Tab::Events => false,
        }
    }

    /// Check if the displayed month's records still need fetching.
    pub fn needs_calendar_refresh(&self) -> bool {
        self.loaded_month != Some((self.month.year(), self.month.month()))
    }

    // === Socket events ===

    /// Handle a socket event.
    pub fn handle_socket_event(&mut self, event: SocketEvent) {
        match event {
            SocketEvent::Connected => {
                self.ws_connected = true;
                self.add_event("socket", "event stream connected");
            }
            SocketEvent::Disconnected => {
                self.ws_connected = false;
                self.add_event("socket", "event stream disconnected");
            }
            SocketEvent::Error(msg) => {
                self.add_event("error", &msg);
            }
            SocketEvent::Class(event) => self.handle_class_event(event),
        }
    }

    fn handle_class_event(&mut self, event: ClassEvent) {
        match event {
            ClassEvent::StudentStatusChange(change) => {
                if apply_status_change(&mut self.students, &change) {
                    let name = self.student_name(change.student_id);
                    self.add_event(
                        "status",
                        &format!("{} is now {}", name, change.status.label()),
                    );
                }
            }
            // Pushed once a second while running; feeding these to the log
            // would drown everything else out.
            ClassEvent::TimerUpdated(state) => {
                self.session_timer.apply(state);
            }
            ClassEvent::StudentRegistered(student) => {
                self.add_event("roster", &format!("{} joined the class", student.name));
                upsert_student(&mut self.students, student);
            }
            ClassEvent::TimetableUpdated(update) => {
                self.timetable = update.entries;
                self.clamp_timetable_selection();
                self.add_event("timetable", "timetable replaced");
            }
            ClassEvent::PeriodsUpdated(update) => {
                let day = update.day.clone();
                timetable::replace_day(&mut self.timetable, &update.day, update.slots);
                self.add_event("timetable", &format!("{} periods updated", day));
            }
            ClassEvent::RandomRingTriggered(record) => {
                // Our own POST already recorded this ring
                let own = self
                    .last_ring
                    .as_ref()
                    .is_some_and(|last| last.id == record.id);
                if !own {
                    self.add_event("ring", &ring_summary(&record));
                    self.last_ring = Some(record);
                }
            }
            ClassEvent::AttendanceMarked(marked) => {
                self.summary.present = marked.present;
                self.summary.absent = marked.absent;
                self.summary.total = marked.present + marked.absent;
                if self.summary.total > 0 {
                    self.summary.percentage =
                        marked.present as f32 * 100.0 / self.summary.total as f32;
                }
                if let Some(date) = marked.date {
                    self.summary.date = Some(date);
                }
                self.add_event(
                    "attendance",
                    &format!("marked: {} present, {} absent", marked.present, marked.absent),
                );
            }
        }
    }

    fn student_name(&self, id: u64) -> String {
        self.students
            .iter()
            .find(|s| s.id == id)
            .map(|s| s.name.clone())
            .unwrap_or_else(|| format!("student #{}", id))
    }

    /// Add an event to the live events log.
    pub fn add_event(&mut self, event_type: &str, description: &str) {
        self.live_events.push_front(LiveEvent {
            timestamp: Instant::now(),
            event_type: event_type.to_string(),
            description: description.to_string(),
        });

        if self.live_events.len() > MAX_EVENTS {
            self.live_events.pop_back();
        }
    }

    // === Roster actions ===

    /// The students passing the active filter, in roster order.
    pub fn filtered_students(&self) -> Vec<&Student> {
        filter_roster(&self.students, &self.filter)
    }

    fn clamp_selection(&mut self) {
        let len = self.filtered_students().len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    fn clamp_timetable_selection(&mut self) {
        self.timetable_day = self.timetable_day.min(self.timetable.len().saturating_sub(1));
        let slots = self
            .timetable
            .get(self.timetable_day)
            .map(|e| e.slots.len())
            .unwrap_or(0);
        self.timetable_slot = self.timetable_slot.min(slots.saturating_sub(1));
    }

    /// Toggle the selected student's status, optimistically.
    ///
    /// `target: None` advances the cycle. The change is applied locally
    /// first and mirrored to the backend; if the backend rejects it, the
    /// whole roster is refetched.
    pub async fn toggle_selected(&mut self, target: Option<StudentStatus>) {
        let Some(student) = self.filtered_students().get(self.selected).copied() else {
            return;
        };
        let id = student.id;
        let new_status = toggle_status(student.status, target);

        apply_status_change(
            &mut self.students,
            &StatusChange {
                student_id: id,
                status: new_status,
            },
        );

        let Some(api) = self.api.clone() else { return };

        if let Err(e) = api.update_student_status(id, new_status).await {
            self.last_error = Some(format!("status update: {}", e));
            self.add_event("error", &format!("status update failed: {}", e));
            // Sole recovery: refetch the authoritative roster
            self.refresh().await;
        }
    }

    /// Cycle the status filter: all -> active -> present -> absent -> left.
    pub fn cycle_status_filter(&mut self) {
        self.filter.status = match self.filter.status {
            None => Some(StudentStatus::Active),
            Some(StudentStatus::Active) => Some(StudentStatus::Present),
            Some(StudentStatus::Present) => Some(StudentStatus::Absent),
            Some(StudentStatus::Absent) => Some(StudentStatus::LeftEarly),
            Some(StudentStatus::LeftEarly) => None,
        };
        self.clamp_selection();
    }

    /// Submit the day's statuses as the attendance record.
    pub async fn mark_attendance(&mut self) {
        let marks: Vec<AttendanceMark> = self
            .students
            .iter()
            .map(|s| AttendanceMark {
                student_id: s.id,
                status: s.status,
            })
            .collect();

        if marks.is_empty() {
            self.last_error = Some("nothing to mark: roster is empty".to_string());
            return;
        }

        let Some(api) = self.api.clone() else {
            let present = self
                .students
                .iter()
                .filter(|s| s.status.counts_as_present())
                .count() as u32;
            let total = marks.len() as u32;
            self.summary = AttendanceSummary {
                date: Some(Utc::now().date_naive()),
                total,
                present,
                absent: total - present,
                percentage: present as f32 * 100.0 / total as f32,
            };
            self.add_event(
                "attendance",
                &format!("marked: {} present, {} absent", present, total - present),
            );
            return;
        };

        match api.mark_attendance(&marks).await {
            Ok(summary) => {
                self.summary = summary;
                self.last_error = None;
                self.add_event(
                    "attendance",
                    &format!(
                        "marked: {} present, {} absent",
                        summary.present, summary.absent
                    ),
                );
            }
            Err(e) => {
                self.last_error = Some(format!("mark attendance: {}", e));
            }
        }
    }

    // === Random ring ===

    /// Submit the ring prompt. An empty buffer rings everyone.
    pub async fn submit_ring(&mut self) {
        let buffer = std::mem::take(&mut self.input_buffer);
        self.input_mode = InputMode::Normal;

        let size = if buffer.trim().is_empty() {
            RingSize::All
        } else {
            match buffer.trim().parse::<u32>() {
                Ok(n) => RingSize::Count(n),
                Err(_) => {
                    self.last_error = Some(format!("invalid number of students: {}", buffer));
                    return;
                }
            }
        };

        // Validate locally before bothering the backend
        if let Err(e) = validate_ring_size(size, self.students.len()) {
            self.last_error = Some(e.to_string());
            return;
        }

        let Some(api) = self.api.clone() else {
            match ring_random(&self.students, size, &mut rand::thread_rng()) {
                Ok(selected) => {
                    let record = RingRecord {
                        id: uuid::Uuid::new_v4(),
                        at: Utc::now(),
                        count: match size {
                            RingSize::All => None,
                            RingSize::Count(n) => Some(n),
                        },
                        selected: selected.iter().map(|s| s.name.clone()).collect(),
                    };
                    self.add_event("ring", &ring_summary(&record));
                    self.last_ring = Some(record);
                    self.last_error = None;
                }
                Err(e) => {
                    self.last_error = Some(e.to_string());
                }
            }
            return;
        };

        let count = match size {
            RingSize::All => None,
            RingSize::Count(n) => Some(n),
        };

        match api.ring_random(count).await {
            Ok(record) => {
                self.add_event("ring", &ring_summary(&record));
                self.last_ring = Some(record);
                self.last_error = None;
            }
            Err(e) => {
                self.last_error = Some(format!("ring: {}", e));
            }
        }
    }

    // === Timetable actions ===

    /// Delete the selected slot (local edit).
    pub fn delete_selected_slot(&mut self) {
        let Some(day) = self.timetable.get(self.timetable_day).map(|e| e.day.clone()) else {
            return;
        };

        if let Some(slot) = timetable::remove_slot(&mut self.timetable, &day, self.timetable_slot)
        {
            self.add_event("timetable", &format!("removed {} on {}", slot.subject, day));
            self.clamp_timetable_selection();
        }
    }

    /// Submit the new-slot prompt (local edit). Start and end times follow
    /// the day's last slot.
    pub fn submit_new_slot(&mut self) {
        let subject = std::mem::take(&mut self.input_buffer);
        self.input_mode = InputMode::Normal;

        if subject.trim().is_empty() {
            return;
        }

        let Some(entry) = self.timetable.get(self.timetable_day) else {
            return;
        };
        let day = entry.day.clone();
        let (start, end) = next_slot_times(&entry.slots);

        timetable::add_slot(
            &mut self.timetable,
            &day,
            TimetableSlot {
                start,
                end,
                subject: subject.trim().to_string(),
                teacher: "TBA".to_string(),
                room: "TBA".to_string(),
            },
        );
        self.add_event("timetable", &format!("added {} on {}", subject.trim(), day));
    }

    /// Submit the edit-slot prompt (local edit). Only the subject changes;
    /// times, teacher, and room stay as they are.
    pub fn submit_edit_slot(&mut self) {
        let subject = std::mem::take(&mut self.input_buffer);
        self.input_mode = InputMode::Normal;

        if subject.trim().is_empty() {
            return;
        }

        let Some(entry) = self.timetable.get(self.timetable_day) else {
            return;
        };
        let Some(slot) = entry.slots.get(self.timetable_slot) else {
            return;
        };
        let day = entry.day.clone();
        let updated = TimetableSlot {
            subject: subject.trim().to_string(),
            ..slot.clone()
        };

        if timetable::update_slot(&mut self.timetable, &day, self.timetable_slot, updated) {
            self.add_event(
                "timetable",
                &format!("renamed slot to {} on {}", subject.trim(), day),
            );
        }
    }

    /// Push the locally edited timetable to the backend.
    pub async fn push_timetable(&mut self) {
        let Some(api) = self.api.clone() else {
            self.add_event("timetable", "timetable kept locally (demo mode)");
            return;
        };

        match api.update_timetable(&self.timetable).await {
            Ok(()) => {
                self.last_error = None;
                self.add_event("timetable", "timetable saved");
            }
            Err(e) => {
                self.last_error = Some(format!("timetable save: {}", e));
            }
        }
    }

    // === Tick ===

    /// 1 s tick: advances the session timer between socket updates.
    pub fn tick(&mut self) {
        self.session_timer.tick();
        self.last_tick = Instant::now();
    }

    /// Cancel the active input prompt.
    pub fn cancel_input(&mut self) {
        if self.input_mode == InputMode::Search {
            self.filter.query.clear();
            self.clamp_selection();
        }
        self.input_buffer.clear();
        self.input_mode = InputMode::Normal;
    }

    // === Key handling (sync state changes) ===

    /// Handle key press events not consumed by the main loop.
    pub fn on_key(&mut self, key: crossterm::event::KeyCode) {
        use crossterm::event::KeyCode;

        match key {
            // Tab navigation
            KeyCode::Char('1') => self.active_tab = Tab::Roster,
            KeyCode::Char('2') => self.active_tab = Tab::Timetable,
            KeyCode::Char('3') => self.active_tab = Tab::Calendar,
            KeyCode::Char('4') => self.active_tab = Tab::Events,
            KeyCode::Char('?') => self.show_help = true,

            // Roster prompts
            KeyCode::Char('/') if self.active_tab == Tab::Roster => {
                self.input_mode = InputMode::Search;
                self.input_buffer = self.filter.query.clone();
            }
            KeyCode::Char('f') if self.active_tab == Tab::Roster => {
                self.cycle_status_filter();
            }
            KeyCode::Char('g') if self.active_tab == Tab::Roster => {
                self.input_mode = InputMode::RingCount;
                self.input_buffer.clear();
            }

            // Timetable prompts
            KeyCode::Char('n') if self.active_tab == Tab::Timetable => {
                if !self.timetable.is_empty() {
                    self.input_mode = InputMode::SlotSubject;
                    self.input_buffer.clear();
                }
            }
            KeyCode::Char('e') if self.active_tab == Tab::Timetable => {
                if let Some(slot) = self
                    .timetable
                    .get(self.timetable_day)
                    .and_then(|e| e.slots.get(self.timetable_slot))
                {
                    self.input_buffer = slot.subject.clone();
                    self.input_mode = InputMode::SlotEdit;
                }
            }

            // List navigation
            KeyCode::Up | KeyCode::Char('k') => match self.active_tab {
                Tab::Roster => {
                    if self.selected > 0 {
                        self.selected -= 1;
                    }
                }
                Tab::Timetable => {
                    if self.timetable_slot > 0 {
                        self.timetable_slot -= 1;
                    }
                }
                Tab::Calendar => self.move_selected_day(-7),
                Tab::Events => {}
            },
            KeyCode::Down | KeyCode::Char('j') => match self.active_tab {
                Tab::Roster => {
                    let max = self.filtered_students().len().saturating_sub(1);
                    if self.selected < max {
                        self.selected += 1;
                    }
                }
                Tab::Timetable => {
                    let max = self
                        .timetable
                        .get(self.timetable_day)
                        .map(|e| e.slots.len().saturating_sub(1))
                        .unwrap_or(0);
                    if self.timetable_slot < max {
                        self.timetable_slot += 1;
                    }
                }
                Tab::Calendar => self.move_selected_day(7),
                Tab::Events => {}
            },
            KeyCode::Left | KeyCode::Char('h') => match self.active_tab {
                Tab::Timetable => {
                    if self.timetable_day > 0 {
                        self.timetable_day -= 1;
                        self.clamp_timetable_selection();
                    }
                }
                Tab::Calendar => self.move_selected_day(-1),
                _ => {}
            },
            KeyCode::Right | KeyCode::Char('l') => match self.active_tab {
                Tab::Timetable => {
                    let max = self.timetable.len().saturating_sub(1);
                    if self.timetable_day < max {
                        self.timetable_day += 1;
                        self.clamp_timetable_selection();
                    }
                }
                Tab::Calendar => self.move_selected_day(1),
                _ => {}
            },

            // Month navigation
            KeyCode::Char('[') if self.active_tab == Tab::Calendar => {
                self.month = self.month.prev();
                self.clamp_selected_day();
            }
            KeyCode::Char(']') if self.active_tab == Tab::Calendar => {
                self.month = self.month.next();
                self.clamp_selected_day();
            }
            _ => {}
        }
    }

    fn move_selected_day(&mut self, delta: i64) {
        let day = self.selected_day as i64 + delta;
        let max = self.month.days_in_month() as i64;
        self.selected_day = day.clamp(1, max) as u32;
    }

    fn clamp_selected_day(&mut self) {
        self.selected_day = self.selected_day.clamp(1, self.month.days_in_month());
    }

    // === Display helpers ===

    /// Presence percentage over the live roster.
    pub fn presence_percent(&self) -> f32 {
        rollcall_roster::presence_percentage(&self.students)
    }

    /// Connection status string for the header.
    pub fn status_str(&self) -> &'static str {
        if self.is_demo() {
            "DEMO"
        } else if !self.connected {
            "OFFLINE"
        } else {
            "LIVE"
        }
    }
}

/// Short feed line for a ring record.
fn ring_summary(record: &RingRecord) -> String {
    let names = record.selected.join(", ");
    if record.selected.len() <= 3 {
        format!("rang {}: {}", record.requested_label(), names)
    } else {
        format!(
            "rang {}: {} and {} more",
            record.requested_label(),
            record
                .selected
                .iter()
                .take(3)
                .cloned()
                .collect::<Vec<_>>()
                .join(", "),
            record.selected.len() - 3
        )
    }
}

/// Validates a requested ring size against the roster length.
fn validate_ring_size(size: RingSize, roster_len: usize) -> Result<(), RingError> {
    if roster_len == 0 {
        return Err(RingError::EmptyRoster);
    }
    if let RingSize::Count(n) = size {
        if n == 0 || n as usize > roster_len {
            return Err(RingError::InvalidCount {
                requested: n,
                roster: roster_len,
            });
        }
    }
    Ok(())
}

/// New slot times following the day's last slot; one hour long.
fn next_slot_times(slots: &[TimetableSlot]) -> (String, String) {
    let start = slots
        .last()
        .and_then(|slot| NaiveTime::parse_from_str(&slot.end, "%H:%M").ok())
        .unwrap_or_else(|| NaiveTime::from_hms_opt(9, 0, 0).unwrap_or_default());
    let end = start + chrono::Duration::hours(1);
    (
        start.format("%H:%M").to_string(),
        end.format("%H:%M").to_string(),
    )
}

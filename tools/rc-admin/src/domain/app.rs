//! Application state management.

use chrono::{DateTime, Utc};
use rollcall_types::{Classroom, Health, NewClassroom, NewTeacher, RingRecord, ServerTime, Teacher};

use super::Panel;

/// Application state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    /// Main dashboard view.
    #[default]
    Dashboard,
    /// Help overlay.
    Help,
    /// Quitting.
    Quit,
}

/// Which create-flow field is capturing keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    TeacherName,
    TeacherEmail,
    TeacherSubject,
    ClassroomName,
    ClassroomSubject,
}

impl InputMode {
    /// Prompt label for the field being typed.
    pub fn prompt(&self) -> Option<&'static str> {
        match self {
            InputMode::Normal => None,
            InputMode::TeacherName => Some("New teacher name"),
            InputMode::TeacherEmail => Some("Email"),
            InputMode::TeacherSubject => Some("Subject"),
            InputMode::ClassroomName => Some("New classroom name"),
            InputMode::ClassroomSubject => Some("Subject"),
        }
    }
}

/// A mutation queued by key handling for the main loop to run.
#[derive(Debug, Clone, PartialEq)]
pub enum AdminAction {
    CreateTeacher(NewTeacher),
    DeleteTeacher(u64),
    CreateClassroom(NewClassroom),
    DeleteClassroom(u64),
    Refresh,
}

/// Main application model.
pub struct App {
    /// Current application state/view.
    pub state: AppState,
    /// Currently selected panel.
    pub active_panel: Panel,
    /// Selected row within the active panel.
    pub selected: usize,

    pub classrooms: Vec<Classroom>,
    pub teachers: Vec<Teacher>,
    pub ring_history: Vec<RingRecord>,
    pub health: Option<Health>,
    pub server_time: Option<ServerTime>,

    /// REST endpoint shown on the Backend panel.
    pub endpoint: String,
    /// Running without a backend.
    pub demo: bool,

    /// Last refresh timestamp.
    pub last_refresh: Option<DateTime<Utc>>,
    /// Error message to display (if any).
    pub error_message: Option<String>,

    /// Create-flow input state.
    pub input_mode: InputMode,
    pub input_buffer: String,
    draft_name: String,
    draft_email: String,

    /// Mutations queued for the main loop.
    pending: Vec<AdminAction>,
}

impl App {
    /// Create a new application instance.
    pub fn new(endpoint: String, demo: bool) -> Self {
        Self {
            state: AppState::Dashboard,
            active_panel: Panel::Classrooms,
            selected: 0,
            classrooms: Vec::new(),
            teachers: Vec::new(),
            ring_history: Vec::new(),
            health: None,
            server_time: None,
            endpoint,
            demo,
            last_refresh: None,
            error_message: None,
            input_mode: InputMode::Normal,
            input_buffer: String::new(),
            draft_name: String::new(),
            draft_email: String::new(),
            pending: Vec::new(),
        }
    }

    /// Handle a typed character.
    pub fn handle_key(&mut self, key: char) {
        match self.state {
            AppState::Dashboard => {
                if self.input_mode == InputMode::Normal {
                    self.handle_dashboard_key(key);
                } else {
                    self.input_buffer.push(key);
                }
            }
            AppState::Help => {
                // Any key closes help
                self.state = AppState::Dashboard;
            }
            AppState::Quit => {}
        }
    }

    fn handle_dashboard_key(&mut self, key: char) {
        match key {
            'q' | 'Q' => self.state = AppState::Quit,
            '?' => self.state = AppState::Help,
            'r' | 'R' => self.pending.push(AdminAction::Refresh),
            'n' | 'N' => self.start_create(),
            'x' | 'X' => self.delete_selected(),
            c => {
                if let Some(panel) = Panel::from_hotkey(c) {
                    self.active_panel = panel;
                    self.selected = 0;
                }
            }
        }
    }

    /// Begin the create flow for the active panel.
    fn start_create(&mut self) {
        if !self.active_panel.is_editable() {
            return;
        }
        self.error_message = None;
        self.draft_name.clear();
        self.draft_email.clear();
        self.input_buffer.clear();
        self.input_mode = match self.active_panel {
            Panel::Teachers => InputMode::TeacherName,
            _ => InputMode::ClassroomName,
        };
    }

    /// Queue deletion of the selected row.
    fn delete_selected(&mut self) {
        match self.active_panel {
            Panel::Teachers => {
                if let Some(teacher) = self.teachers.get(self.selected) {
                    self.pending.push(AdminAction::DeleteTeacher(teacher.id));
                }
            }
            Panel::Classrooms => {
                if let Some(classroom) = self.classrooms.get(self.selected) {
                    self.pending.push(AdminAction::DeleteClassroom(classroom.id));
                }
            }
            _ => {}
        }
    }

    /// Advance the create flow; the last field submits.
    pub fn handle_enter(&mut self) {
        if self.state == AppState::Help {
            self.state = AppState::Dashboard;
            return;
        }

        let value = self.input_buffer.trim().to_string();
        match self.input_mode {
            InputMode::Normal => {}
            InputMode::TeacherName | InputMode::ClassroomName if value.is_empty() => {
                self.error_message = Some("name cannot be empty".to_string());
            }
            InputMode::TeacherName => {
                self.draft_name = value;
                self.input_buffer.clear();
                self.input_mode = InputMode::TeacherEmail;
            }
            InputMode::TeacherEmail => {
                self.draft_email = value;
                self.input_buffer.clear();
                self.input_mode = InputMode::TeacherSubject;
            }
            InputMode::TeacherSubject => {
                self.pending.push(AdminAction::CreateTeacher(NewTeacher {
                    name: std::mem::take(&mut self.draft_name),
                    email: std::mem::take(&mut self.draft_email),
                    subject: value,
                }));
                self.cancel_input();
            }
            InputMode::ClassroomName => {
                self.draft_name = value;
                self.input_buffer.clear();
                self.input_mode = InputMode::ClassroomSubject;
            }
            InputMode::ClassroomSubject => {
                self.pending.push(AdminAction::CreateClassroom(NewClassroom {
                    name: std::mem::take(&mut self.draft_name),
                    subject: value,
                }));
                self.cancel_input();
            }
        }
    }

    /// Delete the last typed character.
    pub fn handle_backspace(&mut self) {
        if self.state == AppState::Help {
            self.state = AppState::Dashboard;
            return;
        }
        if self.input_mode != InputMode::Normal {
            self.input_buffer.pop();
        }
    }

    /// Esc cancels input, closes help, or quits.
    pub fn handle_esc(&mut self) {
        match self.state {
            AppState::Help => self.state = AppState::Dashboard,
            AppState::Dashboard if self.input_mode != InputMode::Normal => self.cancel_input(),
            AppState::Dashboard => self.state = AppState::Quit,
            AppState::Quit => {}
        }
    }

    fn cancel_input(&mut self) {
        self.input_mode = InputMode::Normal;
        self.input_buffer.clear();
        self.draft_name.clear();
        self.draft_email.clear();
    }

    /// Number of rows in the active panel.
    pub fn active_rows(&self) -> usize {
        match self.active_panel {
            Panel::Classrooms => self.classrooms.len(),
            Panel::Teachers => self.teachers.len(),
            Panel::RingHistory => self.ring_history.len(),
            Panel::Backend => 0,
        }
    }

    /// Move selection up.
    pub fn select_prev(&mut self) {
        let rows = self.active_rows();
        if rows == 0 {
            return;
        }
        self.selected = if self.selected == 0 {
            rows - 1
        } else {
            self.selected - 1
        };
    }

    /// Move selection down.
    pub fn select_next(&mut self) {
        let rows = self.active_rows();
        if rows == 0 {
            return;
        }
        self.selected = (self.selected + 1) % rows;
    }

    /// Keep the selection inside the list after a delete or refresh.
    pub fn clamp_selection(&mut self) {
        let rows = self.active_rows();
        if rows == 0 {
            self.selected = 0;
        } else if self.selected >= rows {
            self.selected = rows - 1;
        }
    }

    /// Drain queued mutations for the main loop.
    pub fn take_actions(&mut self) -> Vec<AdminAction> {
        std::mem::take(&mut self.pending)
    }

    /// Check if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.state == AppState::Quit
    }
}

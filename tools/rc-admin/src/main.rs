//! RC-Admin: RollCall Admin Panel
//!
//! A TUI admin panel for classrooms, teachers, and the random-ring history.

use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::Mutex;

use rollcall_client::ApiClient;
use rollcall_roster::demo;
use rollcall_types::{Classroom, Teacher};

use rc_admin::domain::{AdminAction, App};
use rc_admin::ui;

/// RC-Admin: RollCall Admin Panel
#[derive(Parser, Debug)]
#[command(name = "rc-admin")]
#[command(about = "TUI admin panel for classrooms, teachers, and ring history")]
struct Args {
    /// REST API endpoint URL
    #[arg(long, default_value = "http://localhost:4800")]
    api_url: String,

    /// Refresh interval in seconds
    #[arg(short, long, default_value = "10")]
    refresh: u64,

    /// Run in demo mode with built-in data (no backend required)
    #[arg(long)]
    demo: bool,

    /// Append logs to this file (stderr would corrupt the terminal)
    #[arg(long)]
    log_file: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        init_tracing(path)?;
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app state
    let app = Arc::new(Mutex::new(App::new(args.api_url.clone(), args.demo)));

    // Create API client (if not in demo mode)
    let api_client = if args.demo {
        None
    } else {
        match ApiClient::new(&args.api_url) {
            Ok(client) => Some(Arc::new(client)),
            Err(e) => {
                tracing::warn!(error = %e, "failed to create API client");
                None
            }
        }
    };

    // Set initial data
    if args.demo {
        set_demo_data(&mut *app.lock().await);
    } else {
        fetch_and_update(&api_client, &app).await;
    }

    // Spawn background refresh task
    let refresh_app = app.clone();
    let refresh_client = api_client.clone();
    let refresh_interval = Duration::from_secs(args.refresh.max(1));
    let demo_mode = args.demo;

    tokio::spawn(async move {
        let mut interval = tokio::time::interval(refresh_interval);
        loop {
            interval.tick().await;
            if demo_mode {
                // In demo mode, just update the timestamp
                let mut app = refresh_app.lock().await;
                app.last_refresh = Some(chrono::Utc::now());
            } else {
                fetch_and_update(&refresh_client, &refresh_app).await;
            }
        }
    });

    // Main loop
    let result = run_app(&mut terminal, app.clone(), api_client).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

/// Route log output to a file so the alternate screen stays intact.
fn init_tracing(path: &str) -> Result<()> {
    use tracing_subscriber::EnvFilter;

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(file)
        .with_ansi(false)
        .init();

    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: Arc<Mutex<App>>,
    api_client: Option<Arc<ApiClient>>,
) -> Result<()> {
    loop {
        // Draw UI
        {
            let app_guard = app.lock().await;
            terminal.draw(|frame| {
                ui::render(frame, &app_guard);
            })?;
        }

        // Handle input with timeout so background refreshes show up
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events (not release)
                if key.kind == KeyEventKind::Press {
                    let mut app_guard = app.lock().await;
                    match key.code {
                        KeyCode::Char(c) => app_guard.handle_key(c),
                        KeyCode::Backspace => app_guard.handle_backspace(),
                        KeyCode::Enter => app_guard.handle_enter(),
                        KeyCode::Up => app_guard.select_prev(),
                        KeyCode::Down => app_guard.select_next(),
                        KeyCode::Esc => app_guard.handle_esc(),
                        _ => {}
                    }
                }
            }
        }

        // Run any mutations queued by key handling
        let actions = app.lock().await.take_actions();
        for action in actions {
            perform_action(&api_client, &app, action).await;
        }

        // Check if we should quit
        if app.lock().await.should_quit() {
            return Ok(());
        }
    }
}

/// Run one queued mutation against the backend.
async fn perform_action(
    api_client: &Option<Arc<ApiClient>>,
    app: &Arc<Mutex<App>>,
    action: AdminAction,
) {
    let Some(client) = api_client else {
        apply_demo_action(&mut *app.lock().await, action);
        return;
    };

    match action {
        AdminAction::CreateTeacher(new) => match client.create_teacher(&new).await {
            Ok(teacher) => {
                let mut app = app.lock().await;
                app.teachers.push(teacher);
                app.error_message = None;
            }
            Err(e) => {
                app.lock().await.error_message = Some(format!("create teacher: {}", e));
            }
        },
        AdminAction::DeleteTeacher(id) => match client.delete_teacher(id).await {
            Ok(()) => {
                let mut app = app.lock().await;
                app.teachers.retain(|t| t.id != id);
                app.clamp_selection();
                app.error_message = None;
            }
            Err(e) => {
                app.lock().await.error_message = Some(format!("delete teacher: {}", e));
            }
        },
        AdminAction::CreateClassroom(new) => match client.create_classroom(&new).await {
            Ok(classroom) => {
                let mut app = app.lock().await;
                app.classrooms.push(classroom);
                app.error_message = None;
            }
            Err(e) => {
                app.lock().await.error_message = Some(format!("create classroom: {}", e));
            }
        },
        AdminAction::DeleteClassroom(id) => match client.delete_classroom(id).await {
            Ok(()) => {
                let mut app = app.lock().await;
                app.classrooms.retain(|c| c.id != id);
                app.clamp_selection();
                app.error_message = None;
            }
            Err(e) => {
                app.lock().await.error_message = Some(format!("delete classroom: {}", e));
            }
        },
        AdminAction::Refresh => fetch_and_update(api_client, app).await,
    }
}

/// Demo mode applies mutations to local state only.
fn apply_demo_action(app: &mut App, action: AdminAction) {
    match action {
        AdminAction::CreateTeacher(new) => {
            let id = app.teachers.iter().map(|t| t.id).max().unwrap_or(0) + 1;
            app.teachers.push(Teacher {
                id,
                name: new.name,
                email: new.email,
                subject: new.subject,
                classroom: None,
            });
        }
        AdminAction::DeleteTeacher(id) => {
            app.teachers.retain(|t| t.id != id);
            app.clamp_selection();
        }
        AdminAction::CreateClassroom(new) => {
            let id = app.classrooms.iter().map(|c| c.id).max().unwrap_or(0) + 1;
            app.classrooms.push(Classroom {
                id,
                name: new.name,
                subject: new.subject,
                student_count: 0,
            });
        }
        AdminAction::DeleteClassroom(id) => {
            app.classrooms.retain(|c| c.id != id);
            app.clamp_selection();
        }
        AdminAction::Refresh => {
            app.last_refresh = Some(chrono::Utc::now());
        }
    }
}

/// Fetch data from the backend and update app state.
async fn fetch_and_update(api_client: &Option<Arc<ApiClient>>, app: &Arc<Mutex<App>>) {
    let Some(client) = api_client else {
        return;
    };

    let mut app_guard = app.lock().await;

    match client.health().await {
        Ok(health) => {
            app_guard.health = Some(health);
            app_guard.error_message = None;
        }
        Err(e) => {
            app_guard.health = None;
            app_guard.error_message = Some(format!("health: {}", e));
            tracing::warn!(error = %e, "health check failed");
        }
    }

    match client.server_time().await {
        Ok(time) => app_guard.server_time = Some(time),
        Err(_) => {
            // Keep the last known server time
        }
    }

    match client.classrooms().await {
        Ok(classrooms) => app_guard.classrooms = classrooms,
        Err(e) => app_guard.error_message = Some(format!("classrooms: {}", e)),
    }

    match client.teachers().await {
        Ok(teachers) => app_guard.teachers = teachers,
        Err(e) => app_guard.error_message = Some(format!("teachers: {}", e)),
    }

    match client.ring_history().await {
        Ok(history) => app_guard.ring_history = history,
        Err(e) => app_guard.error_message = Some(format!("ring history: {}", e)),
    }

    app_guard.clamp_selection();
    app_guard.last_refresh = Some(chrono::Utc::now());
}

/// Set demo data for development/testing.
fn set_demo_data(app: &mut App) {
    app.classrooms = demo::demo_classrooms();
    app.teachers = demo::demo_teachers();
    app.ring_history = demo::demo_ring_history();
    app.health = Some(demo::demo_health());
    app.server_time = Some(demo::demo_server_time());
    app.last_refresh = Some(chrono::Utc::now());
}

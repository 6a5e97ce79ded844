//! RC-TUI: terminal dashboard for live class attendance.
//!
//! This is an external client tool that talks to the attendance backend over
//! its REST API and WebSocket event stream. It has no special access to the
//! backend - same access level as any other client.
//!
//! ## Usage
//!
//! ```bash
//! # Connect to localhost (default)
//! rc-tui
//!
//! # Connect to a remote backend
//! rc-tui --api-url http://school.example.com:4800 --ws-url ws://school.example.com:4800/ws
//!
//! # Run without a backend
//! rc-tui --demo
//! ```

mod app;
mod ui;

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
use ratatui::prelude::*;
use tokio::sync::mpsc;

use rollcall_client::{ApiClient, SocketClient, SocketEvent};
use rollcall_types::StudentStatus;

use app::{App, InputMode, Tab};

/// RollCall class dashboard
#[derive(Parser, Debug)]
#[command(name = "rc-tui")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// REST API endpoint URL
    #[arg(long, default_value = "http://localhost:4800")]
    api_url: String,

    /// WebSocket endpoint URL
    #[arg(long, default_value = "ws://localhost:4800/ws")]
    ws_url: String,

    /// Full roster refresh interval in milliseconds
    #[arg(long, default_value = "30000")]
    refresh_ms: u64,

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

    // Setup terminal with panic hook for cleanup
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        // Attempt terminal cleanup on panic
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app state
    let api = if args.demo {
        None
    } else {
        Some(Arc::new(ApiClient::new(&args.api_url)?))
    };
    let mut app = App::new(api);
    let refresh_interval = Duration::from_millis(args.refresh_ms);

    // Create socket event channel
    let (socket_tx, socket_rx) = mpsc::channel(100);

    // Start socket client (not in demo mode)
    let mut socket_client = if args.demo {
        None
    } else {
        let mut client = SocketClient::new(args.ws_url, socket_tx);
        client.start();
        Some(client)
    };

    // Run the app
    let result = run_app(&mut terminal, &mut app, refresh_interval, socket_rx).await;

    // Cleanup socket
    if let Some(client) = socket_client.as_mut() {
        client.stop().await;
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
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

/// Main application loop.
async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    refresh_interval: Duration,
    mut socket_rx: mpsc::Receiver<SocketEvent>,
) -> Result<()> {
    // Initial data fetch
    app.refresh().await;

    loop {
        // Draw UI
        terminal.draw(|frame| ui::render(frame, app))?;

        // Use a short poll timeout to handle input, socket, and tick together
        let poll_timeout = Duration::from_millis(100);

        // Check for socket events (non-blocking)
        while let Ok(event) = socket_rx.try_recv() {
            app.handle_socket_event(event);
        }

        // Track previous tab for tab-switch detection
        let prev_tab = app.active_tab;

        // Handle terminal events with timeout
        handle_terminal_events(app, poll_timeout).await?;

        // Refresh data when switching to a tab with nothing loaded yet
        if app.active_tab != prev_tab && app.needs_tab_refresh() {
            refresh_tab_data(app).await;
        }

        // Calendar month navigation needs a refetch for the new month
        if app.active_tab == Tab::Calendar && app.needs_calendar_refresh() {
            app.refresh_calendar().await;
        }

        // 1 s tick: session timer and per-student elapsed time
        if app.last_tick.elapsed() >= Duration::from_secs(1) {
            app.tick();
        }

        // Periodic full refresh (socket events cover most changes)
        if app.last_refresh.elapsed() >= refresh_interval {
            app.refresh().await;
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

/// Handle terminal key events.
async fn handle_terminal_events(app: &mut App, poll_timeout: Duration) -> Result<()> {
    if !event::poll(poll_timeout)? {
        return Ok(());
    }

    let Event::Key(key) = event::read()? else {
        return Ok(());
    };

    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    // Help overlay swallows every key
    if app.show_help {
        app.show_help = false;
        return Ok(());
    }

    // Input modes capture typing before command keys
    if app.input_mode != InputMode::Normal {
        handle_input_mode(app, key.code).await;
        return Ok(());
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
            app.should_quit = true;
        }
        KeyCode::Char('r') | KeyCode::Char('R') => {
            refresh_tab_data(app).await;
        }
        // Roster actions
        KeyCode::Char(' ') | KeyCode::Enter if app.active_tab == Tab::Roster => {
            app.toggle_selected(None).await;
        }
        KeyCode::Char('p') if app.active_tab == Tab::Roster => {
            app.toggle_selected(Some(StudentStatus::Present)).await;
        }
        KeyCode::Char('a') if app.active_tab == Tab::Roster => {
            app.toggle_selected(Some(StudentStatus::Absent)).await;
        }
        KeyCode::Char('l') if app.active_tab == Tab::Roster => {
            app.toggle_selected(Some(StudentStatus::LeftEarly)).await;
        }
        KeyCode::Char('c') if app.active_tab == Tab::Roster => {
            app.toggle_selected(Some(StudentStatus::Active)).await;
        }
        KeyCode::Char('m') if app.active_tab == Tab::Roster => {
            app.mark_attendance().await;
        }
        // Timetable actions
        KeyCode::Char('x') if app.active_tab == Tab::Timetable => {
            app.delete_selected_slot();
        }
        KeyCode::Char('u') if app.active_tab == Tab::Timetable => {
            app.push_timetable().await;
        }
        _ => {
            app.on_key(key.code);
        }
    }

    Ok(())
}

/// Handle a key while an input prompt is active.
async fn handle_input_mode(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Esc => app.cancel_input(),
        KeyCode::Backspace => {
            app.input_buffer.pop();
            if app.input_mode == InputMode::Search {
                app.filter.query = app.input_buffer.clone();
            }
        }
        KeyCode::Enter => match app.input_mode {
            InputMode::Search => {
                // Query already applied while typing
                app.input_mode = InputMode::Normal;
                app.input_buffer.clear();
            }
            InputMode::RingCount => app.submit_ring().await,
            InputMode::SlotSubject => app.submit_new_slot(),
            InputMode::SlotEdit => app.submit_edit_slot(),
            InputMode::Normal => {}
        },
        KeyCode::Char(c) => {
            app.input_buffer.push(c);
            if app.input_mode == InputMode::Search {
                app.filter.query = app.input_buffer.clone();
            }
        }
        _ => {}
    }
}

/// Refresh data for the current active tab.
async fn refresh_tab_data(app: &mut App) {
    match app.active_tab {
        Tab::Roster | Tab::Events => app.refresh().await,
        Tab::Timetable => app.refresh_timetable().await,
        Tab::Calendar => app.refresh_calendar().await,
    }
}

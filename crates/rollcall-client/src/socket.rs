//! WebSocket client for the backend's live event stream.

use futures_util::{SinkExt, StreamExt};
use thiserror::Error;
use tokio::sync::mpsc;
use tokio_tungstenite::{connect_async, tungstenite::Message};

use rollcall_types::ClassEvent;

/// Events delivered to the front end's channel.
#[derive(Debug, Clone)]
pub enum SocketEvent {
    /// A parsed backend event.
    Class(ClassEvent),
    /// Connection established.
    Connected,
    /// Connection lost.
    Disconnected,
    /// Error occurred.
    Error(String),
}

/// Connection-level failures. Any of these triggers a reconnect attempt.
#[derive(Debug, Error)]
pub enum SocketError {
    #[error("websocket transport error: {0}")]
    Transport(#[from] tokio_tungstenite::tungstenite::Error),
    #[error("socket closed by server")]
    Closed,
}

/// Maximum reconnection attempts before giving up.
const MAX_RECONNECT_ATTEMPTS: u32 = 10;

/// Base delay between reconnection attempts (exponential backoff).
const RECONNECT_BASE_DELAY_SECS: u64 = 2;

/// Maximum delay between reconnection attempts.
const MAX_RECONNECT_DELAY_SECS: u64 = 60;

/// WebSocket client. Owns a spawned connection task; parsed events arrive on
/// the channel handed to [`SocketClient::new`].
pub struct SocketClient {
    ws_url: String,
    event_tx: mpsc::Sender<SocketEvent>,
    shutdown_tx: Option<mpsc::Sender<()>>,
}

impl SocketClient {
    /// Create a new socket client for `ws_url` (e.g. `ws://127.0.0.1:4800/ws`).
    pub fn new(ws_url: String, event_tx: mpsc::Sender<SocketEvent>) -> Self {
        Self {
            ws_url,
            event_tx,
            shutdown_tx: None,
        }
    }

    /// Start the connection task.
    pub fn start(&mut self) {
        let (shutdown_tx, shutdown_rx) = mpsc::channel::<()>(1);
        self.shutdown_tx = Some(shutdown_tx);

        let ws_url = self.ws_url.clone();
        let event_tx = self.event_tx.clone();

        tokio::spawn(Self::connection_loop(ws_url, event_tx, shutdown_rx));
    }

    /// Connection loop with reconnection logic.
    ///
    /// All failure notifications (`Error`, `Disconnected`) are sent here, so
    /// a failed connection produces exactly one of each per attempt.
    async fn connection_loop(
        ws_url: String,
        event_tx: mpsc::Sender<SocketEvent>,
        mut shutdown_rx: mpsc::Receiver<()>,
    ) {
        let mut reconnect_attempts = 0u32;

        loop {
            match Self::run_connection(&ws_url, event_tx.clone()).await {
                Ok(()) => break,
                Err(e) => {
                    reconnect_attempts += 1;
                    let _ = event_tx.send(SocketEvent::Error(e.to_string())).await;
                    let _ = event_tx.send(SocketEvent::Disconnected).await;

                    if !Self::should_retry(reconnect_attempts, &event_tx).await {
                        break;
                    }

                    let delay_secs = Self::calculate_backoff_delay(reconnect_attempts);
                    tracing::warn!(
                        attempt = reconnect_attempts,
                        delay_secs,
                        "socket disconnected, retrying"
                    );

                    tokio::select! {
                        _ = tokio::time::sleep(std::time::Duration::from_secs(delay_secs)) => {}
                        _ = shutdown_rx.recv() => break,
                    }
                }
            }
        }
    }

    /// Check if we should retry connection.
    async fn should_retry(attempts: u32, event_tx: &mpsc::Sender<SocketEvent>) -> bool {
        if attempts >= MAX_RECONNECT_ATTEMPTS {
            let msg = format!(
                "socket reconnection failed after {} attempts",
                MAX_RECONNECT_ATTEMPTS
            );
            let _ = event_tx.send(SocketEvent::Error(msg)).await;
            return false;
        }
        true
    }

    /// Calculate exponential backoff delay.
    fn calculate_backoff_delay(attempts: u32) -> u64 {
        std::cmp::min(
            RECONNECT_BASE_DELAY_SECS.saturating_mul(1 << attempts.min(6)),
            MAX_RECONNECT_DELAY_SECS,
        )
    }

    /// Run a single connection until it fails or the server closes it.
    async fn run_connection(
        ws_url: &str,
        event_tx: mpsc::Sender<SocketEvent>,
    ) -> Result<(), SocketError> {
        let (ws_stream, _) = connect_async(ws_url).await?;

        let _ = event_tx.send(SocketEvent::Connected).await;

        let (mut write, mut read) = ws_stream.split();

        while let Some(msg) = read.next().await {
            match msg {
                Ok(Message::Text(text)) => {
                    if let Some(event) = parse_frame(&text) {
                        let _ = event_tx.send(SocketEvent::Class(event)).await;
                    }
                }
                Ok(Message::Close(_)) => return Err(SocketError::Closed),
                Ok(Message::Ping(data)) => {
                    let _ = write.send(Message::Pong(data)).await;
                }
                Err(e) => return Err(SocketError::Transport(e)),
                _ => {}
            }
        }

        // Stream ended without a close frame.
        Err(SocketError::Closed)
    }

    /// Stop the connection task.
    pub async fn stop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(()).await;
        }
    }
}

/// Parses one text frame. Frames that are not well-formed events are skipped;
/// the stream may carry event kinds this client does not know.
fn parse_frame(text: &str) -> Option<ClassEvent> {
    match serde_json::from_str::<ClassEvent>(text) {
        Ok(event) => Some(event),
        Err(e) => {
            tracing::debug!(error = %e, "skipping unparseable socket frame");
            None
        }
    }
}

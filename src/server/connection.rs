//! Background worker owning the server connection.
//!
//! The shell loop is synchronous; this worker runs its own tokio runtime on
//! a dedicated thread, fetches the user directory once, then pumps the
//! WebSocket stream. Decoded events cross back over an std mpsc channel and
//! outbound requests come in over an unbounded tokio channel.

use std::sync::mpsc::Sender as EventSender;

use anyhow::{anyhow, Result};
use futures_util::{SinkExt, StreamExt};
use tokio::sync::{mpsc, watch};
use tokio_tungstenite::{connect_async, tungstenite::Message};

use crate::{
    domain::events::ServerEvent,
    infra::config::ServerConfig,
    server::{directory, wire},
    usecases::contracts::OutboundSender,
};

const CONNECTION_WORKER_STARTED: &str = "SERVER_CONNECTION_WORKER_STARTED";
const CONNECTION_WORKER_STOPPED: &str = "SERVER_CONNECTION_WORKER_STOPPED";
const CONNECTION_STREAM_FAILED: &str = "SERVER_CONNECTION_STREAM_FAILED";

pub struct ServerConnection {
    stop_tx: Option<watch::Sender<bool>>,
    outbound_tx: mpsc::UnboundedSender<wire::SendRequest>,
}

impl ServerConnection {
    /// Spawns the connection worker and returns the inbound event channel.
    /// The UI is usable before the directory fetch resolves.
    pub fn start(config: &ServerConfig) -> (Self, std::sync::mpsc::Receiver<ServerEvent>) {
        let (event_tx, event_rx) = std::sync::mpsc::channel();
        let (outbound_tx, outbound_rx) = mpsc::unbounded_channel();
        let (stop_tx, stop_rx) = watch::channel(false);

        let base_url = config.base_url.clone();
        std::thread::spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(error) => {
                    tracing::error!(error = %error, "connection runtime failed to start");
                    return;
                }
            };

            tracing::info!(code = CONNECTION_WORKER_STARTED, url = %base_url, "server connection worker started");
            runtime.block_on(run(base_url, event_tx, outbound_rx, stop_rx));
            tracing::info!(code = CONNECTION_WORKER_STOPPED, "server connection worker stopped");
        });

        (
            Self {
                stop_tx: Some(stop_tx),
                outbound_tx,
            },
            event_rx,
        )
    }
}

impl OutboundSender for ServerConnection {
    fn send(&mut self, request: wire::SendRequest) -> Result<()> {
        self.outbound_tx
            .send(request)
            .map_err(|_| anyhow!("server connection is down"))
    }
}

impl Drop for ServerConnection {
    fn drop(&mut self) {
        if let Some(stop_tx) = self.stop_tx.take() {
            let _ = stop_tx.send(true);
        }
    }
}

async fn run(
    base_url: String,
    event_tx: EventSender<ServerEvent>,
    mut outbound_rx: mpsc::UnboundedReceiver<wire::SendRequest>,
    mut stop_rx: watch::Receiver<bool>,
) {
    let users = directory::fetch_users(&base_url).await;
    if event_tx.send(ServerEvent::Directory(users)).is_err() {
        return;
    }

    let url = websocket_url(&base_url);
    let (socket, _response) = match connect_async(url.as_str()).await {
        Ok(connected) => connected,
        Err(error) => {
            tracing::warn!(code = CONNECTION_STREAM_FAILED, error = %error, url = %url, "chat stream connection failed");
            return;
        }
    };
    let (mut sink, mut stream) = socket.split();

    loop {
        tokio::select! {
            changed = stop_rx.changed() => {
                if changed.is_err() || *stop_rx.borrow() {
                    return;
                }
            }
            request = outbound_rx.recv() => match request {
                Some(request) => {
                    let frame = wire::encode_send(&request);
                    if let Err(error) = sink.send(Message::text(frame)).await {
                        tracing::warn!(code = CONNECTION_STREAM_FAILED, error = %error, "outbound send failed");
                    }
                }
                None => return,
            },
            frame = stream.next() => match frame {
                Some(Ok(Message::Text(text))) => match wire::decode_event(text.as_str()) {
                    Some(event) => {
                        if event_tx.send(event).is_err() {
                            return;
                        }
                    }
                    None => tracing::debug!(frame = %text, "dropping unrecognized frame"),
                },
                Some(Ok(_)) => {}
                Some(Err(error)) => {
                    tracing::warn!(code = CONNECTION_STREAM_FAILED, error = %error, "chat stream read failed");
                    return;
                }
                None => {
                    tracing::info!("chat stream closed by server");
                    return;
                }
            },
        }
    }
}

fn websocket_url(base_url: &str) -> String {
    let trimmed = base_url.trim_end_matches('/');
    let authority = trimmed
        .strip_prefix("http://")
        .or_else(|| trimmed.strip_prefix("https://"))
        .unwrap_or(trimmed);
    if trimmed.starts_with("https://") {
        format!("wss://{authority}/ws")
    } else {
        format!("ws://{authority}/ws")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn websocket_url_maps_http_to_ws() {
        assert_eq!(
            websocket_url("http://127.0.0.1:5000"),
            "ws://127.0.0.1:5000/ws"
        );
    }

    #[test]
    fn websocket_url_maps_https_to_wss() {
        assert_eq!(websocket_url("https://chat.test/"), "wss://chat.test/ws");
    }

    #[test]
    fn websocket_url_accepts_bare_authority() {
        assert_eq!(websocket_url("127.0.0.1:5000"), "ws://127.0.0.1:5000/ws");
    }
}

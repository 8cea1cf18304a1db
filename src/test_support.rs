//! Shared helpers for unit tests.

use anyhow::{anyhow, Result};

use crate::{
    domain::events::{AppEvent, KeyInput},
    server::wire::SendRequest,
    usecases::contracts::OutboundSender,
};

/// Captures outbound requests instead of touching a live connection.
#[derive(Debug, Default)]
pub struct RecordingSender {
    pub sent: Vec<SendRequest>,
    fail: bool,
}

impl RecordingSender {
    pub fn failing() -> Self {
        Self {
            sent: Vec::new(),
            fail: true,
        }
    }
}

impl OutboundSender for RecordingSender {
    fn send(&mut self, request: SendRequest) -> Result<()> {
        if self.fail {
            return Err(anyhow!("transport unavailable"));
        }
        self.sent.push(request);
        Ok(())
    }
}

pub fn key(name: &str) -> AppEvent {
    AppEvent::InputKey(KeyInput::new(name, false))
}

pub fn keys(names: &[&str]) -> Vec<AppEvent> {
    names.iter().map(|name| key(name)).collect()
}

/// Keystrokes that type `text` into whichever composer has focus.
pub fn type_text(text: &str) -> Vec<AppEvent> {
    text.chars().map(|ch| key(&ch.to_string())).collect()
}

use anyhow::Result;

use crate::{
    domain::{events::AppEvent, shell_state::ChatState},
    server::wire::SendRequest,
};

pub trait AppEventSource {
    fn next_event(&mut self) -> Result<Option<AppEvent>>;
}

/// Dispatches outbound send requests over the transport.
pub trait OutboundSender {
    fn send(&mut self, request: SendRequest) -> Result<()>;
}

pub trait ChatOrchestrator {
    fn state(&self) -> &ChatState;
    fn handle_event(&mut self, event: AppEvent) -> Result<()>;
}

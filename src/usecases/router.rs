//! The conversation router.
//!
//! Classifies every inbound message as public or private, drives the
//! private-session transitions, and builds outbound send requests with the
//! correct target. Self-messaging is blocked here, at selection time and at
//! send time.

use anyhow::Result;

use crate::{
    domain::{
        conversation::ConversationState, message::ChatMessage, transcript::TranscriptLine,
        user::LocalUser,
    },
    server::wire::SendRequest,
    usecases::{contracts::OutboundSender, identity::IdentityIndex},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionResult {
    Accepted(String),
    RejectedSelf,
}

/// Opens (or replaces) the private session for `username`, unless the name
/// denotes the local user. Rejection leaves the current state untouched.
pub fn select_for_private(
    conversation: &mut ConversationState,
    identity: &IdentityIndex,
    local: &LocalUser,
    username: &str,
) -> SelectionResult {
    let resolved = identity.resolve(username);
    if local.is_self(username, resolved) {
        return SelectionResult::RejectedSelf;
    }

    conversation.open_session(username);
    SelectionResult::Accepted(username.to_owned())
}

/// Applies one delivered message to the conversation views.
///
/// Every message lands in the public transcript; the sender label gains a
/// "→ you" annotation whenever a receiver is present. A private message
/// addressed to the local user additionally lands in the private panel under
/// its sender's name, without switching the open session to that sender.
pub fn record_incoming(
    conversation: &mut ConversationState,
    message: &ChatMessage,
    local_id: Option<i64>,
    fallback_clock: &str,
) {
    let clock = message
        .clock_label()
        .unwrap_or_else(|| fallback_clock.to_owned());

    let label = if message.is_private() {
        format!("{} → you", message.sender)
    } else {
        message.sender.clone()
    };
    conversation.push_public(TranscriptLine::new(label, &message.content, &clock));

    if local_id.is_some() && message.receiver_id == local_id {
        conversation.push_private(TranscriptLine::new(&message.sender, &message.content, &clock));
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublicSendOutcome {
    Dispatched,
    EmptyInput,
}

/// Dispatches a public send. There is no optimistic echo; the message comes
/// back through the stream like everyone else's. Whitespace only gates the
/// empty check, the content goes out as typed.
pub fn submit_public(sender: &mut dyn OutboundSender, text: &str) -> Result<PublicSendOutcome> {
    if text.trim().is_empty() {
        return Ok(PublicSendOutcome::EmptyInput);
    }

    sender.send(SendRequest {
        content: text.to_owned(),
        receiver_id: None,
    })?;
    Ok(PublicSendOutcome::Dispatched)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrivateSendOutcome {
    Sent { peer: String },
    EmptyInput,
    NoSession,
    UnresolvedPeer { peer: String },
    SelfAddressed,
}

/// Dispatches a private send to the open session's peer.
///
/// The peer is resolved through the identity index, never guessed: a failed
/// lookup rejects the send instead of misrouting it. Successful sends are
/// echoed into the panel immediately, unlike public ones.
pub fn submit_private(
    conversation: &mut ConversationState,
    identity: &IdentityIndex,
    local: &LocalUser,
    sender: &mut dyn OutboundSender,
    text: &str,
    local_clock: &str,
) -> Result<PrivateSendOutcome> {
    if text.trim().is_empty() {
        return Ok(PrivateSendOutcome::EmptyInput);
    }

    let Some(peer) = conversation.session().peer().map(str::to_owned) else {
        return Ok(PrivateSendOutcome::NoSession);
    };

    let Some(receiver_id) = identity.resolve(&peer) else {
        return Ok(PrivateSendOutcome::UnresolvedPeer { peer });
    };

    if local.is_self(&peer, Some(receiver_id)) {
        return Ok(PrivateSendOutcome::SelfAddressed);
    }

    sender.send(SendRequest {
        content: text.to_owned(),
        receiver_id: Some(receiver_id),
    })?;
    conversation.push_private(TranscriptLine::new(
        format!("you → {peer}"),
        text,
        local_clock,
    ));
    Ok(PrivateSendOutcome::Sent { peer })
}

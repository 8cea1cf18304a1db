//! JSON codec for the chat stream.
//!
//! Frames are `{"event": <name>, "data": <payload>}` objects. Unknown or
//! malformed frames decode to `None` and are dropped by the connection.

use serde::{Deserialize, Serialize};

use crate::domain::{events::ServerEvent, message::ChatMessage};

/// Outbound send request. `receiver_id` is null for the public channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SendRequest {
    pub content: String,
    pub receiver_id: Option<i64>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
enum WireEvent {
    OnlineUsers(Vec<String>),
    UserJoined { username: String },
    UserLeft { username: String },
    NewMessage(WireMessage),
}

#[derive(Debug, Deserialize)]
struct WireMessage {
    sender: String,
    content: String,
    #[serde(default)]
    receiver_id: Option<i64>,
    #[serde(default)]
    timestamp: Option<String>,
}

pub fn decode_event(frame: &str) -> Option<ServerEvent> {
    let event = match serde_json::from_str::<WireEvent>(frame) {
        Ok(event) => event,
        Err(_) => return None,
    };

    Some(match event {
        WireEvent::OnlineUsers(usernames) => ServerEvent::Roster(usernames),
        WireEvent::UserJoined { username } => ServerEvent::Joined { username },
        WireEvent::UserLeft { username } => ServerEvent::Left { username },
        WireEvent::NewMessage(message) => ServerEvent::Message(ChatMessage {
            sender: message.sender,
            content: message.content,
            receiver_id: message.receiver_id,
            timestamp: message.timestamp,
        }),
    })
}

pub fn encode_send(request: &SendRequest) -> String {
    serde_json::json!({ "event": "send_message", "data": request }).to_string()
}

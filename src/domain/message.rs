/// A chat message as delivered by the transport.
///
/// `receiver_id` is absent for the public channel and carries the
/// addressee's user id for private messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub sender: String,
    pub content: String,
    pub receiver_id: Option<i64>,
    /// ISO-8601 timestamp as sent by the server, when present.
    pub timestamp: Option<String>,
}

impl ChatMessage {
    pub fn is_private(&self) -> bool {
        self.receiver_id.is_some()
    }

    /// Hour:minute label taken from the server timestamp. The date part is
    /// never rendered.
    pub fn clock_label(&self) -> Option<String> {
        clock_from_iso(self.timestamp.as_deref()?)
    }
}

/// "2024-01-01T10:05:00" -> "10:05".
pub fn clock_from_iso(timestamp: &str) -> Option<String> {
    let (_, time) = timestamp.split_once('T')?;
    Some(time.get(..5)?.to_owned())
}

/// Wall-clock label for locally echoed messages, same shape as
/// [`clock_from_iso`].
pub fn local_clock_label() -> String {
    chrono::Local::now().format("%H:%M").to_string()
}

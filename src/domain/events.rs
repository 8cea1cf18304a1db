use crate::domain::{message::ChatMessage, user::User};

/// Events consumed by the shell loop: terminal input plus everything the
/// server pushes at us.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Tick,
    QuitRequested,
    InputKey(KeyInput),
    Server(ServerEvent),
}

/// Inbound server events, already decoded from the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServerEvent {
    /// Full replacement of the online roster, in server order.
    Roster(Vec<String>),
    Joined { username: String },
    Left { username: String },
    Message(ChatMessage),
    /// One-shot user directory payload fetched at startup. An empty list
    /// means the directory was unavailable.
    Directory(Vec<User>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyInput {
    pub key: String,
    pub ctrl: bool,
}

impl KeyInput {
    pub fn new(key: impl Into<String>, ctrl: bool) -> Self {
        Self {
            key: key.into(),
            ctrl,
        }
    }

    /// True for keys that type a character into a composer.
    pub fn is_text(&self) -> bool {
        !self.ctrl && self.key.chars().count() == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_character_key_is_text() {
        assert!(KeyInput::new("a", false).is_text());
        assert!(KeyInput::new("ф", false).is_text());
    }

    #[test]
    fn named_and_control_keys_are_not_text() {
        assert!(!KeyInput::new("enter", false).is_text());
        assert!(!KeyInput::new("a", true).is_text());
    }
}

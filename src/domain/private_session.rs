//! The private-conversation state machine: no session, or exactly one peer.

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PrivateSession {
    #[default]
    Idle,
    Open {
        peer: String,
    },
}

impl PrivateSession {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    pub fn peer(&self) -> Option<&str> {
        match self {
            Self::Idle => None,
            Self::Open { peer } => Some(peer),
        }
    }

    /// Opens a session with `peer`, replacing any session already open.
    pub fn open(&mut self, peer: impl Into<String>) {
        *self = Self::Open { peer: peer.into() };
    }

    pub fn close(&mut self) {
        *self = Self::Idle;
    }
}

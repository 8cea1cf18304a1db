//! Conversation views: the shared public transcript and the single private
//! panel layered over it.

use crate::domain::{private_session::PrivateSession, transcript::TranscriptLine};

/// State owned by the conversation router. Only the router transitions the
/// session; the views are append-only between transitions.
#[derive(Debug, Default)]
pub struct ConversationState {
    session: PrivateSession,
    public_log: Vec<TranscriptLine>,
    private_log: Vec<TranscriptLine>,
}

impl ConversationState {
    pub fn session(&self) -> &PrivateSession {
        &self.session
    }

    pub fn public_log(&self) -> &[TranscriptLine] {
        &self.public_log
    }

    pub fn private_log(&self) -> &[TranscriptLine] {
        &self.private_log
    }

    /// Opens (or replaces) the private session. The displayed history of a
    /// replaced session is discarded, not archived.
    pub fn open_session(&mut self, peer: impl Into<String>) {
        self.session.open(peer);
        self.private_log.clear();
    }

    pub fn close_session(&mut self) {
        self.session.close();
        self.private_log.clear();
    }

    pub fn push_public(&mut self, line: TranscriptLine) {
        self.public_log.push(line);
    }

    pub fn push_private(&mut self, line: TranscriptLine) {
        self.private_log.push(line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(label: &str) -> TranscriptLine {
        TranscriptLine::new(label, "text", "10:00")
    }

    #[test]
    fn opening_a_session_clears_the_private_panel() {
        let mut state = ConversationState::default();
        state.open_session("bob");
        state.push_private(line("bob"));

        state.open_session("carol");

        assert_eq!(state.session().peer(), Some("carol"));
        assert!(state.private_log().is_empty());
    }

    #[test]
    fn closing_discards_displayed_history() {
        let mut state = ConversationState::default();
        state.open_session("bob");
        state.push_private(line("bob"));

        state.close_session();

        assert!(!state.session().is_open());
        assert!(state.private_log().is_empty());
    }

    #[test]
    fn public_log_is_independent_of_session_transitions() {
        let mut state = ConversationState::default();
        state.push_public(line("bob"));
        state.open_session("carol");
        state.close_session();

        assert_eq!(state.public_log().len(), 1);
    }
}

use crate::domain::{
    composer::ComposerState, conversation::ConversationState, notice::NoticeBoard,
    presence::PresenceRoster,
};

/// Which pane receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    PublicComposer,
    UserList,
    PrivateComposer,
}

/// Everything the view renders and the orchestrator mutates.
#[derive(Debug)]
pub struct ChatState {
    running: bool,
    focus: Focus,
    conversation: ConversationState,
    presence: PresenceRoster,
    notices: NoticeBoard,
    public_composer: ComposerState,
    private_composer: ComposerState,
}

impl Default for ChatState {
    fn default() -> Self {
        Self {
            running: true,
            focus: Focus::default(),
            conversation: ConversationState::default(),
            presence: PresenceRoster::default(),
            notices: NoticeBoard::default(),
            public_composer: ComposerState::default(),
            private_composer: ComposerState::default(),
        }
    }
}

impl ChatState {
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
    }

    /// Cycles focus across the visible panes. The private composer is only
    /// part of the cycle while a session is open.
    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::PublicComposer => Focus::UserList,
            Focus::UserList if self.conversation.session().is_open() => Focus::PrivateComposer,
            Focus::UserList => Focus::PublicComposer,
            Focus::PrivateComposer => Focus::PublicComposer,
        };
    }

    pub fn conversation(&self) -> &ConversationState {
        &self.conversation
    }

    pub fn conversation_mut(&mut self) -> &mut ConversationState {
        &mut self.conversation
    }

    pub fn presence(&self) -> &PresenceRoster {
        &self.presence
    }

    pub fn presence_mut(&mut self) -> &mut PresenceRoster {
        &mut self.presence
    }

    pub fn notices(&self) -> &NoticeBoard {
        &self.notices
    }

    pub fn notices_mut(&mut self) -> &mut NoticeBoard {
        &mut self.notices
    }

    pub fn public_composer(&self) -> &ComposerState {
        &self.public_composer
    }

    pub fn public_composer_mut(&mut self) -> &mut ComposerState {
        &mut self.public_composer
    }

    pub fn private_composer(&self) -> &ComposerState {
        &self.private_composer
    }

    pub fn private_composer_mut(&mut self) -> &mut ComposerState {
        &mut self.private_composer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_running_with_public_composer_focused() {
        let state = ChatState::default();

        assert!(state.is_running());
        assert_eq!(state.focus(), Focus::PublicComposer);
    }

    #[test]
    fn focus_cycle_skips_private_composer_when_idle() {
        let mut state = ChatState::default();

        state.cycle_focus();
        assert_eq!(state.focus(), Focus::UserList);

        state.cycle_focus();
        assert_eq!(state.focus(), Focus::PublicComposer);
    }

    #[test]
    fn focus_cycle_includes_private_composer_when_session_open() {
        let mut state = ChatState::default();
        state.conversation_mut().open_session("bob");

        state.cycle_focus();
        state.cycle_focus();
        assert_eq!(state.focus(), Focus::PrivateComposer);

        state.cycle_focus();
        assert_eq!(state.focus(), Focus::PublicComposer);
    }
}

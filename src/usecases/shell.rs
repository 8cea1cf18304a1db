//! The chat shell orchestrator: one handler per event kind, driving the
//! identity index, the presence roster, and the conversation router.

use std::time::Instant;

use anyhow::Result;

use crate::{
    domain::{
        events::{AppEvent, KeyInput, ServerEvent},
        message::{local_clock_label, ChatMessage},
        notice::NoticeLevel,
        shell_state::{ChatState, Focus},
        user::{LocalUser, User},
    },
    usecases::{
        contracts::{ChatOrchestrator, OutboundSender},
        identity::IdentityIndex,
        router::{self, PrivateSendOutcome, PublicSendOutcome, SelectionResult},
    },
};

pub struct ChatShell<S: OutboundSender> {
    state: ChatState,
    identity: IdentityIndex,
    local_user: LocalUser,
    sender: S,
}

impl<S: OutboundSender> ChatShell<S> {
    pub fn new(local_user: LocalUser, sender: S) -> Self {
        Self {
            state: ChatState::default(),
            identity: IdentityIndex::default(),
            local_user,
            sender,
        }
    }

    #[cfg(test)]
    pub fn sender(&self) -> &S {
        &self.sender
    }

    fn handle_server_event(&mut self, event: ServerEvent) {
        match event {
            ServerEvent::Roster(usernames) => {
                self.state.presence_mut().apply_roster(usernames);
            }
            ServerEvent::Joined { username } => {
                self.notify(format!("{username} joined the chat"), NoticeLevel::Info);
            }
            ServerEvent::Left { username } => {
                self.notify(format!("{username} left the chat"), NoticeLevel::Warning);
            }
            ServerEvent::Directory(users) => self.apply_directory(users),
            ServerEvent::Message(message) => self.record_incoming(&message),
        }
    }

    fn apply_directory(&mut self, users: Vec<User>) {
        self.identity.rebuild(&users);
        self.local_user
            .set_id(self.identity.resolve(self.local_user.username()));

        if self.local_user.id().is_none() {
            tracing::warn!(
                username = self.local_user.username(),
                "local user missing from directory payload"
            );
        }
    }

    fn record_incoming(&mut self, message: &ChatMessage) {
        router::record_incoming(
            self.state.conversation_mut(),
            message,
            self.local_user.id(),
            &local_clock_label(),
        );
    }

    fn handle_key(&mut self, key: KeyInput) {
        if key.key == "tab" {
            self.state.cycle_focus();
            return;
        }

        match self.state.focus() {
            Focus::UserList => self.handle_user_list_key(&key),
            Focus::PublicComposer => self.handle_public_composer_key(&key),
            Focus::PrivateComposer => self.handle_private_composer_key(&key),
        }
    }

    fn handle_user_list_key(&mut self, key: &KeyInput) {
        match key.key.as_str() {
            "j" | "down" => self.state.presence_mut().select_next(),
            "k" | "up" => self.state.presence_mut().select_previous(),
            "enter" => self.select_highlighted_user(),
            _ => {}
        }
    }

    fn select_highlighted_user(&mut self) {
        let Some(username) = self.state.presence().selected().map(str::to_owned) else {
            return;
        };

        let result = router::select_for_private(
            self.state.conversation_mut(),
            &self.identity,
            &self.local_user,
            &username,
        );

        match result {
            SelectionResult::Accepted(peer) => {
                tracing::debug!(peer = %peer, "private session opened");
                self.state.set_focus(Focus::PrivateComposer);
            }
            SelectionResult::RejectedSelf => {
                self.notify("You can't open a chat with yourself", NoticeLevel::Error);
            }
        }
    }

    fn handle_public_composer_key(&mut self, key: &KeyInput) {
        if key.key == "enter" {
            self.submit_public();
            return;
        }
        edit_composer(self.state.public_composer_mut(), key);
    }

    fn handle_private_composer_key(&mut self, key: &KeyInput) {
        match key.key.as_str() {
            "enter" => self.submit_private(),
            "esc" => {
                self.state.conversation_mut().close_session();
                self.state.set_focus(Focus::PublicComposer);
            }
            _ => edit_composer(self.state.private_composer_mut(), key),
        }
    }

    fn submit_public(&mut self) {
        let text = self.state.public_composer().text().to_owned();
        match router::submit_public(&mut self.sender, &text) {
            Ok(PublicSendOutcome::Dispatched) => self.state.public_composer_mut().clear(),
            Ok(PublicSendOutcome::EmptyInput) => {}
            Err(error) => self.report_send_failure(error),
        }
    }

    fn submit_private(&mut self) {
        let text = self.state.private_composer().text().to_owned();
        let outcome = router::submit_private(
            self.state.conversation_mut(),
            &self.identity,
            &self.local_user,
            &mut self.sender,
            &text,
            &local_clock_label(),
        );

        match outcome {
            Ok(PrivateSendOutcome::Sent { .. }) => self.state.private_composer_mut().clear(),
            Ok(PrivateSendOutcome::EmptyInput) | Ok(PrivateSendOutcome::NoSession) => {}
            Ok(PrivateSendOutcome::UnresolvedPeer { peer }) => {
                // Input stays put so the user can retry after the directory
                // becomes available.
                self.notify(
                    format!("Could not resolve {peer}'s user id"),
                    NoticeLevel::Error,
                );
            }
            Ok(PrivateSendOutcome::SelfAddressed) => {
                self.state.private_composer_mut().clear();
                self.notify("You can't message yourself", NoticeLevel::Error);
            }
            Err(error) => self.report_send_failure(error),
        }
    }

    fn report_send_failure(&mut self, error: anyhow::Error) {
        tracing::warn!(error = %error, "outbound dispatch failed");
        self.notify("Could not reach the server", NoticeLevel::Error);
    }

    fn notify(&mut self, text: impl Into<String>, level: NoticeLevel) {
        self.state.notices_mut().push(text, level, Instant::now());
    }
}

impl<S: OutboundSender> ChatOrchestrator for ChatShell<S> {
    fn state(&self) -> &ChatState {
        &self.state
    }

    fn handle_event(&mut self, event: AppEvent) -> Result<()> {
        match event {
            AppEvent::Tick => self.state.notices_mut().prune(Instant::now()),
            AppEvent::QuitRequested => self.state.stop(),
            AppEvent::InputKey(key) => self.handle_key(key),
            AppEvent::Server(event) => self.handle_server_event(event),
        }

        Ok(())
    }
}

fn edit_composer(composer: &mut crate::domain::composer::ComposerState, key: &KeyInput) {
    match key.key.as_str() {
        "backspace" => composer.delete_char_before(),
        "left" => composer.move_cursor_left(),
        "right" => composer.move_cursor_right(),
        _ => {
            if key.is_text() {
                if let Some(ch) = key.key.chars().next() {
                    composer.insert_char(ch);
                }
            }
        }
    }
}

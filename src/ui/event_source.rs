use std::{sync::mpsc::Receiver, time::Duration};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

use crate::{
    domain::events::{AppEvent, KeyInput, ServerEvent},
    usecases::contracts::AppEventSource,
};

const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Merges terminal input with the server event channel. Server events are
/// drained first so messages render in delivery order even while typing.
pub struct CrosstermEventSource {
    server_rx: Receiver<ServerEvent>,
}

impl CrosstermEventSource {
    pub fn new(server_rx: Receiver<ServerEvent>) -> Self {
        Self { server_rx }
    }
}

impl AppEventSource for CrosstermEventSource {
    fn next_event(&mut self) -> Result<Option<AppEvent>> {
        if let Ok(server_event) = self.server_rx.try_recv() {
            return Ok(Some(AppEvent::Server(server_event)));
        }

        if !event::poll(EVENT_POLL_TIMEOUT)? {
            return Ok(Some(AppEvent::Tick));
        }

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                return Ok(None);
            }
            return Ok(map_key(key.code, key.modifiers));
        }

        Ok(None)
    }
}

fn map_key(code: KeyCode, modifiers: KeyModifiers) -> Option<AppEvent> {
    let ctrl = modifiers.contains(KeyModifiers::CONTROL);

    if ctrl && matches!(code, KeyCode::Char('c') | KeyCode::Char('q')) {
        return Some(AppEvent::QuitRequested);
    }

    let key = match code {
        KeyCode::Enter => "enter".to_owned(),
        KeyCode::Backspace => "backspace".to_owned(),
        KeyCode::Tab => "tab".to_owned(),
        KeyCode::Esc => "esc".to_owned(),
        KeyCode::Up => "up".to_owned(),
        KeyCode::Down => "down".to_owned(),
        KeyCode::Left => "left".to_owned(),
        KeyCode::Right => "right".to_owned(),
        KeyCode::Char(ch) => ch.to_string(),
        _ => return None,
    };

    Some(AppEvent::InputKey(KeyInput::new(key, ctrl)))
}

#[cfg(test)]
pub struct MockEventSource {
    queue: std::collections::VecDeque<AppEvent>,
}

#[cfg(test)]
impl MockEventSource {
    pub fn from(events: Vec<AppEvent>) -> Self {
        Self {
            queue: events.into(),
        }
    }
}

#[cfg(test)]
impl AppEventSource for MockEventSource {
    fn next_event(&mut self) -> Result<Option<AppEvent>> {
        Ok(self.queue.pop_front())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ctrl_c_and_ctrl_q_request_quit() {
        assert_eq!(
            map_key(KeyCode::Char('c'), KeyModifiers::CONTROL),
            Some(AppEvent::QuitRequested)
        );
        assert_eq!(
            map_key(KeyCode::Char('q'), KeyModifiers::CONTROL),
            Some(AppEvent::QuitRequested)
        );
    }

    #[test]
    fn plain_q_is_ordinary_text() {
        assert_eq!(
            map_key(KeyCode::Char('q'), KeyModifiers::NONE),
            Some(AppEvent::InputKey(KeyInput::new("q", false)))
        );
    }

    #[test]
    fn named_keys_map_to_their_labels() {
        assert_eq!(
            map_key(KeyCode::Enter, KeyModifiers::NONE),
            Some(AppEvent::InputKey(KeyInput::new("enter", false)))
        );
        assert_eq!(
            map_key(KeyCode::Esc, KeyModifiers::NONE),
            Some(AppEvent::InputKey(KeyInput::new("esc", false)))
        );
    }

    #[test]
    fn unmapped_keys_are_dropped() {
        assert_eq!(map_key(KeyCode::F(5), KeyModifiers::NONE), None);
    }

    #[test]
    fn server_events_take_priority_over_terminal_polling() {
        let (tx, rx) = std::sync::mpsc::channel();
        tx.send(ServerEvent::Roster(vec!["alice".to_owned()]))
            .expect("channel must accept the event");

        let mut source = CrosstermEventSource::new(rx);
        let event = source.next_event().expect("must read server event");

        assert_eq!(
            event,
            Some(AppEvent::Server(ServerEvent::Roster(vec![
                "alice".to_owned()
            ])))
        );
    }
}

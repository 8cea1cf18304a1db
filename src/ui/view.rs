use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::domain::{
    notice::NoticeLevel,
    presence::PresenceRoster,
    shell_state::{ChatState, Focus},
    transcript::TranscriptLine,
};

use super::{composer::render_composer, styles};

const HINT_LINE: &str = "Tab switch | Enter send/select | Esc close private | Ctrl+C quit";

pub fn render(frame: &mut Frame<'_>, state: &ChatState) {
    let [content_area, status_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .areas(frame.area());

    let [conversation_area, users_area] = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(75), Constraint::Percentage(25)])
        .areas(content_area);

    render_conversation_column(frame, conversation_area, state);
    render_user_list(
        frame,
        users_area,
        state.presence(),
        state.focus() == Focus::UserList,
    );
    render_status_line(frame, status_area, state);
}

fn render_conversation_column(frame: &mut Frame<'_>, area: Rect, state: &ChatState) {
    let session = state.conversation().session();

    if let Some(peer) = session.peer() {
        let [public_area, public_input_area, private_area] = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(1),
                Constraint::Length(3),
                Constraint::Percentage(45),
            ])
            .areas(area);

        render_transcript(
            frame,
            public_area,
            "Chat",
            state.conversation().public_log(),
            false,
        );
        render_composer(
            frame,
            public_input_area,
            "Message",
            state.public_composer(),
            state.focus() == Focus::PublicComposer,
        );
        render_private_panel(frame, private_area, peer, state);
    } else {
        let [public_area, public_input_area] = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(3)])
            .areas(area);

        render_transcript(
            frame,
            public_area,
            "Chat",
            state.conversation().public_log(),
            false,
        );
        render_composer(
            frame,
            public_input_area,
            "Message",
            state.public_composer(),
            state.focus() == Focus::PublicComposer,
        );
    }
}

fn render_private_panel(frame: &mut Frame<'_>, area: Rect, peer: &str, state: &ChatState) {
    let [log_area, input_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(3)])
        .areas(area);

    let active = state.focus() == Focus::PrivateComposer;
    render_transcript(
        frame,
        log_area,
        &format!("Private: {peer}"),
        state.conversation().private_log(),
        active,
    );
    render_composer(
        frame,
        input_area,
        "Private message",
        state.private_composer(),
        active,
    );
}

fn render_transcript(
    frame: &mut Frame<'_>,
    area: Rect,
    title: &str,
    lines: &[TranscriptLine],
    active: bool,
) {
    let border_style = if active {
        styles::active_panel_border_style()
    } else {
        styles::inactive_panel_border_style()
    };

    let visible = area.height.saturating_sub(2) as usize;
    let items: Vec<ListItem<'_>> = tail(lines, visible).iter().map(transcript_item).collect();

    let list = List::new(items).block(
        Block::default()
            .title(title.to_owned())
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    frame.render_widget(list, area);
}

fn render_user_list(frame: &mut Frame<'_>, area: Rect, presence: &PresenceRoster, active: bool) {
    let border_style = if active {
        styles::active_panel_border_style()
    } else {
        styles::inactive_panel_border_style()
    };

    let items: Vec<ListItem<'_>> = presence
        .usernames()
        .iter()
        .map(|name| ListItem::new(name.clone()))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(format!("Online ({})", presence.usernames().len()))
                .borders(Borders::ALL)
                .border_style(border_style),
        )
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    if active {
        list_state.select(presence.cursor());
    }
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn render_status_line(frame: &mut Frame<'_>, area: Rect, state: &ChatState) {
    let (text, level) = status_content(state);
    let style = match level {
        Some(level) => styles::notice_style(level),
        None => styles::hint_style(),
    };
    frame.render_widget(Paragraph::new(text).style(style), area);
}

/// The bottom line shows the newest active notice, falling back to the key
/// hints when nothing is pending.
fn status_content(state: &ChatState) -> (String, Option<NoticeLevel>) {
    match state.notices().latest() {
        Some(notice) => (notice.text.clone(), Some(notice.level)),
        None => (HINT_LINE.to_owned(), None),
    }
}

fn transcript_item(line: &TranscriptLine) -> ListItem<'static> {
    ListItem::new(Line::from(vec![
        Span::styled(line.label.clone(), styles::sender_style()),
        Span::styled(format!(": {}", line.content), styles::message_text_style()),
        Span::styled(format!(" ({})", line.clock), styles::clock_style()),
    ]))
}

/// Last `count` lines, so the view sticks to the newest messages.
fn tail(lines: &[TranscriptLine], count: usize) -> &[TranscriptLine] {
    &lines[lines.len().saturating_sub(count)..]
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use super::*;

    fn line(label: &str) -> TranscriptLine {
        TranscriptLine::new(label, "text", "10:00")
    }

    #[test]
    fn tail_keeps_only_the_newest_lines() {
        let lines = vec![line("a"), line("b"), line("c")];

        let visible = tail(&lines, 2);

        assert_eq!(visible.len(), 2);
        assert_eq!(visible[0].label, "b");
    }

    #[test]
    fn tail_of_a_short_transcript_is_the_whole_transcript() {
        let lines = vec![line("a")];

        assert_eq!(tail(&lines, 10).len(), 1);
    }

    #[test]
    fn status_line_prefers_the_latest_notice() {
        let mut state = ChatState::default();
        state
            .notices_mut()
            .push("bob joined the chat", NoticeLevel::Info, Instant::now());

        let (text, level) = status_content(&state);

        assert_eq!(text, "bob joined the chat");
        assert_eq!(level, Some(NoticeLevel::Info));
    }

    #[test]
    fn status_line_falls_back_to_key_hints() {
        let state = ChatState::default();

        let (text, level) = status_content(&state);

        assert_eq!(text, HINT_LINE);
        assert_eq!(level, None);
    }
}

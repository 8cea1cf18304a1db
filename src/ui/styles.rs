//! Style definitions for the UI components.

use ratatui::style::{Color, Modifier, Style};

use crate::domain::notice::NoticeLevel;

/// Border of the pane that currently has keyboard focus.
pub fn active_panel_border_style() -> Style {
    Style::default().fg(Color::Cyan)
}

pub fn inactive_panel_border_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Style for the sender label of a transcript line.
pub fn sender_style() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

/// Style for the hour:minute suffix.
pub fn clock_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

pub fn message_text_style() -> Style {
    Style::default().fg(Color::White)
}

/// Style for the bottom status line when it shows a key hint.
pub fn hint_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

pub fn notice_style(level: NoticeLevel) -> Style {
    let color = match level {
        NoticeLevel::Info => Color::Green,
        NoticeLevel::Warning => Color::Yellow,
        NoticeLevel::Error => Color::Red,
    };
    Style::default().fg(color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sender_style_is_bold_white() {
        let style = sender_style();
        assert_eq!(style.fg, Some(Color::White));
        assert!(style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn notice_levels_map_to_distinct_colors() {
        assert_eq!(notice_style(NoticeLevel::Info).fg, Some(Color::Green));
        assert_eq!(notice_style(NoticeLevel::Warning).fg, Some(Color::Yellow));
        assert_eq!(notice_style(NoticeLevel::Error).fg, Some(Color::Red));
    }

    #[test]
    fn active_border_differs_from_inactive() {
        assert_ne!(active_panel_border_style(), inactive_panel_border_style());
    }
}

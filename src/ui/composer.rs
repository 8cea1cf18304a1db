//! Rendering for the message composition fields.

use ratatui::{
    layout::Rect,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::domain::composer::ComposerState;

use super::styles;

pub fn render_composer(
    frame: &mut Frame<'_>,
    area: Rect,
    title: &str,
    state: &ComposerState,
    active: bool,
) {
    let border_style = if active {
        styles::active_panel_border_style()
    } else {
        styles::inactive_panel_border_style()
    };

    let field = Paragraph::new(state.text()).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    frame.render_widget(field, area);

    if active {
        let cursor_x = area.x + 1 + cursor_offset(state) as u16;
        frame.set_cursor_position((cursor_x.min(area.x + area.width.saturating_sub(2)), area.y + 1));
    }
}

/// Display-cell offset of the cursor, accounting for wide characters.
fn cursor_offset(state: &ComposerState) -> usize {
    UnicodeWidthStr::width(state.prefix())
}

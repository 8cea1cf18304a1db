//! State for a message composition field.

/// Upper bound on composed message length, in characters.
const MAX_INPUT_LENGTH: usize = 4096;

/// Text plus a character-indexed cursor. Both the public and the private
/// composer are instances of this.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ComposerState {
    text: String,
    cursor: usize,
}

impl ComposerState {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Text before the cursor, for cursor placement in the view.
    pub fn prefix(&self) -> &str {
        &self.text[..self.byte_index(self.cursor)]
    }

    /// Inserts a character at the cursor. Returns false once the length cap
    /// is reached.
    pub fn insert_char(&mut self, ch: char) -> bool {
        if self.text.chars().count() >= MAX_INPUT_LENGTH {
            return false;
        }
        let at = self.byte_index(self.cursor);
        self.text.insert(at, ch);
        self.cursor += 1;
        true
    }

    /// Removes the character before the cursor (backspace).
    pub fn delete_char_before(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let from = self.byte_index(self.cursor);
        let to = self.byte_index(self.cursor + 1);
        self.text.drain(from..to);
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor < self.text.chars().count() {
            self.cursor += 1;
        }
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map(|(at, _)| at)
            .unwrap_or(self.text.len())
    }
}

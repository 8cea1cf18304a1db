/// One rendered line of a conversation view.
///
/// The label already carries any direction annotation ("bob → you",
/// "you → bob"); the widgets only lay the parts out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptLine {
    pub label: String,
    pub content: String,
    pub clock: String,
}

impl TranscriptLine {
    pub fn new(
        label: impl Into<String>,
        content: impl Into<String>,
        clock: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            content: content.into(),
            clock: clock.into(),
        }
    }

    /// Plain-text form used by the transcript widgets and tests.
    pub fn display(&self) -> String {
        format!("{}: {} ({})", self.label, self.content, self.clock)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_places_clock_after_content() {
        let line = TranscriptLine::new("bob → you", "hey", "10:05");

        assert_eq!(line.display(), "bob → you: hey (10:05)");
    }
}

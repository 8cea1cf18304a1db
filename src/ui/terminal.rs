//! Raw-mode terminal ownership for the chat shell.

use std::io::{self, Stdout};

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};

type ChatBackend = CrosstermBackend<Stdout>;

/// Holds the terminal in raw mode on the alternate screen while the shell
/// runs. Dropping the guard restores the caller's screen and cursor, on the
/// error path included.
pub struct ChatTerminal {
    inner: Terminal<ChatBackend>,
}

impl ChatTerminal {
    pub fn acquire() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;

        let mut inner = Terminal::new(CrosstermBackend::new(stdout))?;
        inner.clear()?;

        Ok(Self { inner })
    }

    pub fn draw_frame<F>(&mut self, render: F) -> Result<()>
    where
        F: FnOnce(&mut Frame<'_>),
    {
        self.inner.draw(render)?;
        Ok(())
    }
}

impl Drop for ChatTerminal {
    fn drop(&mut self) {
        let _ = execute!(self.inner.backend_mut(), LeaveAlternateScreen);
        let _ = disable_raw_mode();
        let _ = self.inner.show_cursor();
    }
}

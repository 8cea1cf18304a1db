//! UI layer: terminal rendering and input handling.

mod composer;
mod event_source;
pub mod shell;
mod styles;
mod terminal;
mod view;

pub use event_source::CrosstermEventSource;

/// Returns the UI module name for smoke checks.
pub fn module_name() -> &'static str {
    "ui"
}

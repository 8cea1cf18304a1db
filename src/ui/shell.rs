use anyhow::Result;

use crate::usecases::{
    context::AppContext,
    contracts::{AppEventSource, ChatOrchestrator},
};

use super::{terminal::ChatTerminal, view};

pub fn start(
    context: &AppContext,
    event_source: &mut dyn AppEventSource,
    orchestrator: &mut dyn ChatOrchestrator,
) -> Result<()> {
    tracing::info!(
        log_level = %context.config.logging.level,
        server = %context.config.server.base_url,
        username = %context.config.server.username,
        "starting chat shell"
    );

    let mut terminal = ChatTerminal::acquire()?;

    while orchestrator.state().is_running() {
        terminal.draw_frame(|frame| view::render(frame, orchestrator.state()))?;

        if let Some(event) = event_source.next_event()? {
            orchestrator.handle_event(event)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{events::AppEvent, user::LocalUser},
        test_support::RecordingSender,
        ui::event_source::MockEventSource,
        usecases::shell::ChatShell,
    };

    #[test]
    fn mock_source_produces_quit_event() {
        let mut source = MockEventSource::from(vec![AppEvent::QuitRequested]);
        let event = source.next_event().expect("must read mock event");

        assert_eq!(event, Some(AppEvent::QuitRequested));
    }

    #[test]
    fn orchestrator_stops_on_quit_from_source() {
        let mut source = MockEventSource::from(vec![AppEvent::QuitRequested]);
        let mut orchestrator = ChatShell::new(LocalUser::new("alice"), RecordingSender::default());

        if let Some(event) = source.next_event().expect("must read mock event") {
            orchestrator
                .handle_event(event)
                .expect("must handle quit event");
        }

        assert!(!orchestrator.state().is_running());
    }
}

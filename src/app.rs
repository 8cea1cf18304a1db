use anyhow::Result;

use crate::{
    cli::{Cli, Command},
    domain::{self, user::LocalUser},
    infra,
    server::{self, connection::ServerConnection},
    ui,
    usecases::{self, bootstrap, shell::ChatShell},
};

pub fn run(cli: Cli) -> Result<()> {
    match cli.command_or_default() {
        Command::Run => {
            let context = bootstrap::bootstrap(cli.config.as_deref())?;

            tracing::debug!(
                ui = ui::module_name(),
                domain = domain::module_name(),
                server = server::module_name(),
                usecases = usecases::module_name(),
                infra = infra::module_name(),
                "module boundaries loaded"
            );

            let (connection, server_events) = ServerConnection::start(&context.config.server);
            let mut event_source = ui::CrosstermEventSource::new(server_events);
            let mut shell = ChatShell::new(
                LocalUser::new(context.config.server.username.clone()),
                connection,
            );

            ui::shell::start(&context, &mut event_source, &mut shell)
        }
    }
}

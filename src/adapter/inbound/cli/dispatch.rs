//! Routes a parsed command line to its handler.

use crate::adapter::inbound::cli::command::{Cli, Commands, ConfigCommand};
use crate::adapter::inbound::cli::session::Session;
use crate::adapter::inbound::cli::{admin, board, config, corridors, data, output, paths, train};
use crate::error::Result;

/// Run a parsed command line.
pub async fn run(cli: Cli) -> Result<()> {
    output::configure(output::OutputConfig::new(cli.json, cli.quiet, cli.verbose));

    // `config init` must work before any config file exists.
    if let Commands::Config(ConfigCommand::Init(args)) = &cli.command {
        let path = cli.config.clone().unwrap_or_else(paths::default_config);
        return config::execute_init(&path, args.force);
    }

    let session = Session::start(cli.config.as_deref())?;
    match &cli.command {
        Commands::Board(args) => board::execute(&session, args).await,
        Commands::Admin => admin::execute(&session),
        Commands::Train(command) => train::execute(&session, command),
        Commands::Data(command) => data::execute(&session, command),
        Commands::Corridors => corridors::list(&session.config.corridors),
        Commands::Config(ConfigCommand::Show) => {
            config::execute_show(&session.config, &session.config_path)
        }
        Commands::Config(ConfigCommand::Validate) => {
            config::execute_validate(&session.config_path)
        }
        Commands::Config(ConfigCommand::Init(_)) => Ok(()),
    }
}

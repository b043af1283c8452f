//! Prism CLI entry point.

use clap::Parser;

use prism::cli::{commands, handle_error, Cli, Commands};
use prism::infrastructure::config::ConfigLoader;
use prism::infrastructure::logging::{LogConfig, LoggerImpl};

fn main() {
    let cli = Cli::parse();

    let config = match ConfigLoader::load_with(cli.config.as_deref()) {
        Ok(config) => config,
        Err(err) => handle_error(err, cli.json),
    };

    // Keep the guard alive so buffered file logs are flushed on exit
    let _logger = match LoggerImpl::init(&LogConfig::from(&config.logging)) {
        Ok(logger) => logger,
        Err(err) => handle_error(err, cli.json),
    };

    let result = match cli.command {
        Commands::Score(args) => commands::score::execute(args, &config, cli.json),
        Commands::Baselines(args) => commands::baselines::execute(args, &config, cli.json),
        Commands::Validate(args) => commands::validate::execute(args, &config, cli.json),
        Commands::Archetypes(args) => commands::archetypes::execute(args, cli.json),
        Commands::Questions(args) => commands::questions::execute(args, &config, cli.json),
    };

    if let Err(err) = result {
        handle_error(err, cli.json);
    }
}

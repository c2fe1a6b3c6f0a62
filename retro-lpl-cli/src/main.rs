//! retro-lpl CLI
//!
//! Generates RetroArch playlists for the ROM collections listed in the
//! config file.

mod cli_types;
mod commands;
mod error;
mod logger;

use clap::Parser;

use retro_lpl_lib::settings::resolve_config_path;

use cli_types::{Cli, Commands, ConfigAction};
use error::CliError;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logger::init(cli.quiet, cli.verbose, cli.logfile.as_deref()) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    if let Err(e) = run(cli) {
        log::error!("{e}");
        log::logger().flush();
        std::process::exit(1);
    }
    log::logger().flush();
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config_path = resolve_config_path(cli.config);

    match cli.command.unwrap_or(Commands::Generate(Default::default())) {
        Commands::Generate(args) => commands::generate::run_generate(&config_path, args),
        Commands::Tree { root, output } => commands::tree::run_tree(&config_path, root, &output),
        Commands::Config { action } => match action {
            ConfigAction::Path => {
                commands::config::run_config_path(&config_path);
                Ok(())
            }
            ConfigAction::Show => commands::config::run_config_show(&config_path),
        },
    }
}

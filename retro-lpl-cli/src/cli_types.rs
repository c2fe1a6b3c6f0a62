//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "retro-lpl")]
#[command(about = "Generate RetroArch playlists from ROM folders", long_about = None)]
pub(crate) struct Cli {
    /// Collection config file (defaults to ~/.config/retro-lpl/collections.toml,
    /// then ./collections.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long, global = true)]
    pub logfile: Option<PathBuf>,

    /// Defaults to `generate` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Arguments for playlist generation.
#[derive(Args, Clone, Debug, Default)]
pub(crate) struct GenerateArgs {
    /// Write portable paths (forward slashes, Lakka mount points) for every collection
    #[arg(short, long)]
    pub portable: bool,

    /// Exit immediately instead of waiting for ENTER
    #[arg(long)]
    pub no_pause: bool,

    /// Only generate these collections (comma-separated names)
    #[arg(long, value_delimiter = ',')]
    pub only: Option<Vec<String>>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Generate playlists for all configured collections
    Generate(GenerateArgs),

    /// Write an indented listing of a ROM directory tree
    Tree {
        /// Root directory (defaults to `tree_root` from the config)
        root: Option<PathBuf>,

        /// Output file
        #[arg(short, long, default_value = "ROMs list.txt")]
        output: PathBuf,
    },

    /// Inspect the collection configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Print the config file path that would be used
    Path,

    /// List the configured collections
    Show,
}

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Meeting summary generator: turns a meeting transcript into a structured
/// markdown summary using an AI command-line tool.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None, args_conflicts_with_subcommands = true)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub run: RunArgs,

    /// Config file (default: first settings.toml found in ., the user config dir, /etc/meetsum)
    #[arg(long, global = true, env = "MEETSUM_CONFIG")]
    pub config: Option<PathBuf>,

    /// Run without the spinner and log at debug level
    #[arg(long, global = true)]
    pub trace: bool,
}

/// Arguments of the default summary command.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct RunArgs {
    /// Meeting directory (prompted for when omitted)
    pub meeting_dir: Option<String>,

    /// Your name; summaries are written from your perspective
    #[arg(long, env = "MEETSUM_USER_NAME")]
    pub name: Option<String>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Check that the AI command and optional tools are installed
    Check,

    /// Validate a meeting directory, or the configured paths when none is given
    Validate {
        /// Meeting directory to inspect
        dir: Option<String>,
    },

    /// Show the effective configuration
    Config {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show version and build information
    Version,
}

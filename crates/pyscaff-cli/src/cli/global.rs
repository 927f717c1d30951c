//! Flags shared by every subcommand, flattened into [`super::Cli`].

use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Clone, Args)]
pub struct GlobalArgs {
    /// Log verbosity. Logs go to stderr and never mix with the success line.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "More log output (-v, -vv, -vvv)",
        long_help = "Log level written to stderr:
    (none)  - warnings and errors
    -v      - each scaffold run
    -vv     - resolved request and rendered entry count
    -vvv    - every directory, write and chmod
RUST_LOG takes precedence when set."
    )]
    pub verbose: u8,

    /// Silence everything on stdout except machine-readable output.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Print nothing but errors"
    )]
    pub quiet: bool,

    /// Plain output. `NO_COLOR` (<https://no-color.org>) sets it too.
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        value_parser = clap::builder::FalseyValueParser::new(),
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// Read settings from this TOML file instead of the platform default.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Use this config file"
    )]
    pub config: Option<PathBuf>,
}

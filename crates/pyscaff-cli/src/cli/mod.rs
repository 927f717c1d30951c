//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "pyscaff",
    bin_name = "pyscaff",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Generate a Python project skeleton",
    long_about = "pyscaff creates a ready-to-use Python project layout: src and \
                  tests packages, docs, configs, data folders, a dev setup script, \
                  and VS Code settings.",
    after_help = "EXAMPLES:\n\
        \x20 pyscaff new demo\n\
        \x20 pyscaff new demo --path ~/code\n\
        \x20 pyscaff new            # prompts for a name\n\
        \x20 pyscaff show --format json",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new project.
    #[command(
        visible_alias = "n",
        about = "Create a new Python project",
        after_help = "EXAMPLES:\n\
            \x20 pyscaff new demo\n\
            \x20 pyscaff new demo --path ./projects --date 2025-08-08\n\
            \x20 pyscaff new demo --dry-run"
    )]
    New(NewArgs),

    /// Show the built-in blueprint.
    #[command(
        visible_alias = "ls",
        about = "Show what a new project contains",
        after_help = "EXAMPLES:\n\
            \x20 pyscaff show\n\
            \x20 pyscaff show --format json"
    )]
    Show(ShowArgs),

    /// Initialise a pyscaff configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 pyscaff init\n\
            \x20 pyscaff --config ./pyscaff.toml init --force"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 pyscaff completions bash > ~/.local/share/bash-completion/completions/pyscaff\n\
            \x20 pyscaff completions zsh  > ~/.zfunc/_pyscaff"
    )]
    Completions(CompletionsArgs),

    /// Inspect the pyscaff configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 pyscaff config get defaults.project_name\n\
            \x20 pyscaff config list"
    )]
    Config(ConfigCommands),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `pyscaff new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Project name, used verbatim as the root directory name. Prompted for
    /// when omitted; an empty answer selects the default name.
    #[arg(value_name = "NAME", help = "Project name (prompted when omitted)")]
    pub name: Option<String>,

    /// Directory to create the project in.
    #[arg(
        short = 'p',
        long = "path",
        value_name = "DIR",
        help = "Directory to create the project in (default: current directory)"
    )]
    pub path: Option<PathBuf>,

    /// Date written to the changelog.
    #[arg(
        long = "date",
        value_name = "YYYY-MM-DD",
        help = "Changelog date (default: today)"
    )]
    pub date: Option<NaiveDate>,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── show ──────────────────────────────────────────────────────────────────────

/// Arguments for `pyscaff show`.
#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "tree",
        help = "Output format"
    )]
    pub format: ShowFormat,
}

/// Output format for the `show` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ShowFormat {
    /// Indented, human-readable listing.
    Tree,
    /// One path per line.
    List,
    /// JSON array.
    Json,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `pyscaff init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `pyscaff completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `pyscaff config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.project_name`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

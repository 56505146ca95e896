//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "strata",
    bin_name = "strata",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Layered module scaffolding",
    long_about = "Strata generates a fixed infrastructure / domain / presentation \
                  directory skeleton for a feature module inside a project's \
                  `modules` directory.",
    after_help = "EXAMPLES:\n\
        \x20 strata new login\n\
        \x20 strata new profile --dir ./app/src\n\
        \x20 strata new cart --dir ./app/src/modules --dry-run\n\
        \x20 strata layers\n\
        \x20 strata completions bash > /usr/share/bash-completion/completions/strata",
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
    /// Generate a new module architecture.
    #[command(
        visible_alias = "n",
        about = "Generate a new module",
        after_help = "EXAMPLES:\n\
            \x20 strata new login                       # ./modules/login\n\
            \x20 strata new login --dir ./lib           # ./lib/modules/login\n\
            \x20 strata new login --dir ./lib/modules   # ./lib/modules/login\n\
            \x20 strata new                             # prompt for the name"
    )]
    New(NewArgs),

    /// Show the fixed module layout.
    #[command(
        visible_alias = "ls",
        about = "Show the module layout",
        after_help = "EXAMPLES:\n\
            \x20 strata layers\n\
            \x20 strata layers domain\n\
            \x20 strata layers ui --format list\n\
            \x20 strata layers --format json"
    )]
    Layers(LayersArgs),

    /// Initialise a Strata configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 strata init           # user config directory\n\
            \x20 strata init --local   # .strata.toml in CWD\n\
            \x20 strata init --force   # overwrite existing config"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 strata completions bash > ~/.local/share/bash-completion/completions/strata\n\
            \x20 strata completions zsh  > ~/.zfunc/_strata\n\
            \x20 strata completions fish > ~/.config/fish/completions/strata.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Strata configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 strata config get defaults.target_dir\n\
            \x20 strata config list\n\
            \x20 strata config path"
    )]
    Config(ConfigCommands),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `strata new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Module name.  Prompted for when omitted in an interactive terminal.
    #[arg(value_name = "NAME", help = "Module name (e.g. login)")]
    pub name: Option<String>,

    /// Directory to create the module in.
    ///
    /// `modules` is appended unless the directory already is a `modules`
    /// directory.
    #[arg(
        short = 'd',
        long = "dir",
        value_name = "DIR",
        help = "Target directory (default: configured target or current directory)"
    )]
    pub dir: Option<PathBuf>,

    /// Preview what would be created without touching the filesystem.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── layers ────────────────────────────────────────────────────────────────────

/// Arguments for `strata layers`.
#[derive(Debug, Args)]
pub struct LayersArgs {
    /// Show only this layer. Accepts `infra` and `ui` as short names.
    #[arg(value_name = "LAYER", help = "Layer to show (default: all)")]
    pub layer: Option<String>,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: LayersFormat,
}

/// Output format for the `layers` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LayersFormat {
    /// Human-readable table.
    Table,
    /// One relative path per line.
    List,
    /// JSON array.
    Json,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `strata init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write `.strata.toml` in the current directory instead of the user
    /// config directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `strata completions`.
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

/// Subcommands for `strata config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.target_dir`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the user configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

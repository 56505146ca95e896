//! Flags shared by every `strata` subcommand.
//!
//! [`GlobalArgs`] is flattened into [`super::Cli`] with `global = true`, so
//! `strata new login -v` and `strata -v new login` mean the same thing.

use clap::{Args, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Repeatable; each occurrence lowers the log threshold one step.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Log more to stderr (repeat for more detail)",
        long_help = "Log more to stderr. Without the flag only warnings and \
                     errors are logged. -v adds the start and end of each \
                     module build, -vv adds the resolved target and planned \
                     directories, -vvv adds every filesystem call. RUST_LOG, \
                     when set, replaces this choice."
    )]
    pub verbose: u8,

    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Print only errors and requested data"
    )]
    pub quiet: bool,

    /// Also set by a non-empty `NO_COLOR` environment variable.
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        help = "Never emit ANSI colors"
    )]
    pub no_color: bool,

    /// Read this file instead of the user and project config files.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Use this config file"
    )]
    pub config: Option<PathBuf>,

    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "How results are printed to stdout"
    )]
    pub output_format: OutputFormat,
}

/// Rendering of stdout. `Auto` becomes `Human` on a terminal and `Plain`
/// otherwise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Auto,
    /// Colored, with status symbols.
    Human,
    /// Status symbols, no color.
    Plain,
    /// One JSON document per command.
    Json,
}

impl OutputFormat {
    /// Parse the `output.format` config value; unknown values yield `None`.
    pub fn from_config(value: &str) -> Option<Self> {
        <Self as ValueEnum>::from_str(value, true).ok()
    }
}

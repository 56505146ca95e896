//! Interactive prompts for values missing from the command line.
//!
//! Prompts only appear when the `interactive` feature is compiled in and both
//! stdin and stderr are terminals; scripted runs get an error instead.

use std::io::{self, IsTerminal as _};
use std::path::PathBuf;

use crate::error::{CliError, CliResult};

/// `true` if the user can be asked for input.
pub fn is_interactive() -> bool {
    cfg!(feature = "interactive") && io::stdin().is_terminal() && io::stderr().is_terminal()
}

/// Ask for the module name.  Blank answers are returned as-is so that name
/// validation reports them.
#[cfg(feature = "interactive")]
pub fn module_name(placeholder: &str) -> CliResult<String> {
    dialoguer::Input::<String>::new()
        .with_prompt(format!("Module Name (e.g. {placeholder})"))
        .allow_empty(true)
        .interact_text()
        .map_err(|e| prompt_failed("module name", e))
}

/// Ask for the directory to generate the module in.
#[cfg(feature = "interactive")]
pub fn target_directory() -> CliResult<PathBuf> {
    dialoguer::Input::<String>::new()
        .with_prompt("Folder to create the module in")
        .default(".".into())
        .interact_text()
        .map(PathBuf::from)
        .map_err(|e| prompt_failed("folder", e))
}

#[cfg(feature = "interactive")]
fn prompt_failed(what: &str, err: dialoguer::Error) -> CliError {
    let dialoguer::Error::IO(source) = err;
    if source.kind() == io::ErrorKind::Interrupted {
        return CliError::Cancelled;
    }
    CliError::IoError {
        message: format!("Failed to read {what} from the terminal"),
        source,
    }
}

#[cfg(not(feature = "interactive"))]
pub fn module_name(_placeholder: &str) -> CliResult<String> {
    Err(CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}

#[cfg(not(feature = "interactive"))]
pub fn target_directory() -> CliResult<PathBuf> {
    Err(CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}

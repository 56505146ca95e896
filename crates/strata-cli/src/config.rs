//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.  Nothing here can
//! alter the module layout itself, only where modules go and how output
//! looks.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `STRATA_<SECTION>__<KEY>`, e.g.
//!    `STRATA_DEFAULTS__TARGET_DIR=/srv/app/lib`
//! 3. `--config FILE` if given, otherwise `.strata.toml` in the current
//!    directory, then the user config file
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

/// File name of the per-project configuration file.
pub const LOCAL_CONFIG_FILE: &str = ".strata.toml";

/// Prefix of configuration environment variables.
const ENV_PREFIX: &str = "STRATA";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default values for new modules.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
    /// Interactive prompt settings.
    pub prompt: PromptConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// Directory used by `strata new` when `--dir` is omitted.
    pub target_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptConfig {
    /// Example name shown in the module-name prompt.
    pub placeholder: String,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            placeholder: "login".into(),
        }
    }
}

impl AppConfig {
    /// Load configuration from files and environment on top of defaults.
    ///
    /// An explicit `config_file` must exist; the implicit locations are
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let toml_file = |path: &Path| File::from(path).format(FileFormat::Toml);
        let mut builder = Config::builder();

        match config_file {
            Some(path) => {
                builder = builder.add_source(toml_file(path.as_path()).required(true));
            }
            None => {
                builder = builder
                    .add_source(toml_file(Self::config_path().as_path()).required(false))
                    .add_source(toml_file(Path::new(LOCAL_CONFIG_FILE)).required(false));
            }
        }

        let settings = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .context("Failed to read configuration sources")?;

        settings
            .try_deserialize()
            .context("Failed to parse configuration")
    }

    /// Path to the user configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.strata.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "strata", "strata")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_no_target_dir() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.defaults.target_dir, None);
    }

    #[test]
    fn default_no_color_is_false() {
        assert!(!AppConfig::default().output.no_color);
    }

    #[test]
    fn default_placeholder_is_login() {
        assert_eq!(AppConfig::default().prompt.placeholder, "login");
    }

    #[test]
    fn explicit_file_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("strata.toml");
        std::fs::write(
            &path,
            "[defaults]\ntarget_dir = \"/srv/app/lib\"\n\n[prompt]\nplaceholder = \"cart\"\n",
        )
        .unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.defaults.target_dir, Some(PathBuf::from("/srv/app/lib")));
        assert_eq!(cfg.prompt.placeholder, "cart");
        // untouched sections keep their defaults
        assert_eq!(cfg.output, OutputConfig::default());
    }

    #[test]
    fn missing_explicit_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        assert!(AppConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn default_serialises_to_toml() {
        let text = toml::to_string_pretty(&AppConfig::default()).unwrap();
        assert!(text.contains("[output]"));
        assert!(text.contains("placeholder = \"login\""));
    }

    #[test]
    fn config_path_is_not_empty() {
        let p = AppConfig::config_path();
        assert!(!p.as_os_str().is_empty());
    }
}

//! Configuration lookup for the CLI.
//!
//! A run uses at most one TOML file. [`ConfigSource::locate`] decides which,
//! and [`load_config`] reads it, falling back to [`AppConfig::default`] when
//! no file exists anywhere.

use std::{
    fmt, fs, io,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use trellis::{TrellisError, config::AppConfig};

/// Project-relative configuration file, resolved against the working directory.
const LOCAL_CONFIG: &str = "trellis/config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),
}

impl From<ConfigError> for TrellisError {
    fn from(err: ConfigError) -> Self {
        TrellisError::Io(io::Error::other(err.to_string()))
    }
}

/// Where the configuration of a run came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Given with `--config`. Must exist.
    Explicit(PathBuf),
    /// `trellis/config.toml` below the working directory.
    Local(PathBuf),
    /// `config.toml` in the platform configuration directory.
    System(PathBuf),
    /// No file found; built-in defaults.
    Default,
}

impl ConfigSource {
    /// Picks the configuration file for a run started in `cwd`.
    ///
    /// An explicit path always wins, even when it does not exist; the error
    /// surfaces when it is loaded. Otherwise the first existing file of the
    /// local and system locations is used.
    pub fn locate(explicit: Option<&Path>, cwd: &Path) -> ConfigSource {
        if let Some(path) = explicit {
            return ConfigSource::Explicit(path.to_path_buf());
        }

        let local = cwd.join(LOCAL_CONFIG);
        if local.is_file() {
            return ConfigSource::Local(local);
        }
        debug!(path = local.display().to_string(); "No local configuration file");

        match system_config_path() {
            Some(system) if system.is_file() => ConfigSource::System(system),
            Some(system) => {
                debug!(path = system.display().to_string(); "No system configuration file");
                ConfigSource::Default
            }
            None => {
                debug!("Could not determine platform-specific config directory");
                ConfigSource::Default
            }
        }
    }

    /// The file to read, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            ConfigSource::Explicit(path)
            | ConfigSource::Local(path)
            | ConfigSource::System(path) => Some(path),
            ConfigSource::Default => None,
        }
    }
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::Explicit(path) => write!(f, "explicit {}", path.display()),
            ConfigSource::Local(path) => write!(f, "local {}", path.display()),
            ConfigSource::System(path) => write!(f, "system {}", path.display()),
            ConfigSource::Default => f.write_str("built-in defaults"),
        }
    }
}

fn system_config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "trellis", "trellis").map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Loads the configuration `source` points at.
///
/// # Errors
///
/// Returns an error when an explicit file is missing, or when the chosen file
/// cannot be read or parsed.
pub fn load_config(source: &ConfigSource) -> Result<AppConfig, TrellisError> {
    let Some(path) = source.path() else {
        debug!("No configuration file found, using default configuration");
        return Ok(AppConfig::default());
    };

    info!(source:% = source; "Loading configuration");
    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()).into());
    }

    let content = fs::read_to_string(path)?;
    let config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use trellis::model::ArrowKind;

    use super::*;

    #[test]
    fn test_load_explicit_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r##"
[editor.node]
type = "task"
background_color = "#FFEECC"

[editor.edge]
arrow_target = "standard"

[graphml]
omit_default_shape = true
"##,
        )
        .unwrap();

        let source = ConfigSource::locate(Some(&path), dir.path());
        assert_eq!(source, ConfigSource::Explicit(path.clone()));

        let config = load_config(&source).unwrap();
        assert_eq!(config.editor().node().node_type, "task");
        assert_eq!(config.editor().node().width, 160.0);
        assert_eq!(config.editor().edge().arrow_target, Some(ArrowKind::Standard));
        assert!(config.graphml().omit_default_shape());
    }

    #[test]
    fn test_missing_explicit_config() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");

        let source = ConfigSource::locate(Some(&missing), dir.path());
        assert_eq!(source.path(), Some(missing.as_path()));

        let err = load_config(&source).unwrap_err();
        assert!(err.to_string().contains("Missing configuration file"));
    }

    #[test]
    fn test_local_config_is_found() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("trellis")).unwrap();
        let local = dir.path().join("trellis").join("config.toml");
        fs::write(&local, "[graphml]\nomit_default_shape = true\n").unwrap();

        let source = ConfigSource::locate(None, dir.path());
        assert_eq!(source, ConfigSource::Local(local));
        assert!(source.to_string().starts_with("local "));
        assert!(load_config(&source).unwrap().graphml().omit_default_shape());
    }

    #[test]
    fn test_local_directory_without_file_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("trellis").join("config.toml")).unwrap();

        let source = ConfigSource::locate(None, dir.path());
        assert!(!matches!(source, ConfigSource::Local(_)));
    }

    #[test]
    fn test_defaults_without_file() {
        let source = ConfigSource::Default;
        assert_eq!(source.path(), None);
        assert_eq!(source.to_string(), "built-in defaults");
        assert!(!load_config(&source).unwrap().graphml().omit_default_shape());
    }

    #[test]
    fn test_malformed_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[graphml]\nomit_default_shape = \"yes\"\n").unwrap();

        let err = load_config(&ConfigSource::Explicit(path.clone())).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Failed to parse TOML configuration"));
        assert!(message.contains(&path.display().to_string()));
    }
}

//! User configuration, read from a YAML file.
//!
//! Only the panel has anything to configure:
//!
//! ```yaml
//! panel:
//!   length: 12
//!   theme: dark
//! ```

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::panel::{Theme, DEFAULT_LENGTH, LENGTH_RANGE};

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub panel: PanelConfig,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct PanelConfig {
    /// Where the length slider starts.
    pub length: usize,
    pub theme: Theme,
}

impl Default for PanelConfig {
    fn default() -> PanelConfig {
        PanelConfig {
            length: DEFAULT_LENGTH,
            theme: Theme::default(),
        }
    }
}

impl Config {
    /// Load the configuration at `path`, or from the default location if no path is given.
    ///
    /// A missing file at the default location just means "use the defaults"; a missing file the
    /// user asked for explicitly is an error.
    pub fn load(path: Option<&Path>) -> Result<Config, ConfigError> {
        match path {
            Some(path) => Config::load_from(path),
            None => {
                let path = default_config_path()?;
                if path.exists() {
                    Config::load_from(&path)
                } else {
                    log::debug!("no config at {}; using defaults", path.display());
                    Ok(Config::default())
                }
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
        log::debug!("reading config from {}", path.display());
        let data =
            fs::read_to_string(path).map_err(|err| ConfigErrorRepr::Io(path.to_owned(), err))?;
        let config = Config::parse(&data).map_err(|err| match err.0 {
            ConfigErrorRepr::Parse(err) => ConfigErrorRepr::ParseFile(path.to_owned(), err),
            other => other,
        })?;
        Ok(config)
    }

    pub fn parse(data: &str) -> Result<Config, ConfigError> {
        // An empty document deserializes as null rather than an empty map.
        if data.trim().is_empty() {
            return Ok(Config::default());
        }
        let config: Config = serde_yaml::from_str(data).map_err(ConfigErrorRepr::Parse)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigErrorRepr> {
        if !LENGTH_RANGE.contains(&self.panel.length) {
            return Err(ConfigErrorRepr::LengthOutOfRange(self.panel.length));
        }
        Ok(())
    }
}

fn default_config_path() -> Result<PathBuf, ConfigErrorRepr> {
    let home = env::var_os("HOME").ok_or(ConfigErrorRepr::NoHome)?;
    let mut p = PathBuf::from(home);
    p.push(".passgen");
    p.push("config.yaml");
    Ok(p)
}

#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct ConfigError(ConfigErrorRepr);

impl From<ConfigErrorRepr> for ConfigError {
    fn from(err: ConfigErrorRepr) -> ConfigError {
        ConfigError(err)
    }
}

#[derive(Debug, thiserror::Error)]
enum ConfigErrorRepr {
    #[error("failed to read {}: {}", .0.display(), .1)]
    Io(PathBuf, #[source] io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[source] serde_yaml::Error),
    #[error("failed to parse {}: {}", .0.display(), .1)]
    ParseFile(PathBuf, #[source] serde_yaml::Error),
    #[error(
        "panel length {} is out of range; it must be between {} and {}",
        .0,
        LENGTH_RANGE.start(),
        LENGTH_RANGE.end()
    )]
    LengthOutOfRange(usize),
    #[error("HOME is not set; cannot find the default config file")]
    NoHome,
}

use std::path::PathBuf;

use thiserror::Error;

/// A configuration value outside of its documented domain. Carries enough context to find the
/// offending call site or config entry.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("invalid configuration: `{parameter}` = {value}, {reason}")]
pub struct InvalidConfiguration {
    pub parameter: &'static str,
    pub value: String,
    pub reason: &'static str,
}

impl InvalidConfiguration {
    pub fn new(parameter: &'static str, value: impl ToString, reason: &'static str) -> Self {
        Self {
            parameter,
            value: value.to_string(),
            reason,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Io error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Couldn't parse config at {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("Couldn't serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error(transparent)]
    Invalid(#[from] InvalidConfiguration),
}

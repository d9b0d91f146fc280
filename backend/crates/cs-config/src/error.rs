use std::fmt;
use std::panic::Location;
use std::path::PathBuf;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error as ThisError;

/// The `config.toml` table a rejected setting lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Server,
    Database,
    Client,
    Admin,
    Retry,
    Validation,
    /// Paths derived from the environment rather than a table.
    Environment,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Server => "[server]",
            Self::Database => "[database]",
            Self::Client => "[client]",
            Self::Admin => "[admin]",
            Self::Retry => "[retry]",
            Self::Validation => "[validation]",
            Self::Environment => "environment",
        };
        f.write_str(name)
    }
}

#[derive(ThisError, Debug)]
pub enum ConfigError {
    #[error("Invalid {section} setting: {message} {location}")]
    Invalid {
        section: Section,
        message: String,
        location: ErrorLocation,
    },

    #[error("Cannot access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error in {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[track_caller]
    pub fn invalid<S: Into<String>>(section: Section, message: S) -> Self {
        ConfigError::Invalid {
            section,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// `None` for file-level failures (unreadable or unparsable file).
    pub fn section(&self) -> Option<Section> {
        match self {
            Self::Invalid { section, .. } => Some(*section),
            Self::Io { .. } | Self::Toml { .. } => None,
        }
    }
}

pub type ConfigErrorResult<T> = StdResult<T, ConfigError>;

//! Error types of tapdance-config

use std::fmt;

use tapdance::TapDanceError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// File I/O error
    FileRead { path: String, message: String },
    /// TOML parsing error
    TomlParse { path: String, message: String },
    /// A key name which is neither a key code nor an alias
    UnknownKeycode { instance: String, name: String },
    /// Two instances share a name
    DuplicateName { name: String },
    /// More instances than a registry can hold
    TooManyInstances { max: usize },
    /// An action list is longer than `TAP_DANCE_MAX_STEPS`
    TooManySteps { instance: String, max: usize },
    /// The instances couldn't be turned into a registry
    Registry { message: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::FileRead { path, message } => {
                write!(f, "Failed to read config file '{}': {}", path, message)
            }
            ConfigError::TomlParse { path, message } => {
                write!(f, "Failed to parse '{}': {}", path, message)
            }
            ConfigError::UnknownKeycode { instance, name } => {
                write!(f, "Unknown keycode '{}' in tap dance '{}'", name, instance)
            }
            ConfigError::DuplicateName { name } => {
                write!(f, "Tap dance '{}' is defined more than once", name)
            }
            ConfigError::TooManyInstances { max } => {
                write!(f, "Too many tap dances, at most {} are supported", max)
            }
            ConfigError::TooManySteps { instance, max } => {
                write!(
                    f,
                    "Too many key steps in tap dance '{}', at most {} are supported per list",
                    instance, max
                )
            }
            ConfigError::Registry { message } => {
                write!(f, "Failed to build tap dances: {}", message)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<TapDanceError> for ConfigError {
    fn from(e: TapDanceError) -> Self {
        ConfigError::Registry { message: e.to_string() }
    }
}

/// Result type alias for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

use std::fmt;
use std::io;

use chase_core::GridError;

/// Errors raised while loading or validating a [`SimConfig`](crate::SimConfig).
#[derive(Debug)]
pub enum ConfigError {
    /// A setting is out of range or inconsistent with another.
    Invalid(String),
    /// The config file could not be read.
    Io(io::Error),
    /// The config file is not valid JSON for [`SimConfig`](crate::SimConfig).
    Json(serde_json::Error),
    /// The map or grid dimensions were rejected.
    Grid(GridError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid(s) => write!(f, "config: {s}"),
            Self::Io(e) => write!(f, "config: {e}"),
            Self::Json(e) => write!(f, "config: {e}"),
            Self::Grid(e) => write!(f, "config: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Invalid(_) => None,
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
            Self::Grid(e) => Some(e),
        }
    }
}

impl From<io::Error> for ConfigError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

impl From<GridError> for ConfigError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

//! Error types for confenv
//!
//! This module defines the error hierarchy used throughout the crate.
//! We use `thiserror` for library-style errors that are part of the API;
//! the binary wraps them with `anyhow` at the top level.

use crate::config::Format;
use std::path::PathBuf;
use thiserror::Error;

/// Boxed error returned by a format decoder
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Message carried by [`ConfigError::UnsupportedFormat`]
pub const UNSUPPORTED_FORMAT_MESSAGE: &str =
    "config file format not supported. Supported formats are json, xml, yaml, toml, hcl";

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}", UNSUPPORTED_FORMAT_MESSAGE)]
    UnsupportedFormat,

    #[error("Invalid {format} config: {source}")]
    Parse {
        format: Format,
        #[source]
        source: BoxError,
    },
}

impl ConfigError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn parse(format: Format, source: impl Into<BoxError>) -> Self {
        Self::Parse {
            format,
            source: source.into(),
        }
    }
}

/// Result type alias for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;

//! Configuration file loader
//!
//! Reads a config file, picks the decoder from the file extension and
//! deserializes the content on top of the default record. Environment
//! overrides are applied separately, see [`crate::overlay`].

use crate::config::format::Format;
use crate::config::types::ConfigRecord;
use crate::error::{ConfigError, Result};
use std::path::Path;
use tracing::debug;

/// Load configuration from a string in the given format
pub fn load_config_from_str(content: &str, format: Format) -> Result<ConfigRecord> {
    format
        .decode(content)
        .map_err(|e| ConfigError::parse(format, e))
}

/// Load configuration from a file.
///
/// The file is read before its extension is checked, so a missing file is
/// always reported as [`ConfigError::Io`].
pub fn load_config(path: impl AsRef<Path>) -> Result<ConfigRecord> {
    let path = path.as_ref();

    let data = std::fs::read(path).map_err(|e| ConfigError::io(path, e))?;

    let format = Format::from_path(path).ok_or(ConfigError::UnsupportedFormat)?;
    debug!(path = %path.display(), %format, bytes = data.len(), "Loading config file");

    let content = String::from_utf8(data).map_err(|e| ConfigError::parse(format, e))?;

    load_config_from_str(&content, format)
}

//! Config file formats
//!
//! Each supported format is one entry in [`REGISTRY`]: the file extension that
//! selects it and the decoder that turns file content into a [`ConfigRecord`].
//! Decoders go through serde's container default on `ConfigRecord`, so keys
//! missing from the file keep their default values.

use crate::config::types::ConfigRecord;
use crate::error::BoxError;
use std::fmt;
use std::path::Path;

/// Decoder from file content to a record
pub type Decoder = fn(&str) -> Result<ConfigRecord, BoxError>;

/// Supported config file format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Json,
    Xml,
    Yaml,
    Toml,
    Hcl,
}

/// A registered format
pub struct FormatEntry {
    pub format: Format,
    /// Extension without the leading dot, matched case-sensitively
    pub extension: &'static str,
    pub decode: Decoder,
}

/// All registered formats, in the order they are listed to users
pub static REGISTRY: &[FormatEntry] = &[
    FormatEntry {
        format: Format::Json,
        extension: "json",
        decode: decode_json,
    },
    FormatEntry {
        format: Format::Xml,
        extension: "xml",
        decode: decode_xml,
    },
    FormatEntry {
        format: Format::Yaml,
        extension: "yml",
        decode: decode_yaml,
    },
    FormatEntry {
        format: Format::Toml,
        extension: "toml",
        decode: decode_toml,
    },
    FormatEntry {
        format: Format::Hcl,
        extension: "hcl",
        decode: decode_hcl,
    },
];

impl Format {
    pub const ALL: [Format; 5] = [
        Format::Json,
        Format::Xml,
        Format::Yaml,
        Format::Toml,
        Format::Hcl,
    ];

    /// Determine the format from a path's extension.
    ///
    /// Returns `None` for a missing or unregistered extension. Matching is
    /// exact: `config.JSON` and `config.yaml` are not recognized.
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_str()?;
        Self::from_extension(ext)
    }

    /// Look up a format by extension (without the leading dot)
    pub fn from_extension(ext: &str) -> Option<Self> {
        REGISTRY
            .iter()
            .find(|entry| entry.extension == ext)
            .map(|entry| entry.format)
    }

    /// Registered file extension, without the leading dot
    pub fn extension(self) -> &'static str {
        self.entry().extension
    }

    /// Human-readable format name
    pub fn name(self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Xml => "xml",
            Format::Yaml => "yaml",
            Format::Toml => "toml",
            Format::Hcl => "hcl",
        }
    }

    /// Decode file content in this format
    pub fn decode(self, content: &str) -> Result<ConfigRecord, BoxError> {
        (self.entry().decode)(content)
    }

    fn entry(self) -> &'static FormatEntry {
        REGISTRY
            .iter()
            .find(|entry| entry.format == self)
            .unwrap_or_else(|| unreachable!("every format has a registry entry"))
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn decode_json(content: &str) -> Result<ConfigRecord, BoxError> {
    Ok(serde_json::from_str(content)?)
}

fn decode_xml(content: &str) -> Result<ConfigRecord, BoxError> {
    Ok(quick_xml::de::from_str(content)?)
}

fn decode_yaml(content: &str) -> Result<ConfigRecord, BoxError> {
    Ok(serde_yaml::from_str(content)?)
}

fn decode_toml(content: &str) -> Result<ConfigRecord, BoxError> {
    Ok(toml::from_str(content)?)
}

fn decode_hcl(content: &str) -> Result<ConfigRecord, BoxError> {
    Ok(hcl::from_str(content)?)
}

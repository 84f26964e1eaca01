//! Configuration module
//!
//! Handles loading the configuration record from JSON, XML, YAML, TOML and
//! HCL files.

pub mod format;
pub mod loader;
pub mod types;

pub use format::Format;
pub use loader::{load_config, load_config_from_str};
pub use types::*;

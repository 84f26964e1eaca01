//! Typed configuration from a file, overridden by the environment
//!
//! `confenv` loads a [`ConfigRecord`] from a JSON, XML, YAML, TOML or HCL file
//! and then lets environment variables override individual fields.
//!
//! ## Loading
//!
//! The format is chosen from the file extension (`.json`, `.xml`, `.yml`,
//! `.toml`, `.hcl`). Keys missing from the file keep their defaults.
//!
//! ## Environment overrides
//!
//! Every string field is paired with an environment variable derived from its
//! name, so `base_url` is read from `BASE_URL`. Empty variables are ignored.
//!
//! ## Example
//!
//! ```no_run
//! use confenv::{apply_env_overrides, load_config};
//!
//! let mut config = load_config("config/config.json")?;
//! apply_env_overrides(&mut config)?;
//! println!("{}", config.base_url);
//! # Ok::<(), confenv::ConfigError>(())
//! ```

// Lets `#[derive(EnvOverlay)]` emit `::confenv` paths inside this crate too
extern crate self as confenv;

pub mod config;
pub mod error;
pub mod overlay;

// Re-export main types
pub use config::{ConfigRecord, Format, load_config, load_config_from_str};
pub use error::{ConfigError, Result};
pub use overlay::{EnvField, EnvOverlay, apply_env_overrides, apply_overrides_from};

//! Environment variable overlay
//!
//! Overrides string fields of a configuration record with values from the
//! process environment. The set of fields and the variable read for each one
//! come from a static table generated by `#[derive(EnvOverlay)]`:
//!
//! ```text
//! name      -> NAME
//! base_url  -> BASE_URL
//! driver    -> DRIVER
//! ```
//!
//! A variable that is unset or empty leaves its field untouched. Only
//! `String` fields have a table entry; other field types are never touched.

use crate::error::Result;
use tracing::debug;

pub use confenv_macros::EnvOverlay;

/// One overridable field of a record
pub struct EnvField<T> {
    /// Field name in the record
    pub field: &'static str,
    /// Environment variable that overrides the field
    pub key: &'static str,
    pub get: fn(&T) -> &str,
    pub set: fn(&mut T, String),
}

impl<T> std::fmt::Debug for EnvField<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnvField")
            .field("field", &self.field)
            .field("key", &self.key)
            .finish()
    }
}

/// A record whose string fields can be overridden from the environment
pub trait EnvOverlay: Sized + 'static {
    /// Overridable fields, in declaration order
    fn env_fields() -> &'static [EnvField<Self>];
}

/// Override fields of `record` from the process environment.
///
/// Variables that are unset, empty or not valid Unicode are ignored. Always
/// returns `Ok` today; the error slot is kept for field types that need
/// conversion.
pub fn apply_env_overrides<T: EnvOverlay>(record: &mut T) -> Result<()> {
    apply_overrides_from(record, |key| std::env::var(key).ok())
}

/// Override fields of `record` using `lookup` as the variable source
pub fn apply_overrides_from<T, F>(record: &mut T, lookup: F) -> Result<()>
where
    T: EnvOverlay,
    F: Fn(&str) -> Option<String>,
{
    for field in T::env_fields() {
        let Some(value) = lookup(field.key).filter(|v| !v.is_empty()) else {
            continue;
        };

        if (field.get)(record) != value {
            debug!(
                field = field.field,
                key = field.key,
                "Overriding config field from environment"
            );
        }
        (field.set)(record, value);
    }

    Ok(())
}

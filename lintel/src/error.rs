//! Configuration errors.

use thiserror::Error;

/// A component was configured in a way it cannot render.
///
/// These surface synchronously from constructors, before any markup exists,
/// and are meant to be fixed in the calling code rather than recovered from.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("table `{table}` is selectable but has no unique id key")]
    SelectableWithoutUniqueIdKey { table: String },
}

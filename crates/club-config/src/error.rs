//! Errors raised while loading or checking clubhouse configuration.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A TOML file or `CLUB_*` variable could not be parsed into the schema.
    #[error("cannot read clubhouse configuration: {0}")]
    Figment(#[from] figment::Error),

    /// A section the command needs has no usable values.
    #[error("[{section}] is not configured")]
    NotConfigured { section: String },

    /// A field holds a value outside its accepted range.
    #[error("{field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

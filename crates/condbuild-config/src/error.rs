//! Error types for build flag resolution.

use thiserror::Error;

use crate::model::FlagName;

/// Result alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Primary error type for configuration operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A toggle value was not one of the accepted boolean spellings.
    #[error("invalid value '{value}' for {flag} (expected one of 1/0, true/false, yes/no, on/off)")]
    InvalidToggle {
        /// Flag whose value failed to parse.
        flag: FlagName,
        /// Offending raw value.
        value: String,
    },
}

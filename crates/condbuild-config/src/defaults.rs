//! Environment keys and toggle vocabulary shared by the loaders.
//!
//! # Design
//! - Keep key names in one place so compile-time and runtime lookups agree.

/// Environment key enabling the DEBUG flag.
pub const ENV_DEBUG: &str = "CONDBUILD_DEBUG";
/// Environment key enabling the RELEASE flag.
pub const ENV_RELEASE: &str = "CONDBUILD_RELEASE";
/// Environment key enabling the VERBOSE flag.
pub const ENV_VERBOSE: &str = "CONDBUILD_VERBOSE";
/// Environment key carrying the VERSION string.
pub const ENV_VERSION: &str = "CONDBUILD_VERSION";

/// Accepted spellings for an enabled toggle (compared case-insensitively).
pub(crate) const TRUTHY: [&str; 4] = ["1", "true", "yes", "on"];
/// Accepted spellings for a disabled toggle (compared case-insensitively).
pub(crate) const FALSEY: [&str; 4] = ["0", "false", "no", "off"];

//! Typed build flag models and partial override layers.

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Deserializer, Serialize};

use crate::defaults::{ENV_DEBUG, ENV_RELEASE, ENV_VERBOSE, ENV_VERSION};
use crate::validate::normalize_version;

/// Names of the configuration flags understood by the workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlagName {
    /// Debug build configuration.
    Debug,
    /// Release build configuration.
    Release,
    /// Verbose reporting.
    Verbose,
    /// Version string.
    Version,
}

impl FlagName {
    #[must_use]
    /// Render the flag as its upper-case label.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Release => "RELEASE",
            Self::Verbose => "VERBOSE",
            Self::Version => "VERSION",
        }
    }

    #[must_use]
    /// Environment key consulted for this flag.
    pub const fn env_key(self) -> &'static str {
        match self {
            Self::Debug => ENV_DEBUG,
            Self::Release => ENV_RELEASE,
            Self::Verbose => ENV_VERBOSE,
            Self::Version => ENV_VERSION,
        }
    }
}

impl Display for FlagName {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Fully resolved, immutable flag set for a single process run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildFlags {
    debug: bool,
    release: bool,
    verbose: bool,
    #[serde(default, deserialize_with = "deserialize_version")]
    version: Option<String>,
}

fn deserialize_version<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(normalize_version(raw.as_deref()))
}

impl BuildFlags {
    /// Construct a flag set directly. Empty or blank versions are treated as unset.
    #[must_use]
    pub fn new(debug: bool, release: bool, verbose: bool, version: Option<&str>) -> Self {
        Self {
            debug,
            release,
            verbose,
            version: normalize_version(version),
        }
    }

    /// Flags baked in at compile time.
    ///
    /// The boolean flags follow the crate's `debug`, `release` and `verbose`
    /// cargo features; the version is the value of `CONDBUILD_VERSION` in the
    /// build environment, if any.
    #[must_use]
    pub fn compiled() -> Self {
        Self::compiled_with_version(option_env!("CONDBUILD_VERSION"))
    }

    fn compiled_with_version(version: Option<&str>) -> Self {
        Self::new(
            cfg!(feature = "debug"),
            cfg!(feature = "release"),
            cfg!(feature = "verbose"),
            version,
        )
    }

    #[must_use]
    /// Whether the DEBUG flag is active.
    pub const fn debug(&self) -> bool {
        self.debug
    }

    #[must_use]
    /// Whether the RELEASE flag is active.
    pub const fn release(&self) -> bool {
        self.release
    }

    #[must_use]
    /// Whether the VERBOSE flag is active.
    pub const fn verbose(&self) -> bool {
        self.verbose
    }

    #[must_use]
    /// The VERSION string, when supplied.
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Active boolean flags in reporting order.
    #[must_use]
    pub fn active_labels(&self) -> Vec<&'static str> {
        [
            (self.debug, FlagName::Debug),
            (self.release, FlagName::Release),
            (self.verbose, FlagName::Verbose),
        ]
        .into_iter()
        .filter_map(|(active, name)| active.then_some(name.as_str()))
        .collect()
    }

    /// Compact profile label such as `DEBUG+VERBOSE`, or `none`.
    #[must_use]
    pub fn profile_label(&self) -> String {
        let labels = self.active_labels();
        if labels.is_empty() {
            "none".to_string()
        } else {
            labels.join("+")
        }
    }

    /// Apply a partial layer on top of these flags.
    #[must_use]
    pub fn apply(self, overrides: FlagOverrides) -> Self {
        Self {
            debug: overrides.debug.unwrap_or(self.debug),
            release: overrides.release.unwrap_or(self.release),
            verbose: overrides.verbose.unwrap_or(self.verbose),
            version: normalize_version(overrides.version.as_deref()).or(self.version),
        }
    }
}

/// Partial flag layer; `None` defers to the layer underneath.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlagOverrides {
    /// Override for DEBUG.
    pub debug: Option<bool>,
    /// Override for RELEASE.
    pub release: Option<bool>,
    /// Override for VERBOSE.
    pub verbose: Option<bool>,
    /// Override for VERSION; a blank value defers like `None`.
    pub version: Option<String>,
}

impl FlagOverrides {
    /// Combine two layers; values set in `higher` win.
    #[must_use]
    pub fn merge(self, higher: Self) -> Self {
        Self {
            debug: higher.debug.or(self.debug),
            release: higher.release.or(self.release),
            verbose: higher.verbose.or(self.verbose),
            version: normalize_version(higher.version.as_deref())
                .or_else(|| normalize_version(self.version.as_deref())),
        }
    }
}

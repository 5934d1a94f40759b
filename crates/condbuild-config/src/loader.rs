//! Flag sources and layered resolution.
//!
//! # Design
//! - Precedence is compiled < environment < command line.
//! - Lookups are injected so resolution stays a pure function under test.

use std::env;

use tracing::debug;

use crate::error::ConfigResult;
use crate::model::{BuildFlags, FlagName, FlagOverrides};
use crate::validate::{normalize_version, parse_toggle};

impl FlagOverrides {
    /// Build a layer from an arbitrary key lookup keyed by [`FlagName::env_key`].
    ///
    /// # Errors
    ///
    /// Returns an error if a toggle value is not a recognised boolean spelling.
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let toggle = |flag: FlagName| -> ConfigResult<Option<bool>> {
            lookup(flag.env_key()).map_or(Ok(None), |raw| parse_toggle(flag, &raw))
        };

        Ok(Self {
            debug: toggle(FlagName::Debug)?,
            release: toggle(FlagName::Release)?,
            verbose: toggle(FlagName::Verbose)?,
            version: normalize_version(lookup(FlagName::Version.env_key()).as_deref()),
        })
    }

    /// Build a layer from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a toggle variable holds an unrecognised value.
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }
}

/// Resolve the final flag set from its three layers.
#[must_use]
pub fn resolve(compiled: BuildFlags, env: FlagOverrides, cli: FlagOverrides) -> BuildFlags {
    let flags = compiled.apply(env.merge(cli));
    debug!(
        debug = flags.debug(),
        release = flags.release(),
        verbose = flags.verbose(),
        version = flags.version().unwrap_or("-"),
        "build flags resolved"
    );
    flags
}

//! Process-wide span guard.
//!
//! # Design
//! - Every event emitted after startup carries the active flag profile.

use tracing::{Span, span::Entered};

/// Guard that keeps the application-level span entered for the lifetime of the process.
pub struct GlobalContextGuard {
    _guard: Entered<'static>,
}

impl GlobalContextGuard {
    #[must_use]
    /// Enter the application-level tracing span for the lifetime of the guard.
    pub fn new(profile: impl Into<String>) -> Self {
        let profile = profile.into();
        let span: &'static Span = Box::leak(Box::new(tracing::info_span!(
            "app",
            profile = %profile,
            pkg_version = env!("CARGO_PKG_VERSION")
        )));
        let guard = span.enter();
        Self { _guard: guard }
    }
}

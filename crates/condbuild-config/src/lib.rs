#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]

//! Build flag configuration for the condbuild workspace.
//!
//! Layout: `model.rs` (flag set and partial layers), `validate.rs` (toggle
//! parsing), `loader.rs` (compiled/environment sources and resolution),
//! `defaults.rs` (environment keys and toggle vocabulary).

pub mod defaults;
pub mod error;
pub mod loader;
pub mod model;
pub mod validate;

pub use error::{ConfigError, ConfigResult};
pub use loader::resolve;
pub use model::{BuildFlags, FlagName, FlagOverrides};
pub use validate::{normalize_version, parse_toggle};

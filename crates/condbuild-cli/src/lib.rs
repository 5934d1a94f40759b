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
#![allow(clippy::redundant_pub_crate)]

//! Startup banner for the active build configuration.
//!
//! Layout:
//! - `cli.rs`: argument parsing, flag resolution and dispatch
//! - `report.rs`: the configuration report lines
//! - `entry.rs`: the full startup banner around the report
//! - `output.rs`: text and JSON renderers
//! - `error.rs`: CLI error type and exit codes
//! - `main.rs`: thin entrypoint delegating to `run()`

pub(crate) mod cli;
pub mod entry;
pub(crate) mod error;
pub(crate) mod output;
pub mod report;

pub use cli::run;
pub use entry::write_banner;
pub use report::{ConfigReport, print_config};

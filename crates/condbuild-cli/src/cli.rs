//! Argument parsing, flag resolution and dispatch for the `condbuild` binary.

use std::io::{self, Write};

use clap::{Parser, ValueEnum};
use condbuild_config::{BuildFlags, FlagOverrides, normalize_version, resolve};
use condbuild_telemetry::{
    DEFAULT_LOG_LEVEL, GlobalContextGuard, LogFormat, LoggingConfig, init_logging,
};
use tracing::info;

use crate::error::CliResult;
use crate::output::render;

/// Parses CLI arguments, renders the banner to standard output and returns
/// the process exit code.
#[must_use]
pub fn run() -> i32 {
    let cli = Cli::parse();

    let logging = LoggingConfig {
        level: &cli.log_level,
        format: cli.log_format.unwrap_or_else(LogFormat::infer),
    };
    if let Err(err) = init_logging(&logging) {
        eprintln!("warning: {err}");
    }

    let result = FlagOverrides::from_env()
        .map_err(Into::into)
        .and_then(|env| execute(&cli, env, &mut io::stdout().lock()));

    match result {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("error: {}", err.display_message());
            err.exit_code()
        }
    }
}

pub(crate) fn execute<W: Write + ?Sized>(
    cli: &Cli,
    env: FlagOverrides,
    out: &mut W,
) -> CliResult<()> {
    let flags = resolve(BuildFlags::compiled(), env, cli.overrides());
    let _context = GlobalContextGuard::new(flags.profile_label());
    info!(output = ?cli.output, "rendering startup banner");
    render(&flags, cli.output, out)
}

#[derive(Debug, Parser)]
#[allow(clippy::struct_excessive_bools)]
#[command(
    name = "condbuild",
    about = "Print the startup banner for the active build configuration"
)]
pub(crate) struct Cli {
    #[arg(long, conflicts_with = "no_debug", help = "Enable the DEBUG configuration")]
    debug: bool,
    #[arg(long, help = "Disable the DEBUG configuration")]
    no_debug: bool,
    #[arg(long, conflicts_with = "no_release", help = "Enable the RELEASE configuration")]
    release: bool,
    #[arg(long, help = "Disable the RELEASE configuration")]
    no_release: bool,
    #[arg(long, conflicts_with = "no_verbose", help = "Enable verbose reporting")]
    verbose: bool,
    #[arg(long, help = "Disable verbose reporting")]
    no_verbose: bool,
    #[arg(
        long = "build-version",
        value_name = "VERSION",
        help = "Version string to report"
    )]
    build_version: Option<String>,
    #[arg(
        long = "output",
        alias = "format",
        value_enum,
        default_value_t = OutputFormat::Text,
        help = "Select output format"
    )]
    output: OutputFormat,
    #[arg(long, env = "CONDBUILD_LOG_LEVEL", default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,
    #[arg(long, env = "CONDBUILD_LOG_FORMAT", value_parser = parse_log_format)]
    log_format: Option<LogFormat>,
}

impl Cli {
    fn overrides(&self) -> FlagOverrides {
        FlagOverrides {
            debug: switch(self.debug, self.no_debug),
            release: switch(self.release, self.no_release),
            verbose: switch(self.verbose, self.no_verbose),
            version: normalize_version(self.build_version.as_deref()),
        }
    }
}

const fn switch(on: bool, off: bool) -> Option<bool> {
    if on {
        Some(true)
    } else if off {
        Some(false)
    } else {
        None
    }
}

fn parse_log_format(raw: &str) -> Result<LogFormat, String> {
    raw.parse().map_err(|err: condbuild_telemetry::TelemetryError| err.to_string())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

//! Output renderers for the startup banner.

use std::io::Write;

use anyhow::Context;
use condbuild_config::BuildFlags;
use serde_json::json;

use crate::cli::OutputFormat;
use crate::entry::write_banner;
use crate::error::{CliError, CliResult};

pub(crate) fn render<W: Write + ?Sized>(
    flags: &BuildFlags,
    format: OutputFormat,
    out: &mut W,
) -> CliResult<()> {
    match format {
        OutputFormat::Text => write_banner(flags, out)
            .context("failed to write banner")
            .map_err(CliError::failure),
        OutputFormat::Json => {
            let text = render_json(flags)?;
            writeln!(out, "{text}")
                .and_then(|()| out.flush())
                .context("failed to write banner")
                .map_err(CliError::failure)
        }
    }
}

fn render_json(flags: &BuildFlags) -> CliResult<String> {
    let mut buffer = Vec::new();
    write_banner(flags, &mut buffer)
        .context("failed to render banner")
        .map_err(CliError::failure)?;
    let banner = String::from_utf8(buffer)
        .context("banner was not valid utf-8")
        .map_err(CliError::failure)?;
    let lines: Vec<&str> = banner.lines().collect();

    serde_json::to_string_pretty(&json!({ "flags": flags, "lines": lines }))
        .context("failed to format JSON")
        .map_err(CliError::failure)
}

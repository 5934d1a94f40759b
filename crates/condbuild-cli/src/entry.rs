//! Application entry banner wrapped around the configuration report.

use std::io::{self, Write};

use condbuild_config::BuildFlags;

use crate::report::print_config;

const STARTUP_LINE: &str = "Application starting...";
const DEBUG_LINES: [&str; 2] = [
    "[DEBUG] Debug mode enabled",
    "[DEBUG] Extra logging available",
];
const SUCCESS_LINE: &str = "Application running successfully";

/// Write the complete startup banner for `flags` and flush the writer.
///
/// # Errors
///
/// Returns any error raised by the underlying writer.
pub fn write_banner<W: Write + ?Sized>(flags: &BuildFlags, out: &mut W) -> io::Result<()> {
    writeln!(out, "{STARTUP_LINE}")?;
    writeln!(out)?;

    print_config(flags, out)?;

    if flags.debug() {
        writeln!(out)?;
        for line in DEBUG_LINES {
            writeln!(out, "{line}")?;
        }
    }

    if let Some(version) = flags.version() {
        writeln!(out)?;
        writeln!(out, "Version: {version}")?;
    }

    writeln!(out)?;
    writeln!(out, "{SUCCESS_LINE}")?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn banner(flags: &BuildFlags) -> String {
        let mut out = Vec::new();
        write_banner(flags, &mut out).expect("write to vec");
        String::from_utf8(out).expect("banner is utf-8")
    }

    #[test]
    fn bare_build_prints_only_startup_and_success() {
        assert_eq!(
            banner(&BuildFlags::default()),
            "Application starting...\n\n\nApplication running successfully\n"
        );
    }

    #[test]
    fn debug_build_without_version() {
        let text = banner(&BuildFlags::new(true, false, false, None));
        assert_eq!(
            text,
            "Application starting...\n\
             \n\
             Configuration: DEBUG\n\
             \x20 - Extra logging enabled\n\
             \x20 - Assertions enabled\n\
             \x20 - Optimization: O0\n\
             \n\
             [DEBUG] Debug mode enabled\n\
             [DEBUG] Extra logging available\n\
             \n\
             Application running successfully\n"
        );
        assert!(!text.contains("Version:"));
    }

    #[test]
    fn release_verbose_build_with_version() {
        let text = banner(&BuildFlags::new(false, true, true, Some("1.2.3")));
        assert_eq!(
            text,
            "Application starting...\n\
             \n\
             Configuration: RELEASE\n\
             \x20 - Optimization: O2\n\
             \x20 - Debug symbols: stripped\n\
             Verbose mode: ON\n\
             \n\
             Version: 1.2.3\n\
             \n\
             Application running successfully\n"
        );
        assert!(!text.contains("DEBUG"));
    }

    #[test]
    fn banner_is_deterministic() {
        let flags = BuildFlags::new(true, true, true, Some("2.0"));
        assert_eq!(banner(&flags), banner(&flags));
    }
}

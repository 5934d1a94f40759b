//! Configuration report: the lines describing which flags are active.

use std::io::{self, Write};
use std::iter::FusedIterator;

use condbuild_config::BuildFlags;

const DEBUG_BLOCK: [&str; 4] = [
    "Configuration: DEBUG",
    "  - Extra logging enabled",
    "  - Assertions enabled",
    "  - Optimization: O0",
];
const RELEASE_BLOCK: [&str; 3] = [
    "Configuration: RELEASE",
    "  - Optimization: O2",
    "  - Debug symbols: stripped",
];
const VERBOSE_BLOCK: [&str; 1] = ["Verbose mode: ON"];

/// Lazy, single-pass iterator over the report lines for a flag set.
///
/// Blocks are independent; DEBUG comes before RELEASE, which comes before
/// VERBOSE. With no flags active the iterator is empty.
#[derive(Debug)]
pub struct ConfigReport {
    blocks: [&'static [&'static str]; 3],
    block: usize,
    line: usize,
}

impl ConfigReport {
    /// Prepare the report for `flags`.
    #[must_use]
    pub const fn new(flags: &BuildFlags) -> Self {
        Self {
            blocks: [
                block_if(flags.debug(), &DEBUG_BLOCK),
                block_if(flags.release(), &RELEASE_BLOCK),
                block_if(flags.verbose(), &VERBOSE_BLOCK),
            ],
            block: 0,
            line: 0,
        }
    }
}

const fn block_if(active: bool, block: &'static [&'static str]) -> &'static [&'static str] {
    if active { block } else { &[] }
}

impl Iterator for ConfigReport {
    type Item = &'static str;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(block) = self.blocks.get(self.block) {
            if let Some(&line) = block.get(self.line) {
                self.line += 1;
                return Some(line);
            }
            self.block += 1;
            self.line = 0;
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self
            .blocks
            .iter()
            .skip(self.block)
            .copied()
            .map(<[&str]>::len)
            .sum::<usize>()
            .saturating_sub(self.line);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ConfigReport {}

impl FusedIterator for ConfigReport {}

/// Write the configuration report for `flags`, one line per entry.
///
/// # Errors
///
/// Returns any error raised by the underlying writer.
pub fn print_config<W: Write + ?Sized>(flags: &BuildFlags, out: &mut W) -> io::Result<()> {
    for line in ConfigReport::new(flags) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(flags: &BuildFlags) -> Vec<&'static str> {
        ConfigReport::new(flags).collect()
    }

    #[test]
    fn no_flags_produce_no_lines() {
        assert!(lines(&BuildFlags::default()).is_empty());
        assert_eq!(ConfigReport::new(&BuildFlags::default()).len(), 0);
    }

    #[test]
    fn debug_block_has_header_and_three_details() {
        let report = lines(&BuildFlags::new(true, false, false, None));
        assert_eq!(report, DEBUG_BLOCK.to_vec());
    }

    #[test]
    fn debug_precedes_release_when_both_active() {
        let report = lines(&BuildFlags::new(true, true, false, None));
        assert_eq!(report.len(), 7);
        assert_eq!(report[0], "Configuration: DEBUG");
        assert_eq!(report[4], "Configuration: RELEASE");
        assert_eq!(report[6], "  - Debug symbols: stripped");
    }

    #[test]
    fn verbose_line_comes_last() {
        let report = lines(&BuildFlags::new(false, true, true, Some("9.9")));
        assert_eq!(
            report,
            vec![
                "Configuration: RELEASE",
                "  - Optimization: O2",
                "  - Debug symbols: stripped",
                "Verbose mode: ON",
            ]
        );
    }

    #[test]
    fn iterator_is_fused_and_reports_remaining_len() {
        let mut report = ConfigReport::new(&BuildFlags::new(false, false, true, None));
        assert_eq!(report.len(), 1);
        assert_eq!(report.next(), Some("Verbose mode: ON"));
        assert_eq!(report.len(), 0);
        assert_eq!(report.next(), None);
        assert_eq!(report.next(), None);
    }

    #[test]
    fn print_config_terminates_each_line() {
        let mut out = Vec::new();
        print_config(&BuildFlags::new(false, false, true, None), &mut out)
            .expect("write to vec");
        assert_eq!(out, b"Verbose mode: ON\n");
    }
}

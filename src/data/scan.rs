//! The single pass over a stats file.
//!
//! A [`Scanner`] classifies each line as accepted, out-of-window, or
//! garbled, folds accepted records into the [`BinCache`], and produces a
//! [`DensityReport`] at the end. There is exactly one pass: the scanner is
//! fed lines once and then read out.

use std::io::BufRead;

use anyhow::Result;

use super::bins::BinCache;
use super::report::DensityReport;
use crate::record::{RecordError, StatsRecord};

/// What happened to one input line.
#[derive(Debug, PartialEq, Eq)]
pub enum LineOutcome {
    /// Parsed and folded into the bin cache.
    Accepted,
    /// Parsed, but its age maps outside the window. Dropped silently.
    OutOfWindow,
    /// Did not parse as a stats record.
    Garbled(RecordError),
}

/// Drives the per-line pass against a fixed reference time.
///
/// "Now" is captured once at construction; bin assignment depends only on
/// each record's age relative to it, so re-running later shifts all
/// assignments.
#[derive(Debug)]
pub struct Scanner {
    now: i64,
    cache: BinCache,
    lines_read: u64,
    accepted: u64,
}

impl Scanner {
    /// Create a scanner with the given reference timestamp (unix seconds).
    pub fn new(now: i64) -> Self {
        Self {
            now,
            cache: BinCache::new(),
            lines_read: 0,
            accepted: 0,
        }
    }

    /// Classify one line and fold it into the cache.
    ///
    /// Every call counts toward lines read, whatever the outcome.
    pub fn push_line(&mut self, line: &str) -> LineOutcome {
        self.lines_read += 1;

        let record: StatsRecord = match line.parse() {
            Ok(record) => record,
            Err(e) => return LineOutcome::Garbled(e),
        };

        let age = self.now - record.timestamp;
        if self.cache.observe(age, record.max) {
            self.accepted += 1;
            LineOutcome::Accepted
        } else {
            LineOutcome::OutOfWindow
        }
    }

    /// Run the pass over a reader, reporting garbled lines to stderr.
    ///
    /// Lines are read as raw bytes: invalid UTF-8 is replaced lossily and
    /// the line falls through to the garbled tier like any other unparsable
    /// input. Only genuine I/O failures abort the pass.
    pub fn scan<R: BufRead>(&mut self, reader: R) -> Result<()> {
        for raw in reader.split(b'\n') {
            let raw = raw?;
            let line = String::from_utf8_lossy(&raw);
            if let LineOutcome::Garbled(_) = self.push_line(&line) {
                eprintln!("Garbled: {line}");
            }
        }
        Ok(())
    }

    /// The bin cache accumulated so far.
    pub fn cache(&self) -> &BinCache {
        &self.cache
    }

    /// Summarize the counters into a density report.
    pub fn report(&self) -> DensityReport {
        DensityReport::new(self.lines_read, self.accepted, self.cache.populated())
    }
}

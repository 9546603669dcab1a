// Library crate: public API items may not be used by the binary
#![allow(unused)]

//! # drap-doctor
//!
//! A diagnostic CLI and library for checking the density of a DRAP
//! (D-Region Absorption Prediction) solar-activity stats feed.
//!
//! The tool reads a text log of timestamped statistics, bins each record
//! by its age into a fixed 440-slot window covering the trailing 24 hours,
//! keeps the maximum observed value per bin, and reports whether the feed
//! is dense enough for downstream plotting.
//!
//! ## Architecture
//!
//! - **[`record`]**: line parsing - one `<epoch> : <min> <max> <mean>`
//!   record per line, with sscanf-compatible leniency
//! - **[`data`]**: the rolling [`BinCache`], the single-pass [`Scanner`],
//!   and the [`DensityReport`] diagnostics
//!
//! ## Usage
//!
//! ### As a CLI tool
//!
//! ```bash
//! # Check a stats file against the current wall clock
//! drap-doctor drap-stats.txt
//!
//! # Reproducible binning with a fixed reference time, plus a JSON export
//! drap-doctor drap-stats.txt --now 1700000000 --export bins.json
//! ```
//!
//! ### As a library
//!
//! ```
//! use drap_doctor::{LineOutcome, Scanner};
//!
//! let mut scanner = Scanner::new(1_700_000_000);
//! let outcome = scanner.push_line("1699996400 : 1.0 5.0 3.0");
//! assert_eq!(outcome, LineOutcome::Accepted);
//!
//! let report = scanner.report();
//! assert_eq!(report.accepted, 1);
//! ```

pub mod data;
pub mod record;

// Re-export main types for convenience
pub use data::{
    bin_index, BinCache, DensityReport, DensityVerdict, LineOutcome, Scanner, DRAP_NPTS,
    DRAP_PERIOD_SECS,
};
pub use record::{RecordError, StatsRecord};

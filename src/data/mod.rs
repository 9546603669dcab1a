//! Binning and diagnostics for scanned records.
//!
//! ## Submodules
//!
//! - [`bins`]: the fixed 440-bin rolling window and age-to-index mapping
//! - [`scan`]: the single pass that classifies lines and fills the window
//! - [`report`]: density counters and the verdict printed at the end
//!
//! ## Data flow
//!
//! ```text
//! stats file line
//!        │
//!        ▼
//! Scanner::push_line()
//!        │
//!        ├──▶ StatsRecord (parse)
//!        │
//!        ├──▶ BinCache::observe() (age → bin, per-bin max)
//!        │
//!        └──▶ DensityReport (after the pass)
//! ```

pub mod bins;
pub mod report;
pub mod scan;

pub use bins::{bin_index, BinCache, DRAP_NPTS, DRAP_PERIOD_SECS};
pub use report::{DensityReport, DensityVerdict};
pub use scan::{LineOutcome, Scanner};

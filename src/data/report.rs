//! Density diagnostics for a completed scan.

use std::fmt;

use serde::Serialize;

use super::bins::{BinCache, DRAP_NPTS};

/// Verdict on whether the feed is dense enough for plotting.
///
/// A feed is acceptable when at least half the bins are populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DensityVerdict {
    Acceptable,
    TooSparse,
}

impl DensityVerdict {
    /// Classify a populated-bin count.
    pub fn from_populated(populated: usize) -> Self {
        if populated < DRAP_NPTS / 2 {
            DensityVerdict::TooSparse
        } else {
            DensityVerdict::Acceptable
        }
    }
}

impl fmt::Display for DensityVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DensityVerdict::Acceptable => write!(f, "Data density acceptable"),
            DensityVerdict::TooSparse => write!(f, "Data likely too sparse"),
        }
    }
}

/// Summary counters for one pass over a stats file.
#[derive(Debug, Clone, Serialize)]
pub struct DensityReport {
    /// Total lines read, including garbled and out-of-window ones.
    pub lines_read: u64,
    /// Lines that parsed and landed inside the window.
    pub accepted: u64,
    /// Bins with at least one accepted observation.
    pub populated: usize,
    /// Density classification of the populated count.
    pub verdict: DensityVerdict,
}

impl DensityReport {
    /// Build a report from the pass counters.
    pub fn new(lines_read: u64, accepted: u64, populated: usize) -> Self {
        Self {
            lines_read,
            accepted,
            populated,
            verdict: DensityVerdict::from_populated(populated),
        }
    }

    /// Build the JSON export document: this summary plus the populated bin
    /// series as `(hours_ago, max)` pairs ordered by bin index.
    pub fn export_document(&self, cache: &BinCache) -> serde_json::Value {
        let series: Vec<serde_json::Value> = cache
            .populated_bins()
            .map(|(hours_ago, max)| {
                serde_json::json!({
                    "hours_ago": hours_ago,
                    "max": max,
                })
            })
            .collect();

        serde_json::json!({
            "summary": self,
            "series": series,
        })
    }
}

impl fmt::Display for DensityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Lines read:      {}", self.lines_read)?;
        writeln!(f, "Lines accepted:  {}", self.accepted)?;
        writeln!(f, "Bins populated:  {} / {}", self.populated, DRAP_NPTS)?;
        write!(f, "{}", self.verdict)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_boundary_at_half() {
        assert_eq!(
            DensityVerdict::from_populated(219),
            DensityVerdict::TooSparse
        );
        assert_eq!(
            DensityVerdict::from_populated(220),
            DensityVerdict::Acceptable
        );
        assert_eq!(
            DensityVerdict::from_populated(0),
            DensityVerdict::TooSparse
        );
    }

    #[test]
    fn test_report_display_format() {
        let report = DensityReport::new(10, 7, 5);
        assert_eq!(
            report.to_string(),
            "Lines read:      10\n\
             Lines accepted:  7\n\
             Bins populated:  5 / 440\n\
             Data likely too sparse"
        );
    }

    #[test]
    fn test_export_document_contains_only_populated_bins() {
        let mut cache = BinCache::new();
        cache.observe(3600, 5.0); // bin 421
        cache.observe(7200, 2.0); // bin 403
        let report = DensityReport::new(3, 2, cache.populated());

        let doc = report.export_document(&cache);
        assert_eq!(doc["summary"]["lines_read"], 3);
        assert_eq!(doc["summary"]["accepted"], 2);
        assert_eq!(doc["summary"]["populated"], 2);
        assert_eq!(doc["summary"]["verdict"], "too_sparse");

        let series = doc["series"].as_array().unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series[0]["hours_ago"], -2.0);
        assert_eq!(series[0]["max"], 2.0);
        assert_eq!(series[1]["hours_ago"], -1.0);
        assert_eq!(series[1]["max"], 5.0);
    }

    #[test]
    fn test_report_serializes_verdict_name() {
        let report = DensityReport::new(1000, 900, 300);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["verdict"], "acceptable");
        assert_eq!(json["populated"], 300);
    }
}

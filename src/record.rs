//! Parsing of individual stats records.
//!
//! A DRAP stats file carries one record per line:
//!
//! ```text
//! <unix-timestamp> : <min> <max> <mean>
//! ```
//!
//! The reference reader parsed these with `sscanf("%ld : %f %f %f")`, which
//! is lenient about whitespace: the colon may be glued to either neighbor,
//! and anything after the mean field is ignored. This parser accepts the
//! same shapes.

use std::str::FromStr;

use thiserror::Error;

/// Errors that can occur when parsing a stats record line.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    /// The line has no `:` separator between timestamp and values.
    #[error("missing ':' separator")]
    MissingSeparator,

    /// The timestamp field is not an integer.
    #[error("invalid timestamp: {0:?}")]
    Timestamp(String),

    /// Fewer than three value fields after the separator.
    #[error("missing value field")]
    MissingValue,

    /// A value field is not a float.
    #[error("invalid value: {0:?}")]
    Value(String),
}

/// One timestamped solar-activity observation.
///
/// Records are ephemeral: they are parsed, folded into the bin cache,
/// and dropped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatsRecord {
    /// Observation time, unix seconds.
    pub timestamp: i64,
    /// Minimum value over the observation interval.
    pub min: f32,
    /// Maximum value over the observation interval.
    pub max: f32,
    /// Mean value over the observation interval.
    pub mean: f32,
}

impl FromStr for StatsRecord {
    type Err = RecordError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let (stamp, values) = line.split_once(':').ok_or(RecordError::MissingSeparator)?;

        let timestamp: i64 = stamp
            .trim()
            .parse()
            .map_err(|_| RecordError::Timestamp(stamp.trim().to_string()))?;

        let mut fields = values.split_whitespace();
        let mut next_value = || -> Result<f32, RecordError> {
            let field = fields.next().ok_or(RecordError::MissingValue)?;
            field.parse().map_err(|_| RecordError::Value(field.to_string()))
        };

        let min = next_value()?;
        let max = next_value()?;
        let mean = next_value()?;

        // Trailing fields after the mean are ignored, as sscanf did.
        Ok(StatsRecord {
            timestamp,
            min,
            max,
            mean,
        })
    }
}

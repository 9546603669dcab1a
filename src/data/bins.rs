//! The fixed-size rolling window of binned observations.
//!
//! Observations are placed by age: the trailing 24 hours are divided into
//! 440 bins, bin 0 holding the oldest sub-interval and bin 439 the newest.
//! Each bin keeps the maximum "max" value seen and the hours-ago position
//! of the last record that landed in it.

/// Number of bins in the rolling window.
pub const DRAP_NPTS: usize = 440;

/// Width of the rolling window in seconds (24 hours).
pub const DRAP_PERIOD_SECS: i64 = 24 * 3600;

/// Map a record's age (seconds before "now") to its bin index.
///
/// Returns `None` when the age falls outside the window. The division
/// truncates toward zero, matching the reference reader: ages up to
/// ~196 s past 24 h still map to bin 0, and age 0 maps to index 440,
/// which is out of range and dropped.
pub fn bin_index(age: i64) -> Option<usize> {
    let xi = DRAP_NPTS as i64 * (DRAP_PERIOD_SECS - age) / DRAP_PERIOD_SECS;
    if (0..DRAP_NPTS as i64).contains(&xi) {
        Some(xi as usize)
    } else {
        None
    }
}

/// The bin cache: two parallel series over the 440-bin window.
///
/// `x` holds the hours-ago value assigned to each bin (negative by
/// convention, `age / -3600`), `y` the maximum observed value. Both start
/// zeroed; a bin with `y > 0` counts as populated.
#[derive(Debug, Clone)]
pub struct BinCache {
    x: [f32; DRAP_NPTS],
    y: [f32; DRAP_NPTS],
}

impl Default for BinCache {
    fn default() -> Self {
        Self::new()
    }
}

impl BinCache {
    /// Create a zero-initialized cache.
    pub fn new() -> Self {
        Self {
            x: [0.0; DRAP_NPTS],
            y: [0.0; DRAP_NPTS],
        }
    }

    /// Fold one observation into the cache.
    ///
    /// Returns `false` when the age maps outside the window; the
    /// observation is then dropped without further effect. The strict `>`
    /// comparison means a NaN value never replaces a stored maximum.
    pub fn observe(&mut self, age: i64, max_value: f32) -> bool {
        let Some(xi) = bin_index(age) else {
            return false;
        };

        self.x[xi] = age as f32 / -3600.0;
        if max_value > self.y[xi] {
            self.y[xi] = max_value;
        }
        true
    }

    /// Hours-ago position per bin (negative-valued).
    pub fn hours_ago(&self) -> &[f32] {
        &self.x
    }

    /// Maximum observed value per bin.
    pub fn maxima(&self) -> &[f32] {
        &self.y
    }

    /// Number of bins holding at least one accepted observation.
    pub fn populated(&self) -> usize {
        self.y.iter().filter(|&&v| v > 0.0).count()
    }

    /// Iterate the populated bins as `(hours_ago, max)` pairs, ordered by
    /// bin index (oldest first).
    pub fn populated_bins(&self) -> impl Iterator<Item = (f32, f32)> + '_ {
        self.x
            .iter()
            .zip(self.y.iter())
            .filter(|(_, &y)| y > 0.0)
            .map(|(&x, &y)| (x, y))
    }
}

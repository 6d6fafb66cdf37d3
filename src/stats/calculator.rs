//! Statistics Calculator Module
//! Running min/max/mean accumulation for a single numeric column.

/// Decimal places used by the statistics report unless configured otherwise.
pub const DEFAULT_REPORT_PRECISION: usize = 3;

/// Summary statistics for one column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnStats {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

impl ColumnStats {
    /// Format as a one-line report with `precision` decimals.
    pub fn report(&self, label: &str, precision: usize) -> String {
        format!(
            "{} stats: min={:.p$}, max={:.p$}, mean={:.p$}",
            label,
            self.min,
            self.max,
            self.mean,
            p = precision
        )
    }
}

/// Format `stats` with the default report precision.
pub fn format_stats_report(stats: &ColumnStats, label: &str) -> String {
    stats.report(label, DEFAULT_REPORT_PRECISION)
}

/// Single-pass accumulator: O(1) per value, no buffering.
///
/// The mean is kept as a running mean so it stays finite whenever the
/// inputs are finite.
#[derive(Debug, Clone, Copy)]
pub struct StatsAccumulator {
    min: f64,
    max: f64,
    mean: f64,
    count: usize,
}

impl Default for StatsAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl StatsAccumulator {
    pub fn new() -> Self {
        Self {
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
            mean: 0.0,
            count: 0,
        }
    }

    pub fn push(&mut self, value: f64) {
        self.min = self.min.min(value);
        self.max = self.max.max(value);
        self.count += 1;
        self.mean += (value - self.mean) / self.count as f64;
    }

    /// Finished statistics, or `None` if nothing was pushed.
    pub fn finish(&self) -> Option<ColumnStats> {
        if self.count == 0 {
            return None;
        }
        Some(ColumnStats {
            min: self.min,
            max: self.max,
            mean: self.mean,
        })
    }
}

//! Stats module - per-column summary statistics

mod calculator;

pub use calculator::{format_stats_report, ColumnStats, StatsAccumulator, DEFAULT_REPORT_PRECISION};

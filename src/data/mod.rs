//! Data module - CSV parsing, loading and saving

mod loader;
mod processor;

pub use loader::{DataLoader, TableRow, DEFAULT_TABLE_PRECISION};
pub use processor::{CsvSeriesProcessor, ParseResult, Sample};
